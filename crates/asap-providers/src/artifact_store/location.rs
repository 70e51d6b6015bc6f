//! Scheme-dispatching artifact store

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::is_remote_location;
use async_trait::async_trait;

use super::FileArtifactStore;
#[cfg(feature = "store-http")]
use super::HttpArtifactStore;

/// Store that sends URLs to HTTP and everything else to the filesystem
#[derive(Debug, Clone)]
pub struct LocationArtifactStore {
    file: FileArtifactStore,
    #[cfg(feature = "store-http")]
    http: Option<HttpArtifactStore>,
}

impl LocationArtifactStore {
    /// Create a store
    ///
    /// If the HTTP client cannot be built, remote reads fail with a network
    /// error instead of failing construction.
    pub fn new() -> Self {
        Self {
            file: FileArtifactStore::new(),
            #[cfg(feature = "store-http")]
            http: HttpArtifactStore::new()
                .inspect_err(|e| tracing::warn!(error = %e, "HTTP artifact store unavailable"))
                .ok(),
        }
    }

    #[cfg(feature = "store-http")]
    fn remote(&self, location: &str) -> Result<&dyn ArtifactStore> {
        match &self.http {
            Some(http) => Ok(http),
            None => Err(Error::network(format!("no HTTP client available for {location}"))),
        }
    }

    #[cfg(not(feature = "store-http"))]
    fn remote(&self, location: &str) -> Result<&dyn ArtifactStore> {
        Err(Error::invalid_argument(format!(
            "remote location {location} requires the store-http feature"
        )))
    }

    fn store_for(&self, location: &str) -> Result<&dyn ArtifactStore> {
        if is_remote_location(location) {
            self.remote(location)
        } else {
            Ok(&self.file)
        }
    }
}

impl Default for LocationArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactStore for LocationArtifactStore {
    async fn read(&self, location: &str) -> Result<Vec<u8>> {
        self.store_for(location)?.read(location).await
    }

    async fn write(&self, location: &str, contents: &[u8]) -> Result<()> {
        self.store_for(location)?.write(location, contents).await
    }

    async fn remove(&self, location: &str) -> Result<()> {
        self.store_for(location)?.remove(location).await
    }

    fn provider_name(&self) -> &str {
        "location"
    }
}
