//! HTTP artifact store

use std::time::Duration;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::constants::{HTTP_TIMEOUT_SECS, HTTP_USER_AGENT};

/// Read-only store for artifacts published over HTTP
#[derive(Debug, Clone)]
pub struct HttpArtifactStore {
    client: Client,
}

impl HttpArtifactStore {
    /// Create a store with the default client settings
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    /// Create a store with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtifactStore for HttpArtifactStore {
    async fn read(&self, location: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("Request for {location} failed"), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found(location));
        }
        if !status.is_success() {
            return Err(Error::network(format!("{location} returned {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::network_with_source(format!("Reading {location} failed"), e))?;
        tracing::debug!(location, bytes = bytes.len(), "artifact fetched");
        Ok(bytes.to_vec())
    }

    async fn write(&self, location: &str, _contents: &[u8]) -> Result<()> {
        Err(Error::invalid_argument(format!(
            "cannot write to remote location {location}"
        )))
    }

    async fn remove(&self, location: &str) -> Result<()> {
        Err(Error::invalid_argument(format!(
            "cannot remove remote location {location}"
        )))
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
