//! Artifact Materialization
//!
//! The processor only reads local files. Remote packages are downloaded once
//! into a content-addressed cache directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use asap_domain::constants::COMPILED_ARTIFACT_EXTENSION;
use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use asap_domain::value_objects::is_remote_location;
use sha2::{Digest, Sha256};

use crate::artifact_store::FileArtifactStore;
use crate::constants::ARTIFACT_CACHE_SUBDIR;

/// User cache directory for materialized artifacts
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(ARTIFACT_CACHE_SUBDIR)
}

/// A compiled package available on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedArtifact {
    /// Location the package was read from
    pub location: String,
    /// Hex SHA-256 of the package bytes
    pub digest: String,
    /// Local file to hand to the processor
    pub local_path: PathBuf,
}

/// Reads compiled packages and places remote ones on disk
#[derive(Debug, Clone)]
pub struct ArtifactMaterializer {
    store: Arc<dyn ArtifactStore>,
    cache_dir: PathBuf,
}

impl ArtifactMaterializer {
    /// Create a materializer
    pub fn new(store: Arc<dyn ArtifactStore>, cache_dir: PathBuf) -> Self {
        Self { store, cache_dir }
    }

    /// Directory receiving remote packages
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Read, check and (for remote locations) cache a compiled package
    ///
    /// The package must be a JSON object; anything else is rejected as an
    /// incompatible artifact.
    pub async fn materialize(&self, location: &str) -> Result<MaterializedArtifact> {
        let bytes = self.store.read(location).await?;
        if !is_compiled_package(&bytes) {
            return Err(Error::invalid_argument(format!(
                "{location} is not a compiled stylesheet package"
            )));
        }
        let digest = hex::encode(Sha256::digest(&bytes));

        let local_path = if is_remote_location(location) {
            let path = self
                .cache_dir
                .join(format!("{digest}.{COMPILED_ARTIFACT_EXTENSION}"));
            if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                tokio::fs::create_dir_all(&self.cache_dir).await.map_err(|e| {
                    Error::io_with_source(
                        format!("cannot create cache directory {}", self.cache_dir.display()),
                        e,
                    )
                })?;
                tokio::fs::write(&path, &bytes).await.map_err(|e| {
                    Error::io_with_source(format!("cannot cache {location}"), e)
                })?;
                tracing::debug!(location, path = %path.display(), "remote artifact materialized");
            }
            path
        } else {
            FileArtifactStore::path_for(location)
        };

        Ok(MaterializedArtifact {
            location: location.to_string(),
            digest,
            local_path,
        })
    }
}

fn is_compiled_package(bytes: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(bytes).is_ok_and(|value| value.is_object())
}
