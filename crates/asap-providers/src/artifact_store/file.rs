//! Filesystem artifact store

use std::path::{Path, PathBuf};

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use async_trait::async_trait;

/// Artifact store over the local filesystem
///
/// Writes land in a sibling temporary file first and are renamed into place,
/// so readers never observe a partially written artifact.
#[derive(Debug, Clone, Default)]
pub struct FileArtifactStore;

impl FileArtifactStore {
    /// Create a new filesystem store
    pub fn new() -> Self {
        Self
    }

    /// Filesystem path for a location
    pub fn path_for(location: &str) -> PathBuf {
        PathBuf::from(location.strip_prefix("file://").unwrap_or(location))
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

#[async_trait]
impl ArtifactStore for FileArtifactStore {
    async fn read(&self, location: &str) -> Result<Vec<u8>> {
        let path = Self::path_for(location);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::not_found(location)),
            Err(e) => Err(Error::io_with_source(format!("Failed to read {location}"), e)),
        }
    }

    async fn write(&self, location: &str, contents: &[u8]) -> Result<()> {
        let path = Self::path_for(location);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create directory for {location}"), e)
            })?;
        }

        let staging = staging_path(&path);
        tokio::fs::write(&staging, contents)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to write {location}"), e))?;
        if let Err(e) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(Error::io_with_source(format!("Failed to replace {location}"), e));
        }
        tracing::debug!(location, bytes = contents.len(), "artifact written");
        Ok(())
    }

    async fn remove(&self, location: &str) -> Result<()> {
        match tokio::fs::remove_file(Self::path_for(location)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_source(format!("Failed to remove {location}"), e)),
        }
    }

    fn provider_name(&self) -> &str {
        "file"
    }
}
