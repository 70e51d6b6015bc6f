//! Artifact Store Port

use async_trait::async_trait;

use crate::error::Result;

/// Reads and writes artifacts addressed by location string
///
/// # Implementations
///
/// - **File**: local paths, atomic overwrite on write
/// - **Http**: read-only access to published artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync + std::fmt::Debug {
    /// Read the raw bytes at a location
    async fn read(&self, location: &str) -> Result<Vec<u8>>;

    /// Read a location as UTF-8 text
    async fn read_to_string(&self, location: &str) -> Result<String> {
        let bytes = self.read(location).await?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Replace the contents at a location
    async fn write(&self, location: &str, contents: &[u8]) -> Result<()>;

    /// Delete the artifact at a location; a missing artifact is not an error
    async fn remove(&self, location: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
