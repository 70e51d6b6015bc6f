//! Shared helpers for provider tests

use std::collections::HashMap;
use std::sync::Mutex;

use asap_domain::error::{Error, Result};
use asap_domain::ports::ArtifactStore;
use async_trait::async_trait;

/// Store serving fixed bytes per location, including remote ones
#[derive(Debug, Default)]
pub struct MapArtifactStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MapArtifactStore {
    pub fn with(location: &str, contents: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap()
            .insert(location.to_string(), contents.as_bytes().to_vec());
        store
    }
}

#[async_trait]
impl ArtifactStore for MapArtifactStore {
    async fn read(&self, location: &str) -> Result<Vec<u8>> {
        self.entries
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .ok_or_else(|| Error::not_found(location))
    }

    async fn write(&self, location: &str, contents: &[u8]) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(location.to_string(), contents.to_vec());
        Ok(())
    }

    async fn remove(&self, location: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(location);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "map"
    }
}

/// Command that cannot be spawned on any test machine
pub const MISSING_COMMAND: &str = "asap-test-no-such-xslt-processor";
