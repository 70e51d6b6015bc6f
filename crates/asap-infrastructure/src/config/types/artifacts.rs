//! Artifact and provider configuration types

use std::path::PathBuf;

use asap_application::use_cases::rule_engine_gateway::DEFAULT_ARTIFACT_CACHE_CAPACITY;
use asap_domain::value_objects::ArtifactLayout;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARTIFACT_BASE, DEFAULT_CONVERSION_PROVIDER, DEFAULT_ENGINE_COMMAND,
    DEFAULT_ENGINE_PROVIDER,
};

/// Where compiled artifacts and reference data live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Base path or http(s) URL
    pub base_location: String,
    /// Directory receiving downloaded remote artifacts
    pub cache_dir: Option<PathBuf>,
    /// Compiled rule artifacts kept loaded at once
    pub cache_capacity: u64,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            base_location: DEFAULT_ARTIFACT_BASE.to_string(),
            cache_dir: None,
            cache_capacity: DEFAULT_ARTIFACT_CACHE_CAPACITY,
        }
    }
}

impl ArtifactsConfig {
    /// Artifact layout rooted at the base location
    pub fn layout(&self) -> ArtifactLayout {
        ArtifactLayout::new(self.base_location.clone())
    }
}

/// Rule engine selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Provider name ("xslt", "null")
    pub provider: String,
    /// Processor executable
    pub command: String,
    /// Arguments passed before the generated ones
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_ENGINE_PROVIDER.to_string(),
            command: DEFAULT_ENGINE_COMMAND.to_string(),
            args: Vec::new(),
        }
    }
}

/// Converter selection
///
/// The xslt converter reuses the engine's command and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Provider name ("native", "xslt")
    pub provider: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CONVERSION_PROVIDER.to_string(),
        }
    }
}
