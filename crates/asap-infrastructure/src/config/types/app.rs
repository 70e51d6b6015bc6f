//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::artifacts::{ArtifactsConfig, ConversionConfig, EngineConfig};
pub use super::logging::LoggingConfig;
pub use super::validation::{SummariesConfig, ValidationConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Compiled artifact and reference data locations
    pub artifacts: ArtifactsConfig,
    /// Rule engine provider
    pub engine: EngineConfig,
    /// JSON-to-XML converter provider
    pub conversion: ConversionConfig,
    /// Outcome folding
    pub validation: ValidationConfig,
    /// Summary sources and outputs
    pub summaries: SummariesConfig,
}
