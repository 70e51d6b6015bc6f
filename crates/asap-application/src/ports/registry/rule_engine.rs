//! Rule Engine Provider Registry
//!
//! Rule engines register themselves via `linkme::distributed_slice` and are
//! selected by the `engine.provider` configuration value.

use std::path::PathBuf;
use std::sync::Arc;

use asap_domain::ports::{ArtifactStore, RuleEngine};

/// Configuration for rule engine creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct RuleEngineProviderConfig {
    /// Provider name (e.g., "xslt", "null")
    pub provider: String,
    /// Processor executable for process-backed engines
    pub command: Option<String>,
    /// Arguments passed before the generated ones
    pub args: Vec<String>,
    /// Base location of compiled rule artifacts
    pub base_location: String,
    /// Directory receiving materialized remote artifacts
    pub cache_dir: Option<PathBuf>,
    /// Store used to read artifacts; providers build their own when absent
    pub store: Option<Arc<dyn ArtifactStore>>,
}

impl RuleEngineProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the processor command
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set leading processor arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the artifact base location
    pub fn with_base_location(mut self, base_location: impl Into<String>) -> Self {
        self.base_location = base_location.into();
        self
    }

    /// Set the materialization directory
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    /// Set the artifact store
    pub fn with_store(mut self, store: Arc<dyn ArtifactStore>) -> Self {
        self.store = Some(store);
        self
    }
}

/// Registry entry for rule engine providers
pub struct RuleEngineProviderEntry {
    /// Unique provider name (e.g., "xslt", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&RuleEngineProviderConfig) -> Result<Arc<dyn RuleEngine>, String>,
}

#[linkme::distributed_slice]
pub static RULE_ENGINE_PROVIDERS: [RuleEngineProviderEntry] = [..];

/// Resolve a rule engine by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn RuleEngine>)` - Created engine instance
/// * `Err(String)` - Error message if the provider is unknown or creation failed
pub fn resolve_rule_engine_provider(
    config: &RuleEngineProviderConfig,
) -> Result<Arc<dyn RuleEngine>, String> {
    let provider_name = &config.provider;

    for entry in RULE_ENGINE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = RULE_ENGINE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown rule engine provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered rule engine providers as (name, description) pairs
pub fn list_rule_engine_providers() -> Vec<(&'static str, &'static str)> {
    RULE_ENGINE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
