//! JSON-to-XML Converter Provider Registry
//!
//! One converter instance is created per document type; the factory receives
//! the document type it will serve in its config.

use std::path::PathBuf;
use std::sync::Arc;

use asap_domain::DocumentType;
use asap_domain::ports::{ArtifactStore, JsonToXmlConverter};

/// Configuration for converter creation
#[derive(Debug, Clone)]
pub struct ConverterProviderConfig {
    /// Provider name (e.g., "native", "xslt")
    pub provider: String,
    /// Document type the converter serves
    pub document_type: DocumentType,
    /// Processor executable for process-backed converters
    pub command: Option<String>,
    /// Arguments passed before the generated ones
    pub args: Vec<String>,
    /// Base location of compiled converter artifacts
    pub base_location: String,
    /// Directory receiving materialized remote artifacts
    pub cache_dir: Option<PathBuf>,
    /// Store used to read artifacts; providers build their own when absent
    pub store: Option<Arc<dyn ArtifactStore>>,
}

impl ConverterProviderConfig {
    /// Create a new config for a provider and document type
    pub fn new(provider: impl Into<String>, document_type: DocumentType) -> Self {
        Self {
            provider: provider.into(),
            document_type,
            command: None,
            args: Vec::new(),
            base_location: String::new(),
            cache_dir: None,
            store: None,
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

/// Registry entry for converter providers
pub struct ConverterProviderEntry {
    /// Unique provider name (e.g., "native", "xslt")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ConverterProviderConfig) -> Result<Arc<dyn JsonToXmlConverter>, String>,
}

#[linkme::distributed_slice]
pub static CONVERTER_PROVIDERS: [ConverterProviderEntry] = [..];

/// Resolve a converter by name from the registry
pub fn resolve_converter_provider(
    config: &ConverterProviderConfig,
) -> Result<Arc<dyn JsonToXmlConverter>, String> {
    let provider_name = &config.provider;

    for entry in CONVERTER_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CONVERTER_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown converter provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered converter providers as (name, description) pairs
pub fn list_converter_providers() -> Vec<(&'static str, &'static str)> {
    CONVERTER_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
