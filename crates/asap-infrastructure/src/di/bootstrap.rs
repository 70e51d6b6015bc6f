//! Application Context Bootstrap
//!
//! Rule engines and converters are resolved by name from the linkme
//! registries; the context owns one instance of every use case.
//!
//! ```text
//! AppConfig → registry configs → linkme registries → Arc<dyn Provider>
//!                                                        ↓
//!                                    RuleEngineGateway, OscalService, summarizers
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let result = context.oscal_service().validate_file("ssp.xml").await?;
//! ```

use std::sync::Arc;

use asap_application::ports::registry::{
    ConverterProviderConfig, RuleEngineProviderConfig, resolve_converter_provider,
    resolve_rule_engine_provider,
};
use asap_application::{
    AssertionViewGenerator, DocumentTypeRegistry, DocumentationCatalog, OscalService,
    RuleEngineGateway, SchematronSummary, XSpecScenarioSummaryGenerator,
};
use asap_domain::error::{Error, Result};
use asap_domain::ports::{ArtifactStore, JsonToXmlConverter, RuleEngine};
use asap_domain::value_objects::DocumentType;
use asap_providers::LocationArtifactStore;
use tracing::info;

use crate::config::AppConfig;

/// Application context: configuration plus wired use cases
///
/// Created once per process and never torn down.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    store: Arc<dyn ArtifactStore>,
    gateway: Arc<RuleEngineGateway>,
    oscal_service: Arc<OscalService>,
    schematron_summary: Arc<SchematronSummary>,
    assertion_views: Arc<AssertionViewGenerator>,
    xspec_summaries: Arc<XSpecScenarioSummaryGenerator>,
    documentation: Arc<DocumentationCatalog>,
}

impl AppContext {
    /// Artifact store shared by every component
    pub fn store(&self) -> Arc<dyn ArtifactStore> {
        self.store.clone()
    }

    /// Rule engine gateway with its compiled artifact cache
    pub fn gateway(&self) -> Arc<RuleEngineGateway> {
        self.gateway.clone()
    }

    /// Validation orchestrator
    pub fn oscal_service(&self) -> Arc<OscalService> {
        self.oscal_service.clone()
    }

    /// Rule catalog summarizer
    pub fn schematron_summary(&self) -> Arc<SchematronSummary> {
        self.schematron_summary.clone()
    }

    /// Assertion view generator
    pub fn assertion_views(&self) -> Arc<AssertionViewGenerator> {
        self.assertion_views.clone()
    }

    /// Scenario summarizer
    pub fn xspec_summaries(&self) -> Arc<XSpecScenarioSummaryGenerator> {
        self.xspec_summaries.clone()
    }

    /// Reader of generated summaries
    pub fn documentation(&self) -> Arc<DocumentationCatalog> {
        self.documentation.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("store", &self.store.provider_name())
            .field("engine", &self.gateway.engine_name())
            .field("base_location", &self.config.artifacts.base_location)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context with the default artifact store
///
/// Providers are registered via linkme when `asap-providers` is linked; no
/// explicit registration call is needed.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    init_app_with_store(config, Arc::new(LocationArtifactStore::new()))
}

/// Initialize the application context reading artifacts through `store`
pub fn init_app_with_store(config: AppConfig, store: Arc<dyn ArtifactStore>) -> Result<AppContext> {
    let config = Arc::new(config);

    let engine = resolve_engine(&config, &store)?;
    info!(
        provider = engine.provider_name(),
        base_location = %config.artifacts.base_location,
        "Rule engine resolved"
    );

    let registry = DocumentTypeRegistry::try_from_fn(|document_type| {
        resolve_converter(&config, &store, document_type)
    })?;
    info!(provider = %config.conversion.provider, "Converters resolved");

    let gateway = Arc::new(RuleEngineGateway::with_capacity(
        engine,
        config.artifacts.layout(),
        config.artifacts.cache_capacity,
    ));
    let oscal_service = Arc::new(
        OscalService::new(registry, gateway.clone(), store.clone())
            .with_policy(config.validation.policy())
            .with_default_ruleset(config.validation.default_ruleset),
    );

    let summaries = config.summaries.layout();
    Ok(AppContext {
        schematron_summary: Arc::new(SchematronSummary::new(store.clone(), summaries.clone())),
        assertion_views: Arc::new(AssertionViewGenerator::new(store.clone(), summaries.clone())),
        xspec_summaries: Arc::new(XSpecScenarioSummaryGenerator::new(
            store.clone(),
            summaries.clone(),
        )),
        documentation: Arc::new(DocumentationCatalog::new(store.clone(), summaries)),
        oscal_service,
        gateway,
        store,
        config,
    })
}

fn resolve_engine(config: &AppConfig, store: &Arc<dyn ArtifactStore>) -> Result<Arc<dyn RuleEngine>> {
    let mut engine_config = RuleEngineProviderConfig::new(config.engine.provider.clone())
        .with_command(config.engine.command.clone())
        .with_args(config.engine.args.clone())
        .with_base_location(config.artifacts.base_location.clone())
        .with_store(store.clone());
    if let Some(cache_dir) = &config.artifacts.cache_dir {
        engine_config = engine_config.with_cache_dir(cache_dir.clone());
    }
    resolve_rule_engine_provider(&engine_config).map_err(Error::configuration)
}

fn resolve_converter(
    config: &AppConfig,
    store: &Arc<dyn ArtifactStore>,
    document_type: DocumentType,
) -> Result<Arc<dyn JsonToXmlConverter>> {
    let mut converter_config =
        ConverterProviderConfig::new(config.conversion.provider.clone(), document_type)
            .with_command(config.engine.command.clone())
            .with_args(config.engine.args.clone())
            .with_base_location(config.artifacts.base_location.clone())
            .with_store(store.clone());
    if let Some(cache_dir) = &config.artifacts.cache_dir {
        converter_config = converter_config.with_cache_dir(cache_dir.clone());
    }
    resolve_converter_provider(&converter_config).map_err(Error::configuration)
}
