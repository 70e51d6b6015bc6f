//! Rule Engine Gateway
//!
//! Wraps a [`RuleEngine`] with a per-session cache of compiled artifacts and
//! resolves the reference data each ruleset needs during evaluation.
//!
//! Loading is expensive. The cache populates once per
//! [`RuleArtifactKey`]; concurrent first requests for the same key share a
//! single load.

use std::sync::Arc;

use asap_domain::error::{Error, Result};
use asap_domain::ports::{EvaluationInput, RuleEngine};
use asap_domain::value_objects::{
    ArtifactLayout, Assertion, CompiledRules, ReferenceData, RuleArtifactKey, RulesetKey,
    StructuralDocument,
};
use moka::future::Cache;

use crate::domain_services::parse_document;

/// Default number of compiled artifacts kept per session
pub const DEFAULT_ARTIFACT_CACHE_CAPACITY: u64 = 16;

/// Session-scoped access to compiled rules
#[derive(Debug)]
pub struct RuleEngineGateway {
    engine: Arc<dyn RuleEngine>,
    layout: ArtifactLayout,
    compiled: Cache<RuleArtifactKey, Arc<CompiledRules>>,
}

impl RuleEngineGateway {
    /// Create a gateway with the default cache capacity
    pub fn new(engine: Arc<dyn RuleEngine>, layout: ArtifactLayout) -> Self {
        Self::with_capacity(engine, layout, DEFAULT_ARTIFACT_CACHE_CAPACITY)
    }

    /// Create a gateway holding at most `capacity` compiled artifacts
    pub fn with_capacity(engine: Arc<dyn RuleEngine>, layout: ArtifactLayout, capacity: u64) -> Self {
        Self {
            engine,
            layout,
            compiled: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Name of the wrapped engine
    pub fn engine_name(&self) -> &str {
        self.engine.provider_name()
    }

    /// Reference datasets for a ruleset
    pub fn reference_data(&self, ruleset: RulesetKey) -> ReferenceData {
        self.layout.reference_data(ruleset)
    }

    /// Compiled rules for a key, loading them on first use
    pub async fn compiled_rules(&self, key: RuleArtifactKey) -> Result<Arc<CompiledRules>> {
        let engine = Arc::clone(&self.engine);
        self.compiled
            .try_get_with(key, async move {
                tracing::debug!(key = %key, engine = engine.provider_name(), "loading compiled rules");
                let rules = engine
                    .load(&key)
                    .await
                    .map_err(|e| as_rule_engine_error(key, e))?;
                tracing::info!(
                    key = %key,
                    location = %rules.location,
                    digest = %rules.digest,
                    "compiled rules loaded"
                );
                Ok::<_, Error>(Arc::new(rules))
            })
            .await
            .map_err(|shared| {
                Arc::try_unwrap(shared).unwrap_or_else(|shared| Error::rule_engine(shared.to_string()))
            })
    }

    /// Number of compiled artifacts currently cached
    pub async fn cached_artifacts(&self) -> u64 {
        self.compiled.run_pending_tasks().await;
        self.compiled.entry_count()
    }

    /// Evaluate a structural document against a ruleset
    ///
    /// The document must be well-formed and rooted at the element of its
    /// declared type; violating that precondition, failing to load the
    /// artifact, or failing evaluation all yield `Error::RuleEngine`.
    pub async fn evaluate(
        &self,
        ruleset: RulesetKey,
        document: &StructuralDocument,
    ) -> Result<Vec<Assertion>> {
        check_precondition(document)?;
        let key = RuleArtifactKey::new(document.document_type, ruleset);
        let rules = self.compiled_rules(key).await?;
        let reference = self.reference_data(ruleset);
        let input = EvaluationInput {
            document,
            reference: &reference,
        };
        let assertions = self
            .engine
            .evaluate(&rules, &input)
            .await
            .map_err(|e| as_rule_engine_error(key, e))?;
        tracing::debug!(key = %key, assertions = assertions.len(), "evaluation finished");
        Ok(assertions)
    }
}

fn as_rule_engine_error(key: RuleArtifactKey, error: Error) -> Error {
    match error {
        error @ Error::RuleEngine { .. } => error,
        other => Error::rule_engine_with_source(format!("rules for {key} failed"), other),
    }
}

fn check_precondition(document: &StructuralDocument) -> Result<()> {
    let parsed = parse_document(&document.xml).map_err(|e| {
        Error::rule_engine(format!(
            "{} document is not well-formed: {e}",
            document.document_type
        ))
    })?;
    let root = parsed.root_element().tag_name().name();
    let expected = document.document_type.root_element();
    if root != expected {
        return Err(Error::rule_engine(format!(
            "{} document has root '{root}', expected '{expected}'",
            document.document_type
        )));
    }
    Ok(())
}
