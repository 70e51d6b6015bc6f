//! Null rule engine for testing
//!
//! Accepts every document: loading succeeds without reading anything and
//! evaluation reports no assertions.

use std::path::PathBuf;

use asap_application::ports::registry::{
    RULE_ENGINE_PROVIDERS, RuleEngineProviderConfig, RuleEngineProviderEntry,
};
use asap_domain::error::Result;
use asap_domain::ports::{EvaluationInput, RuleEngine};
use asap_domain::value_objects::{Assertion, CompiledRules, RuleArtifactKey};
use async_trait::async_trait;

/// Rule engine that reports no assertions
#[derive(Debug, Clone, Default)]
pub struct NullRuleEngine;

impl NullRuleEngine {
    /// Create a null rule engine
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RuleEngine for NullRuleEngine {
    async fn load(&self, key: &RuleArtifactKey) -> Result<CompiledRules> {
        Ok(CompiledRules {
            key: *key,
            location: format!("null:{key}"),
            digest: String::new(),
            local_path: PathBuf::new(),
        })
    }

    async fn evaluate(
        &self,
        _rules: &CompiledRules,
        _input: &EvaluationInput<'_>,
    ) -> Result<Vec<Assertion>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(RULE_ENGINE_PROVIDERS)]
static NULL_RULE_ENGINE: RuleEngineProviderEntry = RuleEngineProviderEntry {
    name: "null",
    description: "Rule engine that reports no assertions (testing)",
    factory: |_config: &RuleEngineProviderConfig| Ok(std::sync::Arc::new(NullRuleEngine::new())),
};
