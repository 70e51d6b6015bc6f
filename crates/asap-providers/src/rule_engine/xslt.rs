//! External-Processor Rule Engine
//!
//! Compiled Schematron rulesets are SEF packages laid out per ruleset and
//! document type. Evaluation hands the package, the document and the
//! reference data locations to the processor and decodes the SVRL report it
//! prints.
//!
//! ## Example
//!
//! ```ignore
//! use asap_providers::rule_engine::XsltRuleEngine;
//!
//! let engine = XsltRuleEngine::from_config(
//!     &RuleEngineProviderConfig::new("xslt")
//!         .with_command("xslt3")
//!         .with_base_location("https://example.org/asap/dist"),
//! )?;
//! ```

use std::sync::Arc;

use asap_application::ports::registry::{
    RULE_ENGINE_PROVIDERS, RuleEngineProviderConfig, RuleEngineProviderEntry,
};
use asap_domain::error::{Error, Result};
use asap_domain::ports::{EvaluationInput, RuleEngine};
use asap_domain::value_objects::{ArtifactLayout, Assertion, CompiledRules, RuleArtifactKey};
use async_trait::async_trait;

use super::svrl::parse_svrl;
use crate::artifact_store::LocationArtifactStore;
use crate::constants::{BASELINES_PARAM, DEFAULT_XSLT_COMMAND, REGISTRY_PARAM};
use crate::xslt::{ArtifactMaterializer, XsltProcessor, default_cache_dir};

/// Rule engine backed by an external XSLT 3.0 processor
#[derive(Debug, Clone)]
pub struct XsltRuleEngine {
    processor: XsltProcessor,
    materializer: ArtifactMaterializer,
    layout: ArtifactLayout,
}

impl XsltRuleEngine {
    /// Create an engine from its parts
    pub fn new(
        processor: XsltProcessor,
        materializer: ArtifactMaterializer,
        layout: ArtifactLayout,
    ) -> Self {
        Self {
            processor,
            materializer,
            layout,
        }
    }

    /// Create an engine from registry configuration
    pub fn from_config(config: &RuleEngineProviderConfig) -> std::result::Result<Self, String> {
        if config.base_location.trim().is_empty() {
            return Err("xslt rule engine requires an artifact base location".to_string());
        }
        let command = config
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_XSLT_COMMAND.to_string());
        let store = config
            .store
            .clone()
            .unwrap_or_else(|| Arc::new(LocationArtifactStore::new()));
        let cache_dir = config.cache_dir.clone().unwrap_or_else(default_cache_dir);
        Ok(Self::new(
            XsltProcessor::new(command, config.args.clone()),
            ArtifactMaterializer::new(store, cache_dir),
            ArtifactLayout::new(config.base_location.clone()),
        ))
    }
}

#[async_trait]
impl RuleEngine for XsltRuleEngine {
    async fn load(&self, key: &RuleArtifactKey) -> Result<CompiledRules> {
        let location = self.layout.rule_artifact(*key);
        let artifact = self.materializer.materialize(&location).await.map_err(|e| {
            Error::rule_engine_with_source(format!("cannot load compiled rules {location}"), e)
        })?;
        Ok(CompiledRules {
            key: *key,
            location: artifact.location,
            digest: artifact.digest,
            local_path: artifact.local_path,
        })
    }

    async fn evaluate(
        &self,
        rules: &CompiledRules,
        input: &EvaluationInput<'_>,
    ) -> Result<Vec<Assertion>> {
        let source = tempfile::Builder::new()
            .prefix("asap-")
            .suffix(".xml")
            .tempfile()
            .map_err(|e| Error::rule_engine_with_source("cannot create evaluation input", e))?;
        tokio::fs::write(source.path(), input.document.xml.as_bytes())
            .await
            .map_err(|e| Error::rule_engine_with_source("cannot write evaluation input", e))?;

        let args = vec![
            format!("-sef:{}", rules.local_path.display()),
            format!("-s:{}", source.path().display()),
            format!("{BASELINES_PARAM}={}", input.reference.baselines),
            format!("{REGISTRY_PARAM}={}", input.reference.registry),
        ];
        let output = self
            .processor
            .run(&args)
            .await
            .map_err(|e| Error::rule_engine_with_source(format!("cannot evaluate {}", rules.key), e))?;
        if !output.success {
            return Err(Error::rule_engine(format!(
                "evaluation of {} failed: {}",
                rules.key,
                output.diagnostic()
            )));
        }

        let report = String::from_utf8(output.stdout)
            .map_err(|e| Error::rule_engine_with_source("SVRL report is not UTF-8", e))?;
        parse_svrl(&report)
            .map_err(|e| Error::rule_engine_with_source(format!("cannot decode report of {}", rules.key), e))
    }

    fn provider_name(&self) -> &str {
        "xslt"
    }
}

#[linkme::distributed_slice(RULE_ENGINE_PROVIDERS)]
static XSLT_RULE_ENGINE: RuleEngineProviderEntry = RuleEngineProviderEntry {
    name: "xslt",
    description: "Compiled Schematron run by an external XSLT 3.0 processor (Saxon xslt3)",
    factory: |config: &RuleEngineProviderConfig| {
        Ok(Arc::new(XsltRuleEngine::from_config(config)?))
    },
};
