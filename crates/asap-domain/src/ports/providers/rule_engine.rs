//! Rule Engine Port
//!
//! The engine is opaque: it turns a compiled ruleset and a structural
//! document into raw assertion outcomes. Loading is assumed to be expensive;
//! callers cache [`CompiledRules`] per [`RuleArtifactKey`].

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{
    Assertion, CompiledRules, ReferenceData, RuleArtifactKey, StructuralDocument,
};

/// Everything one evaluation needs besides the rules themselves
#[derive(Debug, Clone, Copy)]
pub struct EvaluationInput<'a> {
    /// Document under validation
    pub document: &'a StructuralDocument,
    /// Baseline and registry locations for the ruleset
    pub reference: &'a ReferenceData,
}

/// Rule Engine Port
///
/// # Example
///
/// ```ignore
/// let rules = engine.load(&RuleArtifactKey::new(DocumentType::Ssp, RulesetKey::Rev4)).await?;
/// let assertions = engine
///     .evaluate(&rules, &EvaluationInput { document: &doc, reference: &reference })
///     .await?;
/// ```
#[async_trait]
pub trait RuleEngine: Send + Sync + std::fmt::Debug {
    /// Resolve and load the compiled rule artifact for a key
    ///
    /// Fails with `Error::RuleEngine` when the artifact is missing,
    /// unreachable or of an incompatible format.
    async fn load(&self, key: &RuleArtifactKey) -> Result<CompiledRules>;

    /// Evaluate loaded rules against a structural document
    ///
    /// Assertions are returned in the order the engine reported them.
    async fn evaluate(
        &self,
        rules: &CompiledRules,
        input: &EvaluationInput<'_>,
    ) -> Result<Vec<Assertion>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
