//! Validation Results

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Assertion, DocumentType, RulesetKey, SeverityPolicy};

/// Overall outcome of a validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// No blocking assertion failed
    Pass,
    /// At least one blocking assertion failed
    Fail,
    /// The document could not be represented structurally; no rules ran
    Malformed,
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::Malformed => write!(f, "MALFORMED"),
        }
    }
}

/// Value Object: result of validating one document
///
/// ## Business Rules
///
/// - Assertions keep the order the engine reported them in
/// - `Malformed` results never carry assertions
/// - The outcome is a pure function of the assertions and the policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Resolved document type, if resolution got that far
    pub document_type: Option<DocumentType>,
    /// Ruleset the document was checked against
    pub ruleset: RulesetKey,
    /// Folded outcome
    pub outcome: ValidationOutcome,
    /// Engine assertions in report order
    pub assertions: Vec<Assertion>,
    /// Why the document was malformed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl ValidationResult {
    /// Fold engine assertions into a result
    pub fn from_assertions(
        document_type: DocumentType,
        ruleset: RulesetKey,
        assertions: Vec<Assertion>,
        policy: &SeverityPolicy,
    ) -> Self {
        let outcome = if assertions.iter().any(|a| policy.is_blocking_failure(a)) {
            ValidationOutcome::Fail
        } else {
            ValidationOutcome::Pass
        };
        Self {
            document_type: Some(document_type),
            ruleset,
            outcome,
            assertions,
            diagnostic: None,
        }
    }

    /// Result for a document that could not be structurally represented
    pub fn malformed<S: Into<String>>(
        document_type: Option<DocumentType>,
        ruleset: RulesetKey,
        diagnostic: S,
    ) -> Self {
        Self {
            document_type,
            ruleset,
            outcome: ValidationOutcome::Malformed,
            assertions: Vec::new(),
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// Whether the document passed
    pub fn is_pass(&self) -> bool {
        self.outcome == ValidationOutcome::Pass
    }

    /// Failing assertions, blocking or not
    pub fn failed_assertions(&self) -> impl Iterator<Item = &Assertion> {
        self.assertions.iter().filter(|a| !a.passed)
    }

    /// Number of failing assertions
    pub fn failure_count(&self) -> usize {
        self.failed_assertions().count()
    }
}
