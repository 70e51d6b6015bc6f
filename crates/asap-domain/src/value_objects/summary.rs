//! Summary Value Objects
//!
//! Write-once records produced by the batch summarizers and consumed by the
//! documentation front-end. Field names are camelCase on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DocumentType;

/// Descriptive metadata for one Schematron assertion or report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    /// Rule identifier
    pub id: String,
    /// Normalized message text
    pub message: String,
    /// Schematron role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// `true` for `sch:report`, `false` for `sch:assert`
    pub is_report: bool,
    /// Context expression of the enclosing rule
    pub context: String,
    /// Test expression
    pub test: String,
    /// Identifier of the enclosing pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Reference URL from the `see` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see: Option<String>,
}

/// Flattened rule catalog for one document type
///
/// Keyed by rule identifier; iteration and serialization order is sorted, so
/// regenerating from unchanged input is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalogSummary {
    /// Document type the catalog belongs to
    pub document_type: DocumentType,
    /// Rules keyed by identifier
    pub rules: BTreeMap<String, RuleSummary>,
}

impl RuleCatalogSummary {
    /// Create a catalog
    pub fn new(document_type: DocumentType, rules: BTreeMap<String, RuleSummary>) -> Self {
        Self {
            document_type,
            rules,
        }
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Named group of assertion identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionGroup {
    /// Group title
    pub title: String,
    /// Member assertion identifiers, in source order
    pub assertion_ids: Vec<String>,
}

/// One way of grouping a document type's assertions for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionView {
    /// View title
    pub title: String,
    /// Groups in display order
    pub groups: Vec<AssertionGroup>,
}

/// Expectation declared by an XSpec scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioExpectation {
    /// The assertion is expected to fail
    Assert,
    /// The assertion is expected to hold
    NotAssert,
    /// The report is expected to fire
    Report,
    /// The report is expected not to fire
    NotReport,
    /// No assertion is expected to fail
    Valid,
}

impl ScenarioExpectation {
    /// Map an XSpec expectation element name
    pub fn from_element(local_name: &str) -> Option<Self> {
        match local_name {
            "expect-assert" => Some(Self::Assert),
            "expect-not-assert" => Some(Self::NotAssert),
            "expect-report" => Some(Self::Report),
            "expect-not-report" => Some(Self::NotReport),
            "expect-valid" => Some(Self::Valid),
            _ => None,
        }
    }
}

/// One example scenario mined from an XSpec suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    /// Labels of the scenario and its ancestors, outermost first
    pub label: String,
    /// Expected outcome
    pub expectation: ScenarioExpectation,
    /// Identifier of the assertion the expectation targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_id: Option<String>,
    /// Label of the expectation element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_label: Option<String>,
    /// Formatted example document fragment
    pub context: String,
}
