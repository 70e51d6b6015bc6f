//! Domain Value Objects
//!
//! Immutable value objects describing documents, rule outcomes and the
//! summaries generated from rule artifacts.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`DocumentType`] | OSCAL model tag (SSP, SAP, SAR, POA&M) |
//! | [`DocumentTypeMap`] | One value per document type, exhaustive by construction |
//! | [`RulesetKey`] | Versioned rule catalog selector |
//! | [`RawDocument`] | Input document with its detected representation |
//! | [`StructuralDocument`] | Canonical XML form accepted by rule engines |
//! | [`Assertion`] | One rule check outcome |
//! | [`ValidationResult`] | Folded outcome of a validation call |
//! | [`RuleCatalogSummary`] | Flattened rule metadata for one document type |
//! | [`ScenarioSummary`] | One example scenario mined from an XSpec suite |

/// Artifact keys and locations
pub mod artifact;
/// Rule check outcomes and severity handling
pub mod assertion;
/// Input and structural documents
pub mod document;
/// Document type tags and per-type tables
pub mod document_type;
/// Ruleset versions
pub mod ruleset;
/// Rule catalog, assertion view and scenario summaries
pub mod summary;
/// Validation outcome folding
pub mod validation;

pub use artifact::{
    ArtifactLayout, CompiledRules, ReferenceData, RuleArtifactKey, SummaryLayout,
    is_remote_location, join_location,
};
pub use assertion::{Assertion, Severity, SeverityPolicy};
pub use document::{RawDocument, Representation, StructuralDocument};
pub use document_type::{DocumentType, DocumentTypeMap};
pub use ruleset::RulesetKey;
pub use summary::{
    AssertionGroup, AssertionView, RuleCatalogSummary, RuleSummary, ScenarioExpectation,
    ScenarioSummary,
};
pub use validation::{ValidationOutcome, ValidationResult};
