//! # ASAP Domain Layer
//!
//! Core types for validating OSCAL documents (SSP, SAP, SAR, POA&M) against
//! versioned Schematron rulesets and for describing the summaries generated
//! from those rulesets.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Document types, rulesets, documents, assertions, results, summaries |
//! | [`ports`] | Contracts implemented by rule engines, converters and artifact stores |
//! | [`error`] | Domain error type shared by every layer |
//! | [`constants`] | XML namespaces and artifact naming |
//!
//! This crate has no knowledge of how rules are evaluated or where artifacts
//! live. Implementations of the ports are provided by `asap-providers`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    Assertion, AssertionGroup, AssertionView, DocumentType, DocumentTypeMap, RawDocument,
    Representation, RuleCatalogSummary, RuleSummary, RulesetKey, ScenarioExpectation,
    ScenarioSummary, Severity, SeverityPolicy, StructuralDocument, ValidationOutcome,
    ValidationResult,
};
