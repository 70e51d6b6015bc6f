//! Application Layer - ASAP
//!
//! Use cases that validate OSCAL documents and generate the rule summaries
//! consumed by the documentation front-end.
//!
//! ## Architecture
//!
//! The application layer:
//! - Orchestrates conversion, rule evaluation and result folding
//! - Declares provider registries that adapters register into
//! - Parses rule and scenario artifacts into summary records
//! - Has no dependencies on concrete engines, converters or stores
//!
//! ## Use Cases
//!
//! - [`OscalService`]: validate a document from memory or a location
//! - [`SchematronSummary`]: flatten rule catalogs per document type
//! - [`AssertionViewGenerator`]: group assertions for display
//! - [`XSpecScenarioSummaryGenerator`]: mine example scenarios
//! - [`DocumentationCatalog`]: fetch generated summaries for display
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `asap-domain`: value objects, errors and port traits
//! - Pure Rust libraries for async, XML and serialization

pub mod domain_services;
pub mod ports;
pub mod routing;
pub mod use_cases;

pub use routing::{Breadcrumb, Route, RouteLookup, breadcrumbs, get_route, get_url};
pub use use_cases::{
    AssertionViewGenerator, DocumentTypeRegistry, DocumentationCatalog, OscalService,
    RuleEngineGateway, SchematronSummary, XSpecScenarioSummaryGenerator,
};
