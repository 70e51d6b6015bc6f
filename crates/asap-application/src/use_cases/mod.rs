//! Use Cases
//!
//! Application services composed from domain ports. Each service receives
//! its collaborators at construction; nothing here reaches for globals.

pub mod assertion_views;
pub mod document_registry;
pub mod documentation_catalog;
pub mod oscal_service;
pub mod rule_engine_gateway;
pub mod schematron_summary;
pub mod xspec_summary;

mod output;

pub use assertion_views::AssertionViewGenerator;
pub use document_registry::DocumentTypeRegistry;
pub use documentation_catalog::DocumentationCatalog;
pub use oscal_service::OscalService;
pub use rule_engine_gateway::RuleEngineGateway;
pub use schematron_summary::SchematronSummary;
pub use xspec_summary::XSpecScenarioSummaryGenerator;
