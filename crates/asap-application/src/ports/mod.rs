//! Application Ports
//!
//! Provider registries that adapters in `asap-providers` register into.
//! The port traits themselves live in `asap_domain::ports`.

pub mod registry;

pub use asap_domain::ports::{ArtifactStore, EvaluationInput, JsonToXmlConverter, RuleEngine};
