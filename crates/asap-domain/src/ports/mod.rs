//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the adapters that evaluate
//! rules, convert documents and move artifacts around.
//!
//! ## Architecture
//!
//! High-level modules (application use cases) depend on these traits;
//! low-level modules (`asap-providers`) implement them. Tests substitute
//! scripted implementations.

/// External service provider ports
pub mod providers;

pub use providers::{ArtifactStore, EvaluationInput, JsonToXmlConverter, RuleEngine};
