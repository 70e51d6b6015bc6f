//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`RuleEngine`] | Loads compiled rule artifacts and evaluates structural documents |
//! | [`JsonToXmlConverter`] | Converts object-serialized documents to structural markup |
//! | [`ArtifactStore`] | Reads and writes artifacts by location |

/// Artifact store port
pub mod artifact_store;
/// JSON-to-XML converter port
pub mod converter;
/// Rule engine port
pub mod rule_engine;

pub use artifact_store::ArtifactStore;
pub use converter::JsonToXmlConverter;
pub use rule_engine::{EvaluationInput, RuleEngine};
