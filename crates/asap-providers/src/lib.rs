//! # ASAP - Provider Implementations
//!
//! Adapters for the ports declared in `asap-domain`. Rule engines and
//! converters register themselves into the `asap-application` registries.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Rule engine | `RuleEngine` | Xslt (external Saxon processor), Null |
//! | Converter | `JsonToXmlConverter` | Native, Xslt |
//! | Artifact store | `ArtifactStore` | File, Http, Location (dispatches on scheme) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! asap-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Without `store-http`, remote artifact locations are rejected.

pub use asap_domain::error::{Error, Result};
pub use asap_domain::ports::{ArtifactStore, JsonToXmlConverter, RuleEngine};

/// Provider-specific constants
pub mod constants;

/// External XSLT processor invocation and artifact materialization
pub mod xslt;

/// Rule engine implementations
pub mod rule_engine;

/// JSON-to-XML converter implementations
pub mod converter;

/// Artifact store implementations
pub mod artifact_store;

pub use artifact_store::{FileArtifactStore, LocationArtifactStore};
#[cfg(feature = "store-http")]
pub use artifact_store::HttpArtifactStore;
pub use converter::{NativeJsonToXmlConverter, XsltJsonToXmlConverter};
pub use rule_engine::{NullRuleEngine, XsltRuleEngine};
