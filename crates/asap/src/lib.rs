//! # ASAP
//!
//! Validates OSCAL documents (SSP, SAP, SAR, POA&M) against versioned
//! Schematron rulesets and generates the rule documentation consumed by the
//! documentation front-end.
//!
//! ## Example
//!
//! ```ignore
//! use asap::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let result = context.oscal_service().validate_file("ssp.json").await?;
//! println!("{}", result.outcome);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - document types, assertions, results and port traits
//! - `application` - validation orchestrator, summarizers, router
//! - `infrastructure` - configuration, logging and bootstrap
//! - `providers` - rule engines, converters and artifact stores
//! - `cli` - the `asap` batch command surface

/// Domain layer - core types and port traits
pub mod domain {
    pub use asap_domain::*;
}

/// Application layer - use cases
pub mod application {
    pub use asap_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use asap_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use asap_providers::*;
}

pub mod cli;

pub use asap_domain::{Error, Result};
