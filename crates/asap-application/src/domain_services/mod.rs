//! Domain Services
//!
//! Parsers and formatters that turn rule and scenario artifacts into the
//! records the summarizers emit.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`schematron`] | Reads assertions, reports and their patterns from Schematron |
//! | [`xspec`] | Flattens nested XSpec scenarios into expectation records |
//! | [`xml_format`] | Pretty-prints XML fragments and parses documents |

/// Schematron rule extraction
pub mod schematron;
/// XSpec scenario flattening
pub mod xspec;
/// XML pretty-printing
pub mod xml_format;

pub use schematron::{SchematronCheck, parse_schematron};
pub use xml_format::{format_xml, parse_document};
pub use xspec::{XSpecContext, XSpecExpectation, parse_xspec};
