//! Domain layer constants
//!
//! XML namespaces understood by the toolkit and naming conventions for
//! rule artifacts.

// ============================================================================
// XML NAMESPACES
// ============================================================================

/// OSCAL 1.x namespace used by every structural document
pub const OSCAL_NAMESPACE: &str = "http://csrc.nist.gov/ns/oscal/1.0";

/// ISO Schematron namespace
pub const SCHEMATRON_NAMESPACE: &str = "http://purl.oclc.org/dsdl/schematron";

/// Schematron Validation Report Language namespace
pub const SVRL_NAMESPACE: &str = "http://purl.oclc.org/dsdl/svrl";

/// XSpec namespace
pub const XSPEC_NAMESPACE: &str = "http://www.jenitennison.com/xslt/xspec";

// ============================================================================
// ARTIFACT NAMING
// ============================================================================

/// Extension of compiled (SEF) stylesheet artifacts
pub const COMPILED_ARTIFACT_EXTENSION: &str = "sef.json";

/// Directory holding compiled rule and converter artifacts
pub const RULES_DIR: &str = "rules";

/// Directory holding per-ruleset reference content
pub const CONTENT_DIR: &str = "content";
