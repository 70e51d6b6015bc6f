//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `asap_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "asap.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "asap";

/// Environment variable prefix for configuration (`ASAP__ENGINE__PROVIDER`)
pub const CONFIG_ENV_PREFIX: &str = "ASAP";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "ASAP_LOG";

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "asap";

// ============================================================================
// ARTIFACT CONSTANTS
// ============================================================================

/// Default base location of compiled artifacts and reference data
pub const DEFAULT_ARTIFACT_BASE: &str = "dist";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Default rule engine provider
pub const DEFAULT_ENGINE_PROVIDER: &str = "xslt";

/// Default XSLT processor command
pub const DEFAULT_ENGINE_COMMAND: &str = "xslt3";

/// Default JSON-to-XML converter provider
pub const DEFAULT_CONVERSION_PROVIDER: &str = "native";

// ============================================================================
// SUMMARY CONSTANTS
// ============================================================================

/// Default directory of Schematron sources
pub const DEFAULT_SCHEMATRON_DIR: &str = "src/validations/rules";

/// Default directory of XSpec suites
pub const DEFAULT_XSPEC_DIR: &str = "src/validations/test/rules";

/// Default directory receiving generated summaries
pub const DEFAULT_SUMMARY_OUTPUT_DIR: &str = "dist/rules";
