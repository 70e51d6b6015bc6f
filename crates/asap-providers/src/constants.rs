//! Provider Constants

/// Default XSLT 3.0 processor executable (Saxon-JS command line)
pub const DEFAULT_XSLT_COMMAND: &str = "xslt3";

/// Stylesheet parameter carrying the baseline catalog location
pub const BASELINES_PARAM: &str = "baselines-base-path";

/// Stylesheet parameter carrying the registry catalog location
pub const REGISTRY_PARAM: &str = "registry-base-path";

/// Named template of the OSCAL JSON-to-XML converters
pub const CONVERTER_INITIAL_TEMPLATE: &str = "from-json";

/// Stylesheet parameter carrying the JSON file to convert
pub const CONVERTER_FILE_PARAM: &str = "file";

/// Subdirectory of the user cache dir holding materialized artifacts
pub const ARTIFACT_CACHE_SUBDIR: &str = "asap/artifacts";

/// User agent sent when fetching remote artifacts
pub const HTTP_USER_AGENT: &str = concat!("asap/", env!("CARGO_PKG_VERSION"));

/// Timeout for remote artifact fetches in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 60;
