//! Structured logging with tracing
//!
//! Log events go to stderr so that command output on stdout stays clean.

use std::io::IsTerminal;
use std::path::Path;

use asap_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_PREFIX, LOG_FILTER_ENV};

/// Initialize logging with the provided configuration
///
/// `ASAP_LOG` takes precedence over the configured level and accepts full
/// filter directives (`asap_application=debug,info`).
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_PREFIX)),
        )
    });
    let ansi = std::io::stderr().is_terminal();

    // json and plain layers have different types
    let result = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(false);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
