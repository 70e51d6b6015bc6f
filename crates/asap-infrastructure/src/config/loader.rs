//! Configuration loader
//!
//! Loads configuration from defaults, a TOML file and environment variables
//! using Figment.

use std::env;
use std::path::{Path, PathBuf};

use asap_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// An explicitly given file must exist; the default locations are
    /// optional.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;
        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the default locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_artifacts_config(config)?;
    validate_engine_config(config)?;
    validate_validation_config(config)?;
    Ok(())
}

fn validate_artifacts_config(config: &AppConfig) -> Result<()> {
    if config.artifacts.base_location.trim().is_empty() {
        return Err(Error::configuration(
            "artifacts.base_location cannot be empty",
        ));
    }
    if config.artifacts.cache_capacity == 0 {
        return Err(Error::configuration(
            "artifacts.cache_capacity must be at least 1",
        ));
    }
    Ok(())
}

fn validate_engine_config(config: &AppConfig) -> Result<()> {
    if config.engine.provider.trim().is_empty() {
        return Err(Error::configuration("engine.provider cannot be empty"));
    }
    let uses_processor = config.engine.provider == "xslt" || config.conversion.provider == "xslt";
    if uses_processor && config.engine.command.trim().is_empty() {
        return Err(Error::configuration(
            "engine.command cannot be empty when an xslt provider is selected",
        ));
    }
    if config.conversion.provider.trim().is_empty() {
        return Err(Error::configuration("conversion.provider cannot be empty"));
    }
    Ok(())
}

fn validate_validation_config(config: &AppConfig) -> Result<()> {
    let validation = &config.validation;
    if validation.blocking_roles.is_empty() && !validation.missing_role_is_blocking {
        return Err(Error::configuration(
            "validation.blocking_roles is empty and missing roles do not block: no failure could fail a document",
        ));
    }
    Ok(())
}
