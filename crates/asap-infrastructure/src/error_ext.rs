//! Error extension utilities
//!
//! Context extension methods that turn foreign errors into domain errors.

use std::fmt;

use asap_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use asap_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context, producing an internal error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
