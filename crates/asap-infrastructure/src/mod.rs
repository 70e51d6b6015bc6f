//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, environment |
//! | [`constants`] | Centralized configuration constants |
//! | [`di`] | Composition root building the session context |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
