//! Configuration
//!
//! Sources are merged by [`ConfigLoader`] in this order (later wins):
//!
//! 1. [`AppConfig::default`]
//! 2. a TOML file (`--config`, `./asap.toml`, `./asap/asap.toml`, user config dir)
//! 3. environment variables such as `ASAP__ENGINE__PROVIDER=null`

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
