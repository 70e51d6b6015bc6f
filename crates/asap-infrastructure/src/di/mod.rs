//! Composition Root
//!
//! Wires configuration, provider registries and use cases into one
//! [`AppContext`] per process.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app, init_app_with_store};
