//! Configuration types module

pub mod app;
pub mod artifacts;
pub mod logging;
pub mod validation;

pub use app::*;
