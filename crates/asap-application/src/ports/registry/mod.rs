//! Provider Registry System
//!
//! Uses the `linkme` crate for compile-time registration of providers
//! that are discovered and instantiated at runtime by name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = xslt" → XsltRuleEngine       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in asap-providers)
//!
//! ```ignore
//! use asap_application::ports::registry::{RuleEngineProviderEntry, RULE_ENGINE_PROVIDERS};
//!
//! #[linkme::distributed_slice(RULE_ENGINE_PROVIDERS)]
//! static NULL_ENGINE: RuleEngineProviderEntry = RuleEngineProviderEntry {
//!     name: "null",
//!     description: "Rule engine that reports no assertions",
//!     factory: |_config| Ok(Arc::new(NullRuleEngine::new())),
//! };
//! ```
//!
//! ### Resolving a Provider (in asap-infrastructure)
//!
//! ```ignore
//! use asap_application::ports::registry::resolve_rule_engine_provider;
//!
//! let config = RuleEngineProviderConfig::new("xslt").with_command("xslt3");
//! let engine = resolve_rule_engine_provider(&config)?;
//! ```

pub mod converter;
pub mod rule_engine;

pub use converter::{
    CONVERTER_PROVIDERS, ConverterProviderConfig, ConverterProviderEntry,
    list_converter_providers, resolve_converter_provider,
};
pub use rule_engine::{
    RULE_ENGINE_PROVIDERS, RuleEngineProviderConfig, RuleEngineProviderEntry,
    list_rule_engine_providers, resolve_rule_engine_provider,
};
