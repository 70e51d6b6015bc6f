//! Rule Engine Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `xslt` | Runs compiled Schematron packages with an external XSLT processor |
//! | `null` | Loads nothing and reports no assertions |

/// Null rule engine
pub mod null;
/// SVRL report decoding
pub mod svrl;
/// External-processor rule engine
pub mod xslt;

pub use null::NullRuleEngine;
pub use svrl::parse_svrl;
pub use xslt::XsltRuleEngine;
