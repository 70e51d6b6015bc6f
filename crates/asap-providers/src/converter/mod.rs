//! JSON-to-XML Converter Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `native` | Built-in conversion following the OSCAL JSON/XML mapping |
//! | `xslt` | Runs the compiled OSCAL converter stylesheet externally |

/// Built-in converter
pub mod native;
/// External-processor converter
pub mod xslt;

pub use native::NativeJsonToXmlConverter;
pub use xslt::XsltJsonToXmlConverter;
