//! Artifact Store Implementations
//!
//! | Store | Locations | Writes |
//! |-------|-----------|--------|
//! | [`FileArtifactStore`] | local paths, `file://` URLs | atomic replace |
//! | [`HttpArtifactStore`] | `http://`, `https://` | unsupported |
//! | [`LocationArtifactStore`] | both, chosen per location | local only |

/// Local filesystem store
pub mod file;
/// Read-only HTTP store
#[cfg(feature = "store-http")]
pub mod http;
/// Scheme-dispatching store
pub mod location;

pub use file::FileArtifactStore;
#[cfg(feature = "store-http")]
pub use http::HttpArtifactStore;
pub use location::LocationArtifactStore;
