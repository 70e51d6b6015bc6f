//! Input and Structural Documents

use serde::{Deserialize, Serialize};

use super::DocumentType;

/// Serialization of an incoming document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Structural markup (XML)
    Structural,
    /// Object serialization (JSON)
    Object,
}

impl Representation {
    /// Detect the representation by inspecting content
    ///
    /// Leading byte-order marks and whitespace are skipped. Both forms may
    /// share a file extension, so the extension is never consulted.
    pub fn sniff(content: &str) -> Option<Self> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        match trimmed.chars().next()? {
            '<' => Some(Self::Structural),
            '{' => Some(Self::Object),
            _ => None,
        }
    }
}

/// Value Object: document awaiting validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Detected or declared representation
    pub representation: Representation,
    /// Unmodified document text
    pub content: String,
}

impl RawDocument {
    /// Wrap XML text
    pub fn structural<S: Into<String>>(content: S) -> Self {
        Self {
            representation: Representation::Structural,
            content: content.into(),
        }
    }

    /// Wrap JSON text
    pub fn object<S: Into<String>>(content: S) -> Self {
        Self {
            representation: Representation::Object,
            content: content.into(),
        }
    }

    /// Wrap text whose representation is detected from content
    pub fn sniff<S: Into<String>>(content: S) -> Option<Self> {
        let content = content.into();
        Representation::sniff(&content).map(|representation| Self {
            representation,
            content,
        })
    }
}

/// Value Object: canonical structural markup of a typed document
///
/// The only form rule engines accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralDocument {
    /// Type the document was validated as
    pub document_type: DocumentType,
    /// XML text
    pub xml: String,
}

impl StructuralDocument {
    /// Create a structural document
    pub fn new<S: Into<String>>(document_type: DocumentType, xml: S) -> Self {
        Self {
            document_type,
            xml: xml.into(),
        }
    }
}
