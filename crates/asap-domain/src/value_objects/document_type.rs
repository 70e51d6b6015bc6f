//! Document Type Tags
//!
//! The four OSCAL models the toolkit validates, and a table type holding
//! exactly one value per model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: OSCAL document type
///
/// Determines which converter and which rule artifact apply to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Plan of Action and Milestones
    Poam,
    /// Security Assessment Plan
    Sap,
    /// Security Assessment Report
    Sar,
    /// System Security Plan
    Ssp,
}

impl DocumentType {
    /// Every document type, in table order
    pub const ALL: [DocumentType; 4] = [Self::Poam, Self::Sap, Self::Sar, Self::Ssp];

    /// Short lowercase tag used in artifact names
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poam => "poam",
            Self::Sap => "sap",
            Self::Sar => "sar",
            Self::Ssp => "ssp",
        }
    }

    /// Root element (XML) and root member (JSON) of the OSCAL model
    pub fn root_element(self) -> &'static str {
        match self {
            Self::Poam => "plan-of-action-and-milestones",
            Self::Sap => "assessment-plan",
            Self::Sar => "assessment-results",
            Self::Ssp => "system-security-plan",
        }
    }

    /// Model name used by the OSCAL JSON-to-XML converter artifacts
    pub fn converter_model(self) -> &'static str {
        match self {
            Self::Poam => "poam",
            Self::Sap => "assessment-plan",
            Self::Sar => "assessment-results",
            Self::Ssp => "ssp",
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            Self::Poam => "Plan of Action and Milestones",
            Self::Sap => "Security Assessment Plan",
            Self::Sar => "Security Assessment Report",
            Self::Ssp => "System Security Plan",
        }
    }

    /// URL slug used by the documentation routes
    pub fn slug(self) -> &'static str {
        match self {
            Self::Poam => "plan-of-action-and-milestones",
            Self::Sap => "security-assessment-plan",
            Self::Sar => "security-assessment-report",
            Self::Ssp => "system-security-plan",
        }
    }

    /// Resolve a document type from its OSCAL root element name
    pub fn from_root_element(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.root_element() == name)
    }

    /// Resolve a document type from its route slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_ascii_lowercase();
        match tag.as_str() {
            "poam" | "poa&m" => Ok(Self::Poam),
            "sap" => Ok(Self::Sap),
            "sar" => Ok(Self::Sar),
            "ssp" => Ok(Self::Ssp),
            other => Self::from_root_element(other)
                .ok_or_else(|| Error::unsupported_document_type(s.trim())),
        }
    }
}

/// One value per document type
///
/// Construction requires a value for every variant, so adding a document
/// type breaks every table until it is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeMap<T> {
    /// Plan of Action and Milestones entry
    pub poam: T,
    /// Security Assessment Plan entry
    pub sap: T,
    /// Security Assessment Report entry
    pub sar: T,
    /// System Security Plan entry
    pub ssp: T,
}

impl<T> DocumentTypeMap<T> {
    /// Build a table by calling `f` for each document type
    pub fn from_fn(mut f: impl FnMut(DocumentType) -> T) -> Self {
        Self {
            poam: f(DocumentType::Poam),
            sap: f(DocumentType::Sap),
            sar: f(DocumentType::Sar),
            ssp: f(DocumentType::Ssp),
        }
    }

    /// Build a table from values listed in [`DocumentType::ALL`] order
    pub fn from_ordered(values: Vec<T>) -> Result<Self> {
        let count = values.len();
        let mut values = values.into_iter();
        match (values.next(), values.next(), values.next(), values.next()) {
            (Some(poam), Some(sap), Some(sar), Some(ssp)) if count == 4 => Ok(Self {
                poam,
                sap,
                sar,
                ssp,
            }),
            _ => Err(Error::internal(format!(
                "expected one value per document type, got {count}"
            ))),
        }
    }

    /// Entry for a document type
    pub fn get(&self, document_type: DocumentType) -> &T {
        match document_type {
            DocumentType::Poam => &self.poam,
            DocumentType::Sap => &self.sap,
            DocumentType::Sar => &self.sar,
            DocumentType::Ssp => &self.ssp,
        }
    }

    /// Mutable entry for a document type
    pub fn get_mut(&mut self, document_type: DocumentType) -> &mut T {
        match document_type {
            DocumentType::Poam => &mut self.poam,
            DocumentType::Sap => &mut self.sap,
            DocumentType::Sar => &mut self.sar,
            DocumentType::Ssp => &mut self.ssp,
        }
    }

    /// Transform every entry
    pub fn map<U>(self, mut f: impl FnMut(DocumentType, T) -> U) -> DocumentTypeMap<U> {
        DocumentTypeMap {
            poam: f(DocumentType::Poam, self.poam),
            sap: f(DocumentType::Sap, self.sap),
            sar: f(DocumentType::Sar, self.sar),
            ssp: f(DocumentType::Ssp, self.ssp),
        }
    }

    /// Iterate entries in [`DocumentType::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (DocumentType, &T)> {
        DocumentType::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}
