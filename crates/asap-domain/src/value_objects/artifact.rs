//! Artifact Keys and Locations
//!
//! Every external artifact is addressed relative to a configurable base
//! location, which may be a filesystem path or an http(s) URL.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{DocumentType, RulesetKey};
use crate::constants::{COMPILED_ARTIFACT_EXTENSION, CONTENT_DIR, RULES_DIR};

/// Selects exactly one compiled rule artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleArtifactKey {
    /// Document type the rules apply to
    pub document_type: DocumentType,
    /// Ruleset revision
    pub ruleset: RulesetKey,
}

impl RuleArtifactKey {
    /// Create a key
    pub fn new(document_type: DocumentType, ruleset: RulesetKey) -> Self {
        Self {
            document_type,
            ruleset,
        }
    }
}

impl fmt::Display for RuleArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.document_type, self.ruleset)
    }
}

/// Loaded, ready-to-evaluate rule artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRules {
    /// Key the artifact was loaded for
    pub key: RuleArtifactKey,
    /// Location the artifact was read from
    pub location: String,
    /// Hex SHA-256 of the artifact bytes
    pub digest: String,
    /// Local file the engine evaluates from
    pub local_path: PathBuf,
}

/// Reference datasets a ruleset consults during evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Location of the control baseline catalog
    pub baselines: String,
    /// Location of the value registry catalog
    pub registry: String,
}

/// Join a relative artifact path onto a base location
pub fn join_location(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    if base.is_empty() {
        relative.to_string()
    } else {
        format!("{base}/{relative}")
    }
}

/// Whether a location is a remote URL
pub fn is_remote_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Layout of compiled artifacts and reference data under a base location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLayout {
    /// Base path or URL
    pub base_location: String,
}

impl ArtifactLayout {
    /// Create a layout rooted at `base_location`
    pub fn new<S: Into<String>>(base_location: S) -> Self {
        Self {
            base_location: base_location.into(),
        }
    }

    /// Compiled rules for a (document type, ruleset) pair
    pub fn rule_artifact(&self, key: RuleArtifactKey) -> String {
        join_location(
            &self.base_location,
            &format!(
                "{RULES_DIR}/{}/{}.{COMPILED_ARTIFACT_EXTENSION}",
                key.ruleset, key.document_type
            ),
        )
    }

    /// Compiled JSON-to-XML converter for a document type
    pub fn converter_artifact(&self, document_type: DocumentType) -> String {
        join_location(
            &self.base_location,
            &format!(
                "{RULES_DIR}/oscal_{}_json-to-xml-converter.{COMPILED_ARTIFACT_EXTENSION}",
                document_type.converter_model()
            ),
        )
    }

    /// Reference data for a ruleset
    pub fn reference_data(&self, ruleset: RulesetKey) -> ReferenceData {
        ReferenceData {
            baselines: join_location(
                &self.base_location,
                &format!("{CONTENT_DIR}/{ruleset}/baselines/xml"),
            ),
            registry: join_location(
                &self.base_location,
                &format!("{CONTENT_DIR}/{ruleset}/resources/xml"),
            ),
        }
    }
}

/// Sources and destinations of the batch summarizers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLayout {
    /// Directory of Schematron sources (`<type>.sch`)
    pub schematron_dir: String,
    /// Directory of XSpec suites (`<type>.xspec`)
    pub xspec_dir: String,
    /// Directory receiving generated JSON
    pub output_dir: String,
}

impl SummaryLayout {
    /// Schematron source for a document type
    pub fn schematron_source(&self, document_type: DocumentType) -> String {
        join_location(&self.schematron_dir, &format!("{document_type}.sch"))
    }

    /// XSpec suite for a document type
    pub fn xspec_source(&self, document_type: DocumentType) -> String {
        join_location(&self.xspec_dir, &format!("{document_type}.xspec"))
    }

    /// Rule catalog output for a document type
    pub fn rule_catalog_output(&self, document_type: DocumentType) -> String {
        join_location(&self.output_dir, &format!("{document_type}.json"))
    }

    /// Assertion view output for a document type
    pub fn assertion_view_output(&self, document_type: DocumentType) -> String {
        join_location(
            &self.output_dir,
            &format!("assertion-views-{document_type}.json"),
        )
    }

    /// Scenario summary output for a document type
    pub fn scenario_summary_output(&self, document_type: DocumentType) -> String {
        join_location(
            &self.output_dir,
            &format!("xspec-summary-{document_type}.json"),
        )
    }
}
