//! Validation and summary configuration types

use asap_domain::value_objects::{RulesetKey, SeverityPolicy, SummaryLayout};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SCHEMATRON_DIR, DEFAULT_SUMMARY_OUTPUT_DIR, DEFAULT_XSPEC_DIR};

/// How assertions fold into an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Ruleset used when a request names none
    pub default_ruleset: RulesetKey,
    /// Roles whose failures make a document fail
    pub blocking_roles: Vec<String>,
    /// Whether failures without a role make a document fail
    pub missing_role_is_blocking: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let policy = SeverityPolicy::default();
        Self {
            default_ruleset: RulesetKey::default(),
            blocking_roles: policy.blocking_roles,
            missing_role_is_blocking: policy.missing_role_is_blocking,
        }
    }
}

impl ValidationConfig {
    /// Severity policy described by this section
    pub fn policy(&self) -> SeverityPolicy {
        SeverityPolicy {
            blocking_roles: self.blocking_roles.clone(),
            missing_role_is_blocking: self.missing_role_is_blocking,
        }
    }
}

/// Summary sources and destinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummariesConfig {
    /// Directory of `<type>.sch` Schematron sources
    pub schematron_dir: String,
    /// Directory of `<type>.xspec` suites
    pub xspec_dir: String,
    /// Directory receiving generated JSON
    pub output_dir: String,
}

impl Default for SummariesConfig {
    fn default() -> Self {
        Self {
            schematron_dir: DEFAULT_SCHEMATRON_DIR.to_string(),
            xspec_dir: DEFAULT_XSPEC_DIR.to_string(),
            output_dir: DEFAULT_SUMMARY_OUTPUT_DIR.to_string(),
        }
    }
}

impl SummariesConfig {
    /// Summary layout described by this section
    pub fn layout(&self) -> SummaryLayout {
        SummaryLayout {
            schematron_dir: self.schematron_dir.clone(),
            xspec_dir: self.xspec_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
