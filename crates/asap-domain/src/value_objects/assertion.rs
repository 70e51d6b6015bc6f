//! Rule Check Outcomes
//!
//! An [`Assertion`] is produced by a rule engine and never modified after.
//! Whether a failing assertion blocks a document is decided by a
//! [`SeverityPolicy`], which is configuration rather than engine behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value Object: one rule check outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Rule identifier
    pub id: String,
    /// Human-readable message
    pub message: String,
    /// Schematron role (severity), if the rule declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// XPath location of the checked node
    pub location: String,
    /// Test expression that produced the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Whether the check passed
    pub passed: bool,
}

impl Assertion {
    /// A failing assertion
    pub fn failed<I: Into<String>, M: Into<String>>(id: I, message: M) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            role: None,
            location: String::new(),
            test: None,
            passed: false,
        }
    }

    /// A passing assertion
    pub fn passed<I: Into<String>, M: Into<String>>(id: I, message: M) -> Self {
        Self {
            passed: true,
            ..Self::failed(id, message)
        }
    }

    /// Set the role
    pub fn with_role<S: Into<String>>(mut self, role: S) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the location
    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = location.into();
        self
    }

    /// Set the test expression
    pub fn with_test<S: Into<String>>(mut self, test: S) -> Self {
        self.test = Some(test.into());
        self
    }

    /// Severity derived from the role
    pub fn severity(&self) -> Severity {
        Severity::from_role(self.role.as_deref())
    }
}

/// Severity classes recognized in Schematron roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Document cannot be processed further
    Fatal,
    /// Rule violation
    Error,
    /// Advisory finding
    Warning,
    /// Informational report
    Information,
    /// Role absent or not recognized
    Unspecified,
}

impl Severity {
    /// Classify a Schematron role
    pub fn from_role(role: Option<&str>) -> Self {
        let Some(role) = role else {
            return Self::Unspecified;
        };
        match role.trim().to_ascii_lowercase().as_str() {
            "fatal" | "critical" => Self::Fatal,
            "error" => Self::Error,
            "warn" | "warning" => Self::Warning,
            "info" | "information" | "informational" => Self::Information,
            _ => Self::Unspecified,
        }
    }

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            Self::Fatal => "Fatal",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Information => "Information",
            Self::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Decides which failing assertions make a document fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityPolicy {
    /// Roles (case-insensitive) whose failures block
    pub blocking_roles: Vec<String>,
    /// Whether failures without a role block
    pub missing_role_is_blocking: bool,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            blocking_roles: vec!["fatal".to_string(), "error".to_string()],
            missing_role_is_blocking: true,
        }
    }
}

impl SeverityPolicy {
    /// Whether a role blocks when its assertion fails
    pub fn is_blocking_role(&self, role: Option<&str>) -> bool {
        match role.map(str::trim).filter(|r| !r.is_empty()) {
            None => self.missing_role_is_blocking,
            Some(role) => self
                .blocking_roles
                .iter()
                .any(|blocking| blocking.eq_ignore_ascii_case(role)),
        }
    }

    /// Whether an assertion is a blocking failure
    pub fn is_blocking_failure(&self, assertion: &Assertion) -> bool {
        !assertion.passed && self.is_blocking_role(assertion.role.as_deref())
    }
}
