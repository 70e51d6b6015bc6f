//! Ruleset Versions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: versioned rule catalog selector
///
/// Independent of [`DocumentType`](super::DocumentType); the pair selects a
/// single compiled rule artifact, and the ruleset alone selects the baseline
/// and registry reference data.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RulesetKey {
    /// NIST SP 800-53 revision 4 baselines
    #[default]
    Rev4,
    /// NIST SP 800-53 revision 5 baselines
    Rev5,
}

impl RulesetKey {
    /// Every known ruleset
    pub const ALL: [RulesetKey; 2] = [Self::Rev4, Self::Rev5];

    /// Tag used in artifact paths and routes
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rev4 => "rev4",
            Self::Rev5 => "rev5",
        }
    }
}

impl fmt::Display for RulesetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RulesetKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rev4" => Ok(Self::Rev4),
            "rev5" => Ok(Self::Rev5),
            other => Err(Error::invalid_argument(format!(
                "unknown ruleset '{other}', expected one of: rev4, rev5"
            ))),
        }
    }
}
