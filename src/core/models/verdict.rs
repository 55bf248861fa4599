//! Verdict model
//!
//! The single outcome of a validation run.

use serde::{Deserialize, Serialize};

use super::StatusContext;

/// Check-run conclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    /// Every commit passed
    Success,
    /// At least one commit failed, or the run was misconfigured
    Failure,
}

impl Conclusion {
    /// Wire name of the conclusion
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation outcome ready to be reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Success or failure
    pub conclusion: Conclusion,
    /// Short headline
    pub title: String,
    /// Human-readable details
    pub summary: String,
    /// Where the verdict is attached
    pub context: StatusContext,
}

impl Verdict {
    /// Whether the verdict passed
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.conclusion, Conclusion::Success)
    }
}
