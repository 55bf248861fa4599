//! Check-run payload
//!
//! What gets submitted to the check-reporting port.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Conclusion, Verdict};

/// Default check-run name
pub const DEFAULT_CHECK_NAME: &str = "Result";

/// A completed check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRun {
    /// Check-run name shown in the UI
    pub name: String,
    /// Branch the run is attached to
    pub head_branch: String,
    /// Commit the run is attached to
    pub head_sha: String,
    /// Always `completed`
    pub status: &'static str,
    /// Success or failure
    pub conclusion: Conclusion,
    /// When validation started
    pub started_at: DateTime<Utc>,
    /// When validation finished
    pub completed_at: DateTime<Utc>,
    /// Title and summary
    pub output: CheckRunOutput,
}

/// Output block of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRunOutput {
    /// Short headline
    pub title: String,
    /// Details
    pub summary: String,
}

impl CheckRun {
    /// Build a completed check run from a verdict and caller-supplied times
    #[must_use]
    pub fn from_verdict(
        verdict: &Verdict,
        name: &str,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.to_string(),
            head_branch: verdict.context.head_branch.clone(),
            head_sha: verdict.context.head_sha.clone(),
            status: "completed",
            conclusion: verdict.conclusion,
            started_at,
            completed_at,
            output: CheckRunOutput {
                title: verdict.title.clone(),
                summary: verdict.summary.clone(),
            },
        }
    }
}
