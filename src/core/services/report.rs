//! Verdict submission
//!
//! Wraps a verdict into a completed [`CheckRun`] and hands it to the
//! reporting port.

use chrono::{DateTime, Utc};

use crate::core::error::ApiError;
use crate::core::models::{CheckRun, Verdict};
use crate::core::ports::CheckReporter;

/// Submit `verdict` as a check run named `check_name`
///
/// Timestamps are supplied by the caller. Returns the submitted run.
pub fn submit_verdict<R>(
    reporter: &R,
    verdict: &Verdict,
    check_name: &str,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
) -> Result<CheckRun, ApiError>
where
    R: CheckReporter + ?Sized,
{
    let run = CheckRun::from_verdict(verdict, check_name, started_at, completed_at);
    reporter.create_check_run(&verdict.context.repository, &run)?;
    Ok(run)
}
