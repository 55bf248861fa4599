//! Validation orchestration
//!
//! Ties the event, the commit source, the classifier and the verdict
//! builder together. No reporting happens here; the caller submits the
//! resulting verdict.

use crate::core::error::ValidationError;
use crate::core::models::{CommitRecord, EventContext, RuleConfig, StatusContext, Verdict};
use crate::core::ports::CommitSource;

use super::classifier::classify;
use super::verdict_builder::{build_verdict, configuration_failure};

/// Validate the commits of the pull request behind `event`
///
/// Events other than `pull_request` short-circuit into a configuration
/// failure verdict without touching `source`. Fetch failures and malformed
/// commits propagate as errors; no partial verdict is produced.
pub fn validate<S>(
    event: &EventContext,
    source: &S,
    rules: RuleConfig,
    docs_url: &str,
) -> Result<Verdict, ValidationError>
where
    S: CommitSource + ?Sized,
{
    let context = StatusContext::from_event(event);

    if !event.is_pull_request() {
        log::warn!("event {:?} is not a pull request event", event.event_name);
        return Ok(configuration_failure(context, docs_url));
    }

    let pull_request = event.pull_request.as_ref().ok_or(ValidationError::MissingPullRequest)?;

    log::debug!("fetching commits from {}", pull_request.commits_url);
    let payloads =
        source.fetch_commits(&pull_request.commits_url).map_err(ValidationError::Fetch)?;
    let commits = CommitRecord::from_payloads(payloads)?;
    log::info!("validating {} commit(s) on {}", commits.len(), context.head_branch);

    let failures = classify(&commits, rules);
    Ok(build_verdict(&failures, context))
}
