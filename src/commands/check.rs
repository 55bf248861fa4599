//! Validate a local list of commits

use std::fs;
use std::path::Path;

use anyhow::Context;

use dco_validator::core::models::{
    CommitPayload, CommitRecord, RepoCoordinates, RuleConfig, StatusContext,
};
use dco_validator::core::services::{build_verdict, classify};
use dco_validator::output::{OutputMode, VerdictReport};

/// Classify commits read from a JSON file and render the verdict
///
/// Fails when the verdict is a failure so hooks and scripts can gate on it.
pub fn check(
    path: &Path,
    gpg: bool,
    branch: String,
    sha: String,
    repo: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let payloads: Vec<CommitPayload> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON list of commits", path.display()))?;
    let commits = CommitRecord::from_payloads(payloads)?;

    let repository = repo.map(str::parse::<RepoCoordinates>).transpose()?.unwrap_or_default();
    let context = StatusContext {
        head_branch: branch,
        head_sha: sha,
        repository,
    };

    let failures = classify(&commits, RuleConfig::new(gpg));
    let failed = failures.not_signed_off.len() + failures.not_gpg_verified.len();
    let verdict = build_verdict(&failures, context);

    VerdictReport::new(&verdict, false).with_failures(failures).render(mode);

    if !verdict.passed() {
        anyhow::bail!("{failed} commit check(s) failed");
    }
    Ok(())
}
