//! Validate the pull request of the current workflow run

use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use dco_validator::adapters::github::{GitHubClient, load_event};
use dco_validator::config::Settings;
use dco_validator::core::services::{submit_verdict, validate};
use dco_validator::output::{OutputMode, VerdictReport};

/// Validate the workflow's pull request and report a check run
pub fn run(config: Option<&Path>, dry_run: bool, mode: OutputMode) -> anyhow::Result<()> {
    let settings = Settings::load(config).context("failed to load settings")?;
    if !dry_run {
        settings.require_token()?;
    }

    let event = load_event(&settings).context("failed to load workflow event")?;
    log::debug!("event {:?} on {}", event.event_name, event.repository);

    let client = GitHubClient::new(&settings.api_url, settings.token.as_deref())?;

    let started_at = Utc::now();
    let verdict = validate(&event, &client, settings.rules, &settings.docs_url)?;
    let completed_at = Utc::now();

    if !dry_run {
        let repository = &verdict.context.repository;
        if repository.owner.is_empty() {
            anyhow::bail!("repository is unknown: set GITHUB_REPOSITORY to owner/repo");
        }
        submit_verdict(&client, &verdict, &settings.check_name, started_at, completed_at)
            .with_context(|| format!("failed to report check run on {repository}"))?;
    }

    VerdictReport::new(&verdict, !dry_run).render(mode);
    Ok(())
}
