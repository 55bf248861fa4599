//! Workflow event loading
//!
//! Reads the webhook payload at `GITHUB_EVENT_PATH` and combines it with
//! the generic run settings into an [`EventContext`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::{ConfigError, Settings};
use crate::core::models::{EventContext, PullRequest, RepoCoordinates};

/// Fields of the webhook payload the validator reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Present on `pull_request` events
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
    /// Repository the event belongs to
    #[serde(default)]
    pub repository: Option<RepositoryPayload>,
}

/// Pull-request object of the webhook payload
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    /// Head branch and commit
    pub head: HeadPayload,
    /// Commit listing URL
    pub commits_url: String,
}

/// Head of a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct HeadPayload {
    /// Head commit SHA
    pub sha: String,
    /// Head branch name
    #[serde(rename = "ref")]
    pub git_ref: String,
}

/// Repository object of the webhook payload
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryPayload {
    /// `owner/repo`
    pub full_name: String,
}

impl EventPayload {
    /// Read a payload file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let event_error = |message: String| ConfigError::Event {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| event_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| event_error(e.to_string()))
    }

    /// Combine the payload with the run settings
    ///
    /// Repository coordinates come from the settings when set, otherwise from
    /// the payload's `repository.full_name`.
    pub fn into_context(self, settings: &Settings) -> Result<EventContext, ConfigError> {
        let repository = match (&settings.repository, self.repository) {
            (Some(repo), _) => repo.clone(),
            (None, Some(repo)) => repo.full_name.parse()?,
            (None, None) => RepoCoordinates::default(),
        };

        Ok(EventContext {
            event_name: settings.event_name.clone(),
            sha: settings.sha.clone(),
            git_ref: settings.git_ref.clone(),
            repository,
            pull_request: self.pull_request.map(|pr| PullRequest {
                head_sha: pr.head.sha,
                head_ref: pr.head.git_ref,
                commits_url: pr.commits_url,
            }),
        })
    }
}

/// Load the event context for the current run
///
/// Without an event path the context carries no pull-request data.
pub fn load_event(settings: &Settings) -> Result<EventContext, ConfigError> {
    let payload = match &settings.event_path {
        Some(path) => EventPayload::from_path(path)?,
        None => EventPayload::default(),
    };
    payload.into_context(settings)
}
