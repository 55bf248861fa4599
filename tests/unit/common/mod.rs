//! Shared test fixtures and helpers
//!
//! Commit builders and an in-memory commit source.

use std::cell::RefCell;

use dco_validator::core::error::ApiError;
use dco_validator::core::models::{
    CommitPayload, CommitRecord, EventContext, PullRequest, RepoCoordinates,
};
use dco_validator::core::ports::CommitSource;

pub const AUTHOR: &str = "Jane Doe";
pub const EMAIL: &str = "jane@example.com";
pub const COMMITS_URL: &str = "https://api.github.com/repos/acme/widgets/pulls/42/commits";

/// Message with a sign-off matching the default author
pub fn signed_message(subject: &str) -> String {
    format!("{subject}\n\nSigned-off-by: {AUTHOR} <{EMAIL}>\n")
}

/// Correctly signed-off commit
pub fn signed(sha: &str, verified: bool) -> CommitRecord {
    CommitRecord::new(sha, AUTHOR, EMAIL, signed_message("Change things"), verified)
}

/// Commit without any sign-off trailer
pub fn unsigned(sha: &str, verified: bool) -> CommitRecord {
    CommitRecord::new(sha, AUTHOR, EMAIL, "Change things\n", verified)
}

/// Wire payload for a record
pub fn payload(record: &CommitRecord) -> CommitPayload {
    CommitPayload::complete(
        &record.sha,
        &record.author_name,
        &record.author_email,
        &record.message,
        record.verified,
    )
}

/// A `pull_request` event for acme/widgets#42
pub fn pull_request_event() -> EventContext {
    EventContext {
        event_name: "pull_request".to_string(),
        sha: "merge-sha".to_string(),
        git_ref: "refs/pull/42/merge".to_string(),
        repository: RepoCoordinates::new("acme", "widgets"),
        pull_request: Some(PullRequest {
            head_sha: "head-sha".to_string(),
            head_ref: "feature/dco".to_string(),
            commits_url: COMMITS_URL.to_string(),
        }),
    }
}

/// In-memory commit source recording every requested URL
pub struct StaticCommitSource {
    result: Result<Vec<CommitPayload>, ApiError>,
    pub requests: RefCell<Vec<String>>,
}

impl StaticCommitSource {
    pub fn with_commits(commits: &[CommitRecord]) -> Self {
        Self {
            result: Ok(commits.iter().map(payload).collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_payloads(payloads: Vec<CommitPayload>) -> Self {
        Self {
            result: Ok(payloads),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            result: Err(error),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl CommitSource for StaticCommitSource {
    fn fetch_commits(&self, commits_url: &str) -> Result<Vec<CommitPayload>, ApiError> {
        self.requests.borrow_mut().push(commits_url.to_string());
        self.result.clone()
    }
}
