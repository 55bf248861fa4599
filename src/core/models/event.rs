//! Triggering event
//!
//! The slice of the workflow event the validator needs.

use serde::{Deserialize, Serialize};

use super::RepoCoordinates;

/// Event name of pull-request events
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Context of the event that triggered validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    /// Event name (e.g. `pull_request`, `push`)
    pub event_name: String,
    /// Generic commit SHA of the run
    pub sha: String,
    /// Generic git ref of the run
    pub git_ref: String,
    /// Repository the event belongs to
    pub repository: RepoCoordinates,
    /// Pull-request data, when the payload carries one
    pub pull_request: Option<PullRequest>,
}

/// Pull-request fields used for validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// SHA of the pull-request head commit
    pub head_sha: String,
    /// Branch name of the pull-request head
    pub head_ref: String,
    /// URL listing the pull request's commits
    pub commits_url: String,
}

impl EventContext {
    /// Whether this event is eligible for commit validation
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.event_name == PULL_REQUEST_EVENT
    }
}
