//! Commit source port
//!
//! Defines how the core obtains the commits of a pull request.

use crate::core::error::ApiError;
use crate::core::models::CommitPayload;

/// Source of pull-request commits
#[cfg_attr(test, mockall::automock)]
pub trait CommitSource {
    /// Fetch every commit listed at `commits_url`, in listing order
    fn fetch_commits(&self, commits_url: &str) -> Result<Vec<CommitPayload>, ApiError>;
}
