//! Status context
//!
//! Identifies where a check run is attached: repository, branch and commit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EventContext;
use crate::core::error::ConfigError;

/// Repository coordinates on the hosting platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCoordinates {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoCoordinates {
    /// Create coordinates from owner and name
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoCoordinates {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo))
            },
            _ => Err(ConfigError::InvalidRepository(s.to_string())),
        }
    }
}

/// Where the verdict is reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusContext {
    /// Branch (or ref) the check run is attached to
    pub head_branch: String,
    /// Commit SHA the check run is attached to
    pub head_sha: String,
    /// Repository the commit lives in
    pub repository: RepoCoordinates,
}

impl StatusContext {
    /// Build the context for an event
    ///
    /// Pull-request head fields win over the generic `sha`/`ref` values.
    #[must_use]
    pub fn from_event(event: &EventContext) -> Self {
        let (head_sha, head_branch) = event.pull_request.as_ref().map_or_else(
            || (event.sha.clone(), event.git_ref.clone()),
            |pr| (pr.head_sha.clone(), pr.head_ref.clone()),
        );

        Self {
            head_branch,
            head_sha,
            repository: event.repository.clone(),
        }
    }
}
