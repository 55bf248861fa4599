//! Check reporter port
//!
//! Defines how a finished verdict is published.

use crate::core::error::ApiError;
use crate::core::models::{CheckRun, RepoCoordinates};

/// Publishes check runs to the hosting platform
#[cfg_attr(test, mockall::automock)]
pub trait CheckReporter {
    /// Create a completed check run on `repository`
    fn create_check_run(&self, repository: &RepoCoordinates, run: &CheckRun) -> Result<(), ApiError>;
}
