//! Domain models for dco-validator
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CommitRecord`] - A commit as classified by the rules
//! - [`RuleConfig`] - Which policies are enforced
//! - [`FailureSet`] - Commits failing each policy
//! - [`Verdict`] - The single reportable outcome
//! - [`StatusContext`] - Where the outcome is attached
//! - [`CheckRun`] - The payload submitted to the platform

mod check_run;
mod commit;
mod context;
mod event;
mod failure;
mod rules;
mod verdict;

pub use check_run::{CheckRun, CheckRunOutput, DEFAULT_CHECK_NAME};
pub use commit::{CommitAuthor, CommitDetail, CommitPayload, CommitRecord, CommitVerification};
pub use context::{RepoCoordinates, StatusContext};
pub use event::{EventContext, PULL_REQUEST_EVENT, PullRequest};
pub use failure::FailureSet;
pub use rules::RuleConfig;
pub use verdict::{Conclusion, Verdict};
