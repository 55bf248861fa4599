//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the validation core and the
//! hosting platform. Implementations live in the `adapters` module.
//!
//! The core depends only on these traits, so tests can swap in mocks and
//! the core never performs network I/O itself.

mod check_reporter;
mod commit_source;

pub use check_reporter::CheckReporter;
pub use commit_source::CommitSource;

#[cfg(test)]
pub use check_reporter::MockCheckReporter;
#[cfg(test)]
pub use commit_source::MockCommitSource;
