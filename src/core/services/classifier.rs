//! Commit classifier
//!
//! Pure rule evaluation: which commits fail the sign-off policy and which
//! fail the GPG policy.

use crate::core::models::{CommitRecord, FailureSet, RuleConfig};

use super::signoff::is_signed_off;

/// SHAs of commits without a sign-off matching their author, in input order
#[must_use]
pub fn check_sign_off(commits: &[CommitRecord]) -> Vec<String> {
    commits
        .iter()
        .filter(|commit| {
            let signed = is_signed_off(commit);
            log::debug!("commit {} signed off: {signed}", commit.sha);
            !signed
        })
        .map(|commit| commit.sha.clone())
        .collect()
}

/// SHAs of commits without upstream GPG verification, in input order
#[must_use]
pub fn check_gpg_verification(commits: &[CommitRecord]) -> Vec<String> {
    commits
        .iter()
        .filter(|commit| !commit.verified)
        .map(|commit| commit.sha.clone())
        .collect()
}

/// Apply every enabled rule
///
/// The GPG check only runs when `rules.gpg_required` is set; otherwise its
/// list stays empty whatever the verification state of the commits.
#[must_use]
pub fn classify(commits: &[CommitRecord], rules: RuleConfig) -> FailureSet {
    let not_signed_off = if rules.sign_off_required {
        check_sign_off(commits)
    } else {
        Vec::new()
    };

    let not_gpg_verified = if rules.gpg_required {
        check_gpg_verification(commits)
    } else {
        Vec::new()
    };

    log::info!("commits not signed off: {not_signed_off:?}");
    log::info!("commits not GPG verified: {not_gpg_verified:?}");

    FailureSet {
        not_signed_off,
        not_gpg_verified,
    }
}
