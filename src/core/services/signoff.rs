//! Sign-off trailer matching
//!
//! Extracts the first `Signed-off-by: Name <email>` occurrence from a commit
//! message and compares it with the recorded author.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::CommitRecord;

static SIGN_OFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Signed-off-by:\s*(.+)<(.+@.+)>").expect("sign-off pattern is valid")
});

/// Identity declared in a sign-off trailer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOff<'a> {
    /// Display name, trimmed
    pub name: &'a str,
    /// Email between the angle brackets
    pub email: &'a str,
}

/// Find the first sign-off trailer in a message
///
/// The match is not anchored: the trailer may appear anywhere in the
/// message. Later trailers are ignored.
#[must_use]
pub fn find_sign_off(message: &str) -> Option<SignOff<'_>> {
    let caps = SIGN_OFF.captures(message)?;
    Some(SignOff {
        name: caps.get(1)?.as_str().trim(),
        email: caps.get(2)?.as_str(),
    })
}

/// Whether the commit carries a sign-off matching its author exactly
#[must_use]
pub fn is_signed_off(commit: &CommitRecord) -> bool {
    find_sign_off(&commit.message).is_some_and(|sign_off| {
        sign_off.name == commit.author_name && sign_off.email == commit.author_email
    })
}
