//! Classification results

use serde::Serialize;

/// Commits failing each policy, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FailureSet {
    /// SHAs whose sign-off trailer is missing or does not match the author
    pub not_signed_off: Vec<String>,
    /// SHAs without upstream GPG verification
    pub not_gpg_verified: Vec<String>,
}

impl FailureSet {
    /// True when no commit failed any policy
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.not_signed_off.is_empty() && self.not_gpg_verified.is_empty()
    }
}
