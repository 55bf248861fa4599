//! Rule configuration
//!
//! Which commit policies are enforced for an evaluation.

use serde::{Deserialize, Serialize};

/// Enabled commit policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Sign-off trailer check (always enforced)
    pub sign_off_required: bool,
    /// GPG verification check
    pub gpg_required: bool,
}

impl RuleConfig {
    /// Rules with the sign-off check on and the given GPG policy
    #[must_use]
    pub const fn new(gpg_required: bool) -> Self {
        Self {
            sign_off_required: true,
            gpg_required,
        }
    }

    /// Sign-off only
    #[must_use]
    pub const fn sign_off_only() -> Self {
        Self::new(false)
    }

    /// Sign-off and GPG verification
    #[must_use]
    pub const fn with_gpg() -> Self {
        Self::new(true)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::sign_off_only()
    }
}
