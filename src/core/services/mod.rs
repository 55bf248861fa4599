//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Only
//! [`validator`] and [`report`] touch ports, and only through the traits.
//!
//! - [`signoff`] - Extract and match `Signed-off-by` trailers
//! - [`classifier`] - Apply the sign-off and GPG rules
//! - [`verdict_builder`] - Turn failures into a verdict
//! - [`validator`] - Run a full validation for an event
//! - [`report`] - Submit a verdict as a check run

pub mod classifier;
pub mod report;
pub mod signoff;
pub mod validator;
pub mod verdict_builder;

pub use classifier::{check_gpg_verification, check_sign_off, classify};
pub use report::submit_verdict;
pub use signoff::{SignOff, find_sign_off, is_signed_off};
pub use validator::validate;
pub use verdict_builder::{
    CONFIGURATION_TITLE, DEFAULT_DOCS_URL, FAILURE_TITLE, GPG_HEADER, SIGN_OFF_HEADER,
    SUCCESS_SUMMARY, SUCCESS_TITLE, build_verdict, configuration_failure,
};
