//! Verdict builder
//!
//! Reduces a [`FailureSet`] into one reportable [`Verdict`].

use std::fmt::Write;

use crate::core::models::{Conclusion, FailureSet, StatusContext, Verdict};

/// Title of a passing verdict
pub const SUCCESS_TITLE: &str = "Successful Validation";
/// Summary of a passing verdict
pub const SUCCESS_SUMMARY: &str = "Congrats, all your commits are signed!";
/// Title of a verdict with failing commits
pub const FAILURE_TITLE: &str = "Failed Validation - Problems were found in some of your commits";
/// Title of a verdict for a misconfigured run
pub const CONFIGURATION_TITLE: &str = "Failed Validation";
/// Header of the sign-off failure block
pub const SIGN_OFF_HEADER: &str = "Some commits are incorrectly signed off :";
/// Header of the GPG failure block
pub const GPG_HEADER: &str = "GPG Verification not found for some commits :";
/// Setup documentation referenced by configuration failures
pub const DEFAULT_DOCS_URL: &str = "https://github.com/ZupIT/zup-dco-validator";

/// Build the verdict for a classified pull request
#[must_use]
pub fn build_verdict(failures: &FailureSet, context: StatusContext) -> Verdict {
    if failures.is_empty() {
        return Verdict {
            conclusion: Conclusion::Success,
            title: SUCCESS_TITLE.to_string(),
            summary: SUCCESS_SUMMARY.to_string(),
            context,
        };
    }

    Verdict {
        conclusion: Conclusion::Failure,
        title: FAILURE_TITLE.to_string(),
        summary: failure_summary(failures),
        context,
    }
}

/// Build the verdict for an event that is not a pull request
#[must_use]
pub fn configuration_failure(context: StatusContext, docs_url: &str) -> Verdict {
    Verdict {
        conclusion: Conclusion::Failure,
        title: CONFIGURATION_TITLE.to_string(),
        summary: format!(
            "Please, make sure you are using the correct configuration for this action. {docs_url}"
        ),
        context,
    }
}

fn failure_summary(failures: &FailureSet) -> String {
    let blocks: Vec<String> = [
        (SIGN_OFF_HEADER, &failures.not_signed_off),
        (GPG_HEADER, &failures.not_gpg_verified),
    ]
    .into_iter()
    .filter(|(_, shas)| !shas.is_empty())
    .map(|(header, shas)| {
        let mut block = header.to_string();
        for sha in shas {
            let _ = write!(block, "\n {sha}");
        }
        block
    })
    .collect();

    blocks.join("\n\n")
}
