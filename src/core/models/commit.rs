//! Commit model
//!
//! A commit as the validator sees it: identity, author, message and the
//! upstream verification flag. The wire shape ([`CommitPayload`]) mirrors
//! the hosting platform's commit listing and is converted into a
//! [`CommitRecord`] with strict field checks.

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;

/// A commit ready for classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit SHA
    pub sha: String,
    /// Recorded author name
    pub author_name: String,
    /// Recorded author email
    pub author_email: String,
    /// Full commit message (may span several lines)
    pub message: String,
    /// Whether the platform verified the commit signature
    pub verified: bool,
}

impl CommitRecord {
    /// Create a new commit record
    #[must_use]
    pub fn new(
        sha: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
        message: impl Into<String>,
        verified: bool,
    ) -> Self {
        Self {
            sha: sha.into(),
            author_name: author_name.into(),
            author_email: author_email.into(),
            message: message.into(),
            verified,
        }
    }

    /// Convert a list of payloads, failing on the first malformed one
    pub fn from_payloads(payloads: Vec<CommitPayload>) -> Result<Vec<Self>, ValidationError> {
        payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| payload.into_record(index))
            .collect()
    }
}

/// Commit entry as returned by the pull-request commits listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitPayload {
    /// Commit SHA
    #[serde(default)]
    pub sha: Option<String>,
    /// Git-level commit details
    #[serde(default)]
    pub commit: Option<CommitDetail>,
}

/// Git-level commit details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitDetail {
    /// Commit message
    #[serde(default)]
    pub message: Option<String>,
    /// Author identity
    #[serde(default)]
    pub author: Option<CommitAuthor>,
    /// Signature verification data
    #[serde(default)]
    pub verification: Option<CommitVerification>,
}

/// Author identity recorded in the commit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name
    #[serde(default)]
    pub name: Option<String>,
    /// Author email
    #[serde(default)]
    pub email: Option<String>,
}

/// Signature verification data reported upstream
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommitVerification {
    /// Whether the signature was verified
    #[serde(default)]
    pub verified: Option<bool>,
}

impl CommitPayload {
    /// Build a fully populated payload (mostly useful for fixtures)
    #[must_use]
    pub fn complete(sha: &str, name: &str, email: &str, message: &str, verified: bool) -> Self {
        Self {
            sha: Some(sha.to_string()),
            commit: Some(CommitDetail {
                message: Some(message.to_string()),
                author: Some(CommitAuthor {
                    name: Some(name.to_string()),
                    email: Some(email.to_string()),
                }),
                verification: Some(CommitVerification {
                    verified: Some(verified),
                }),
            }),
        }
    }

    fn into_record(self, index: usize) -> Result<CommitRecord, ValidationError> {
        let sha = self.sha.ok_or_else(|| ValidationError::MalformedCommit {
            sha: format!("#{index}"),
            field: "sha",
        })?;
        let missing = |field: &'static str| ValidationError::MalformedCommit {
            sha: sha.clone(),
            field,
        };

        let detail = self.commit.ok_or_else(|| missing("commit"))?;
        let message = detail.message.ok_or_else(|| missing("commit.message"))?;
        let author = detail.author.ok_or_else(|| missing("commit.author"))?;
        let author_name = author.name.ok_or_else(|| missing("commit.author.name"))?;
        let author_email = author.email.ok_or_else(|| missing("commit.author.email"))?;
        let verified = detail
            .verification
            .and_then(|v| v.verified)
            .ok_or_else(|| missing("commit.verification.verified"))?;

        Ok(CommitRecord {
            sha,
            author_name,
            author_email,
            message,
            verified,
        })
    }
}
