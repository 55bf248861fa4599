//! Error types for the validator
//!
//! - [`ValidationError`] - Failures of a validation run
//! - [`ApiError`] - Failures talking to the hosting platform
//! - [`ConfigError`] - Invalid settings

use thiserror::Error;

/// Errors raised while validating a pull request
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The commit list could not be fetched
    #[error("failed to fetch pull request commits: {0}")]
    Fetch(#[source] ApiError),

    /// A commit payload lacks a required field
    #[error("commit {sha} is missing required field `{field}`")]
    MalformedCommit {
        /// SHA of the commit, or `#<index>` when the SHA itself is missing
        sha: String,
        /// Dotted path of the missing field
        field: &'static str,
    },

    /// A `pull_request` event without pull-request data
    #[error("pull_request event does not carry a pull request payload")]
    MissingPullRequest,
}

/// Errors from the hosting platform API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network or TLS failure
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },

    /// The token was rejected or lacks permission
    #[error("request to {url} was not authorized (HTTP {status})")]
    Unauthorized {
        /// Requested URL
        url: String,
        /// HTTP status code (401 or 403)
        status: u16,
    },

    /// Any other non-success status
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body was not the expected JSON
    #[error("could not decode response from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Decoder message
        message: String,
    },
}

impl ApiError {
    /// Classify a non-success HTTP status
    #[must_use]
    pub fn from_status(url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        match status {
            401 | 403 => Self::Unauthorized { url, status },
            _ => Self::Status { url, status },
        }
    }
}

/// Errors in validator settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boolean switch held something other than a boolean word
    #[error("invalid boolean for {name}: {value:?} (use true/false, 1/0, yes/no, on/off)")]
    InvalidBool {
        /// Setting name
        name: String,
        /// Offending value
        value: String,
    },

    /// Repository was not `owner/repo`
    #[error("invalid repository {0:?}: expected owner/repo")]
    InvalidRepository(String),

    /// A required setting is absent
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// The config file could not be read
    #[error("could not read config file {path}: {source}")]
    Read {
        /// Path of the config file
        path: String,
        /// I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML
    #[error("could not parse config file {path}: {source}")]
    Parse {
        /// Path of the config file
        path: String,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The event payload could not be read or parsed
    #[error("could not load event payload {path}: {message}")]
    Event {
        /// Path of the event payload
        path: String,
        /// Underlying error message
        message: String,
    },
}
