//! Validator configuration
//!
//! Settings are resolved from built-in defaults, then an optional TOML file
//! (`dco-validator.toml`), then the workflow environment. Only this module
//! reads the process environment; the core receives plain values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_CHECK_NAME, RepoCoordinates, RuleConfig};
use crate::core::services::DEFAULT_DOCS_URL;

pub use crate::core::error::ConfigError;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "dco-validator.toml";

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable names
pub mod env {
    /// API token
    pub const TOKEN: &str = "GITHUB_TOKEN";
    /// GPG policy switch
    pub const VALIDATE_GPG: &str = "VALIDATE_GPG";
    /// API base URL
    pub const API_URL: &str = "GITHUB_API_URL";
    /// Name of the triggering event
    pub const EVENT_NAME: &str = "GITHUB_EVENT_NAME";
    /// Path to the webhook payload JSON
    pub const EVENT_PATH: &str = "GITHUB_EVENT_PATH";
    /// `owner/repo`
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    /// Generic commit SHA
    pub const SHA: &str = "GITHUB_SHA";
    /// Generic git ref
    pub const REF: &str = "GITHUB_REF";
}

/// Contents of `dco-validator.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Enforce GPG verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpg_required: Option<bool>,
    /// API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Check-run name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
    /// Documentation linked from configuration failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl FileConfig {
    /// Parse a config file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load the explicit file, or `dco-validator.toml` when it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.is_file() {
                    Self::from_path(default)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// API token (required to talk to the platform)
    pub token: Option<String>,
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Enabled rules
    pub rules: RuleConfig,
    /// Check-run name
    pub check_name: String,
    /// Documentation linked from configuration failures
    pub docs_url: String,
    /// Name of the triggering event
    pub event_name: String,
    /// Webhook payload path
    pub event_path: Option<PathBuf>,
    /// Repository coordinates, when known from the environment
    pub repository: Option<RepoCoordinates>,
    /// Generic commit SHA
    pub sha: String,
    /// Generic git ref
    pub git_ref: String,
}

impl Settings {
    /// Resolve settings from a config file and the process environment
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = FileConfig::discover(config_path)?;
        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// Resolve settings from a config file and an arbitrary variable lookup
    pub fn resolve<F>(file: FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let gpg_required = match lookup(env::VALIDATE_GPG) {
            Some(value) => parse_bool(env::VALIDATE_GPG, &value)?,
            None => file.gpg_required.unwrap_or(false),
        };

        let api_url = non_empty(env::API_URL)
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let repository = non_empty(env::REPOSITORY).map(|r| r.parse()).transpose()?;

        Ok(Self {
            token: non_empty(env::TOKEN),
            api_url,
            rules: RuleConfig::new(gpg_required),
            check_name: file.check_name.unwrap_or_else(|| DEFAULT_CHECK_NAME.to_string()),
            docs_url: file.docs_url.unwrap_or_else(|| DEFAULT_DOCS_URL.to_string()),
            event_name: lookup(env::EVENT_NAME).unwrap_or_default(),
            event_path: non_empty(env::EVENT_PATH).map(PathBuf::from),
            repository,
            sha: lookup(env::SHA).unwrap_or_default(),
            git_ref: lookup(env::REF).unwrap_or_default(),
        })
    }

    /// The API token, or an error when it is not configured
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.token.as_deref().ok_or(ConfigError::Missing(env::TOKEN))
    }
}

/// Parse a boolean switch
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case. An empty
/// value counts as `false`.
pub fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
