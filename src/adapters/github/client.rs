//! Blocking GitHub REST client

use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, LINK};

use crate::core::error::ApiError;
use crate::core::models::{CheckRun, CommitPayload, RepoCoordinates};
use crate::core::ports::{CheckReporter, CommitSource};

use super::pagination::{next_link, with_page_size};

const API_VERSION: &str = "2022-11-28";
const TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API client
///
/// Requests are anonymous when no token is given, which is enough to read
/// public pull requests but not to create check runs.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for `api_url`, authenticating with `token` when given
    pub fn new(api_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(concat!("dco-validator/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| transport(api_url, &e))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.map(ToString::to_string),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, url: &str) -> Result<Response, ApiError> {
        log::debug!("GET {url}");
        let response = self
            .authorize(self.http.get(url))
            .send()
            .map_err(|e| transport(url, &e))?;
        ensure_success(url, response)
    }
}

impl CommitSource for GitHubClient {
    fn fetch_commits(&self, commits_url: &str) -> Result<Vec<CommitPayload>, ApiError> {
        let mut commits = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(with_page_size(commits_url));

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                log::warn!("pagination revisits {url}, stopping");
                break;
            }
            let response = self.get(&url)?;
            next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_link);

            let body = response.text().map_err(|e| transport(&url, &e))?;
            let page: Vec<CommitPayload> =
                serde_json::from_str(&body).map_err(|e| ApiError::Decode {
                    url: url.clone(),
                    message: e.to_string(),
                })?;
            log::debug!("received {} commit(s) from {url}", page.len());
            commits.extend(page);
        }

        Ok(commits)
    }
}

impl CheckReporter for GitHubClient {
    fn create_check_run(
        &self,
        repository: &RepoCoordinates,
        run: &CheckRun,
    ) -> Result<(), ApiError> {
        let url = format!(
            "{}/repos/{}/{}/check-runs",
            self.api_url, repository.owner, repository.repo
        );
        log::debug!("POST {url} ({})", run.conclusion);

        let response = self
            .authorize(self.http.post(&url))
            .json(run)
            .send()
            .map_err(|e| transport(&url, &e))?;
        ensure_success(&url, response)?;

        log::info!("reported check run {:?} on {}", run.name, run.head_sha);
        Ok(())
    }
}

fn ensure_success(url: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_status(url, status.as_u16()))
    }
}

fn transport(url: &str, err: &reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}
