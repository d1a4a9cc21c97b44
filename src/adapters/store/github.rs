//! GitHub contents API store
//!
//! Documents are files on one branch of one repository. The blob SHA returned
//! by the contents API is the version token; GitHub rejects an update whose
//! SHA is stale, which surfaces here as [`StoreError::Conflict`].

use super::traits::{RemoteDocument, RemoteStore, StoreResult};
use crate::config::{SecretString, StoreConfig};
use crate::domain::{Result, StoreError, SyncError};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("playlist-sync/", env!("CARGO_PKG_VERSION"));

/// File entry as returned by `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    sha: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// Error body GitHub sends with non-success statuses
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Remote store backed by a GitHub repository branch
pub struct GitHubStore {
    client: Client,
    api_base_url: Url,
    owner: String,
    repo: String,
    branch: String,
    token: SecretString,
    commit_message: String,
}

impl GitHubStore {
    /// Creates a store from configuration
    ///
    /// # Errors
    ///
    /// - [`SyncError::MissingCredential`] when no token is configured
    /// - [`SyncError::Configuration`] for an unusable API base URL
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let token = config
            .token
            .clone()
            .filter(|t| !t.expose_secret().is_blank())
            .ok_or_else(|| {
                SyncError::MissingCredential(
                    "set store.token or the GITHUB_PAT environment variable".to_string(),
                )
            })?;

        let api_base_url = Url::parse(&config.api_base_url).map_err(|e| {
            SyncError::Configuration(format!("Invalid store.api_base_url: {e}"))
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SyncError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url,
            owner: config.owner().to_string(),
            repo: config.repo_name().to_string(),
            branch: config.branch.clone(),
            token,
            commit_message: config.commit_message.clone(),
        })
    }

    /// URL of the contents endpoint for `path`, each segment percent-encoded
    fn contents_url(&self, path: &str) -> StoreResult<Url> {
        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StoreError::InvalidResponse(format!(
                    "API base URL cannot carry a path: {}",
                    self.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str(), "contents"])
            .extend(path.split('/').filter(|s| !s.is_empty()));
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token: &str = self.token.expose_secret().as_ref();
        request
            .bearer_auth(token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    async fn put(&self, path: &str, body: &str, sha: Option<&str>) -> StoreResult<()> {
        let url = self.contents_url(path)?;
        let payload = PutContentsRequest {
            message: &self.commit_message,
            content: general_purpose::STANDARD.encode(body.as_bytes()),
            branch: &self.branch,
            sha,
        };

        let resp = self
            .authorize(self.client.put(url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            _ => Err(status_error(path, resp).await),
        }
    }
}

#[async_trait]
impl RemoteStore for GitHubStore {
    async fn get(&self, path: &str) -> StoreResult<Option<RemoteDocument>> {
        let url = self.contents_url(path)?;

        let resp = self
            .authorize(self.client.get(url))
            .query(&[("ref", self.branch.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        match resp.status() {
            StatusCode::OK => {
                let entry: ContentsResponse = resp.json().await.map_err(|e| {
                    StoreError::InvalidResponse(format!(
                        "Unexpected contents payload for {path}: {e}"
                    ))
                })?;
                let body = decode_content(path, &entry)?;
                Ok(Some(RemoteDocument {
                    path: path.to_string(),
                    body,
                    version: entry.sha,
                }))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(status_error(path, resp).await),
        }
    }

    async fn create(&self, path: &str, body: &str) -> StoreResult<()> {
        tracing::debug!(path = %path, branch = %self.branch, "Creating document");
        self.put(path, body, None).await
    }

    async fn update(&self, path: &str, body: &str, version: &str) -> StoreResult<()> {
        tracing::debug!(path = %path, branch = %self.branch, sha = %version, "Updating document");
        self.put(path, body, Some(version)).await
    }

    fn location(&self) -> String {
        format!("{}/{}@{}", self.owner, self.repo, self.branch)
    }
}

fn decode_content(path: &str, entry: &ContentsResponse) -> StoreResult<String> {
    match entry.encoding.as_deref() {
        Some("base64") | None => {}
        Some(other) => {
            return Err(StoreError::InvalidResponse(format!(
                "{path} is served with unsupported encoding '{other}'"
            )))
        }
    }

    let compact: String = entry
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| StoreError::InvalidResponse(format!("Invalid base64 for {path}: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| StoreError::InvalidResponse(format!("{path} is not valid UTF-8: {e}")))
}

fn transport_error(err: &reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout(err.to_string())
    } else {
        StoreError::ConnectionFailed(err.to_string())
    }
}

async fn status_error(path: &str, resp: Response) -> StoreError {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or(text);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            StoreError::AuthenticationFailed(format!("{status}: {message}"))
        }
        StatusCode::CONFLICT => StoreError::Conflict(format!("{path}: {message}")),
        // GitHub answers 422 when a create races another writer and the sha is now required
        StatusCode::UNPROCESSABLE_ENTITY if message.contains("sha") => {
            StoreError::Conflict(format!("{path}: {message}"))
        }
        StatusCode::NOT_FOUND => StoreError::NotFound(path.to_string()),
        _ => StoreError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
