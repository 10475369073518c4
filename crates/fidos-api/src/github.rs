use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("API request failed with status {0}")]
    RequestFailed(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise instances, and for pointing tests at a mock server
    pub fn with_base_url(token: Option<String>, base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("fidos-projects/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            token,
            base_url,
        }
    }

    /// List a user's own public repositories, most recently updated first.
    ///
    /// One shot, no retry: a non-2xx response or a garbled body is a hard
    /// failure surfaced to the caller. per_page=100 is as many as the API
    /// hands out in one page, which is plenty for a personal account.
    pub async fn list_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);

        let mut request = self.client.get(&url).query(&[
            ("per_page", "100"),
            ("sort", "updated"),
            ("type", "owner"),
        ]);

        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(GitHubError::RequestFailed(response.status().as_u16()));
        }

        let body = response.text().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;

        debug!("Fetched {} repositories for {}", repos.len(), username);
        Ok(repos)
    }
}

/// Raw repository record as the listing endpoint returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub stargazers_count: u32,
}
