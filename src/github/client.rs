// GitHub API HTTP client.
// Handles authentication headers, rate limit parsing, and response classification.

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use log::{debug, warn};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FetchError, Result};

use super::types::{RateLimit, Repository};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = "repocard";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of repository metadata.
///
/// Implemented by the live HTTP client and by test doubles, so the caching
/// layer can be exercised without network access.
#[async_trait]
pub trait RepositoryFetcher: Send + Sync {
    /// Fetch current metadata for `owner/repo`.
    async fn fetch_repository(&self, owner: &str, repo: &str) -> Result<Repository>;
}

/// Build the default header set for GitHub API requests.
///
/// Always pins `Accept` to the versioned JSON media type and sets a
/// `User-Agent` (GitHub rejects requests without one). A token adds
/// `Authorization: Bearer <token>`; without one the headers stay valid but
/// requests run against the much lower unauthenticated rate limit, so a
/// warning is logged.
pub fn build_headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    match token {
        Some(token) => {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FetchError::InvalidToken(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        None => warn!("no GitHub token configured, requests are unauthenticated"),
    }

    Ok(headers)
}

/// Extract rate limit counters from response headers.
/// Missing or malformed headers leave the zero default.
pub fn rate_limit_from_headers(headers: &HeaderMap) -> RateLimit {
    fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
        headers.get(name)?.to_str().ok()?.parse().ok()
    }

    RateLimit {
        limit: header_u64(headers, "x-ratelimit-limit").unwrap_or_default(),
        remaining: header_u64(headers, "x-ratelimit-remaining").unwrap_or_default(),
        reset: header_u64(headers, "x-ratelimit-reset").unwrap_or_default(),
    }
}

/// Map a non-success status to an error.
///
/// Forbidden with an exhausted quota becomes `RateLimited`, carrying the
/// reset time formatted as a clock time; everything else becomes `Api`.
fn error_for_status(status: StatusCode, rate: &RateLimit) -> FetchError {
    if status == StatusCode::FORBIDDEN && rate.remaining == 0 {
        let reset_at = DateTime::from_timestamp(rate.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        FetchError::RateLimited {
            limit: rate.limit,
            remaining: rate.remaining,
            reset_at,
        }
    } else {
        FetchError::Api {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unknown").to_string(),
        }
    }
}

/// GitHub API client for single-repository lookups.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new client with an optional bearer token.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(build_headers(token)?)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self { client })
    }

    /// Create a client from the GITHUB_TOKEN environment variable.
    /// An unset variable is non-fatal; the client runs unauthenticated.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").ok();
        Self::new(token.as_deref())
    }
}

#[async_trait]
impl RepositoryFetcher for GitHubClient {
    async fn fetch_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let url = format!("{}/repos/{}/{}", GITHUB_API_BASE, owner, repo);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let rate = rate_limit_from_headers(response.headers());
        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, &rate));
        }

        debug!(
            "fetched {}/{}, rate limit remaining: {}",
            owner, repo, rate.remaining
        );
        let repository = response.json().await.map_err(FetchError::Network)?;
        Ok(repository)
    }
}
