// GitHub API response types.
// Defines structs for deserializing the single-repository endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public metadata for a GitHub repository.
///
/// Fields the API may omit stay `None` rather than being defaulted, so a
/// cached snapshot records exactly what the provider returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub topics: Option<Vec<String>>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Epoch seconds at which the quota resets.
    pub reset: u64,
}
