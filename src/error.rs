// Error types for repocard.
// Covers rate-limit exhaustion, API failures, and transport errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(
        "GitHub API rate limit exceeded, resets at {reset_at} (limit {limit}, remaining {remaining})"
    )]
    RateLimited {
        limit: u64,
        remaining: u64,
        reset_at: String,
    },

    #[error("GitHub API error: {status} {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure before a status code was available.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid GitHub token: {0}")]
    InvalidToken(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
