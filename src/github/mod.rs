// GitHub API module.
// Provides the HTTP client, caching layer, and response types.

pub mod cached;
pub mod client;
pub mod types;

pub use cached::CachedRepoClient;
pub use client::{GitHubClient, RepositoryFetcher, build_headers, rate_limit_from_headers};
pub use types::{RateLimit, Repository};
