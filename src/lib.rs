//! Cached GitHub repository metadata client.
//!
//! Fetches public metadata (stars, forks, description, topics) for a single
//! repository, caching results in memory for an hour. A lookup whose live
//! fetch fails returns the previous snapshot when one exists, so page
//! builds degrade to slightly stale numbers instead of breaking.

pub mod cache;
pub mod error;
pub mod github;

pub use cache::{CacheEntry, DEFAULT_TTL, RepoCache};
pub use error::{FetchError, Result};
pub use github::{CachedRepoClient, GitHubClient, RateLimit, Repository, RepositoryFetcher};
