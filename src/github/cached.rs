// Cached repository lookups.
// Serves fresh cache hits without a network call and falls back to stale
// data when a live fetch fails.

use std::time::Duration;

use log::{debug, warn};

use crate::cache::{DEFAULT_TTL, RepoCache};
use crate::error::Result;

use super::client::RepositoryFetcher;
use super::types::Repository;

/// Caching wrapper around a [`RepositoryFetcher`].
///
/// Lookups hit the network at most once per TTL window per repository.
/// When a live fetch fails and an older snapshot exists for the key, the
/// snapshot is returned and the failure only shows up as a log warning;
/// the failure propagates only when the cache holds nothing for the key.
pub struct CachedRepoClient<F> {
    fetcher: F,
    cache: RepoCache,
    ttl: Duration,
}

impl<F: RepositoryFetcher> CachedRepoClient<F> {
    /// Wrap a fetcher with an empty cache and the default 1 hour TTL.
    pub fn new(fetcher: F) -> Self {
        Self::with_cache(fetcher, RepoCache::new(), DEFAULT_TTL)
    }

    /// Wrap a fetcher with an explicit (possibly pre-seeded) cache and TTL.
    pub fn with_cache(fetcher: F, cache: RepoCache, ttl: Duration) -> Self {
        Self { fetcher, cache, ttl }
    }

    /// The underlying cache.
    pub fn cache(&self) -> &RepoCache {
        &self.cache
    }

    /// Get metadata for `owner/repo`, from cache when fresh.
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let key = format!("{}/{}", owner, repo);

        if let Some(data) = self.cache.get_if_fresh(&key, self.ttl) {
            debug!("cache hit for {}", key);
            return Ok(data);
        }

        match self.fetcher.fetch_repository(owner, repo).await {
            Ok(data) => {
                debug!("cache miss for {}, stored fresh entry", key);
                self.cache.insert(&key, data.clone());
                Ok(data)
            }
            Err(err) => match self.cache.get(&key) {
                Some(stale) => {
                    warn!("fetch failed for {}, serving stale cache: {}", key, err);
                    Ok(stale.data)
                }
                None => Err(err),
            },
        }
    }
}
