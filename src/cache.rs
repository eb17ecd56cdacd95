// In-memory cache for repository metadata.
// Entries expire passively after a TTL and are only removed by overwrite.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::github::Repository;

/// Default TTL for cached repository metadata: 1 hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// A repository snapshot together with the time it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The fetched metadata.
    pub data: Repository,
    /// When the data was fetched.
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(data: Repository) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this entry has expired based on TTL.
    /// An entry exactly at TTL age counts as expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed >= ttl
    }

    /// Check if this entry is still fresh (not expired).
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// Process-lifetime store of cache entries keyed by `owner/repo`.
///
/// The map is mutex-guarded so concurrent lookups and inserts are safe;
/// two callers racing on the same stale key may both fetch, and the last
/// insert wins.
#[derive(Debug, Default)]
pub struct RepoCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RepoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry regardless of age.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Look up an entry and return its data only if still fresh.
    pub fn get_if_fresh(&self, key: &str, ttl: Duration) -> Option<Repository> {
        match self.get(key) {
            Some(entry) if entry.is_fresh(ttl) => Some(entry.data),
            _ => None,
        }
    }

    /// Store fresh metadata for a key, replacing any prior entry.
    pub fn insert(&self, key: &str, data: Repository) {
        self.insert_entry(key, CacheEntry::new(data));
    }

    /// Store a prepared entry, e.g. to pre-seed a cache.
    pub fn insert_entry(&self, key: &str, entry: CacheEntry) {
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
