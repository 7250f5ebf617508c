//! In-memory response cache for read-heavy GET endpoints.
//!
//! This module provides the `ResponseCache` used to serve question and tag
//! list endpoints without hitting the database on every request. Entries are
//! keyed by request path (including the query string) and expire after a TTL;
//! there is no active invalidation on writes, so readers may observe results
//! up to one TTL old. The cache is constructed once at startup and shared
//! through `AppState`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cached response body with expiration timestamp.
#[derive(Clone)]
struct CacheEntry {
    /// Serialized JSON response body.
    body: String,
    /// Timestamp when this entry expires.
    expires_at: Instant,
}

impl CacheEntry {
    fn new(body: String, ttl: Duration) -> Self {
        Self {
            body,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Statistics snapshot exposed by the health endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    /// Number of entries currently stored, expired ones included.
    pub entries: u64,
    /// Lookups answered from the cache since startup.
    pub hits: u64,
    /// Lookups that fell through to the database since startup.
    pub misses: u64,
}

/// Path-keyed response cache with per-entry TTL and hit/miss counters.
///
/// Cheap to clone; clones share the same underlying map and counters.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    default_ttl: Duration,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl ResponseCache {
    /// Creates an empty cache whose `put` calls use `default_ttl`.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Looks up a cached body by request path.
    ///
    /// Counts a hit and returns the body when a live entry exists. Expired
    /// entries are removed on the way out and count as misses.
    ///
    /// # Arguments
    /// - `key` - Request path plus query string, e.g. `/api/tags?page=2`
    ///
    /// # Returns
    /// - `Some(String)` - Cached response body, not yet expired
    /// - `None` - No entry, or the entry had expired
    pub async fn get(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    return Some(entry.body.clone());
                }
                Some(_) => {}
                None => {
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    return None;
                }
            }
        }

        // The entry was present but stale; drop it so the map does not
        // accumulate dead paths between purges.
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.is_expired() {
                entries.remove(key);
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores a response body under the default TTL.
    pub async fn put(&self, key: impl Into<String>, body: String) {
        self.put_with_ttl(key, body, self.default_ttl).await;
    }

    /// Stores a response body under a route-specific TTL.
    ///
    /// Expired entries across the whole map are purged on every insert, which
    /// bounds the map size without a background sweeper task.
    pub async fn put_with_ttl(&self, key: impl Into<String>, body: String, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired());
        entries.insert(key.into(), CacheEntry::new(body, ttl));
    }

    /// Returns entry count and lifetime hit/miss counters.
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        CacheStats {
            entries: entries.len() as u64,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
