//! In-process cache store with per-entry expiry and LRU eviction.

use super::service::{CacheError, CacheResult, CacheStore, KeyspaceStats};
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Entry capacity used by [`MemoryCache::default`].
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// A cache store living inside the process.
///
/// Used when Redis is not configured or unreachable at startup, and as the
/// substitutable store in tests. Holds at most `max_entries` keys; inserting
/// past that evicts the least recently used one. Keeps its own hit/miss
/// counters so that [`CacheStore::stats`] behaves like Redis `INFO stats`.
pub struct MemoryCache {
    entries: RwLock<LruCache<String, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    /// Creates an empty store holding at most `max_entries` keys.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or_else(|| {
            warn!(
                "MemoryCache capacity was 0, using {} entries",
                DEFAULT_MAX_ENTRIES
            );
            NonZeroUsize::new(DEFAULT_MAX_ENTRIES).unwrap_or(NonZeroUsize::MIN)
        });
        debug!("Using MemoryCache ({} entries)", capacity);

        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn poisoned() -> CacheError {
        CacheError::Operation("MemoryCache lock poisoned".to_string())
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;

        let value = match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                entries.pop(key);
                None
            }
            None => None,
        };

        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheError::Operation(format!("invalid expire time {:?}", ttl)))?;

        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        if let Some((evicted, _)) = entries.push(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at,
            },
        ) && evicted != key
        {
            debug!("MemoryCache evicted {}", evicted);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        Ok(entries.pop(key).is_some())
    }

    async fn stats(&self) -> CacheResult<KeyspaceStats> {
        Ok(KeyspaceStats {
            keyspace_hits: self.hits.load(Ordering::Relaxed),
            keyspace_misses: self.misses.load(Ordering::Relaxed),
        })
    }

    async fn health_check(&self) -> bool {
        !self.entries.is_poisoned()
    }
}
