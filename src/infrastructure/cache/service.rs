//! Cache store trait and error types.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Server-wide lookup counters reported by the cache backend.
///
/// Cumulative since the backend started (or since its statistics were last reset);
/// not scoped to this application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyspaceStats {
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
}

/// Key-value cache shared by the listing reader and the page cache.
///
/// Unlike a fail-open cache, implementations surface errors: callers decide
/// whether a cache failure is fatal for the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed store
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process store with TTL support
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the raw value stored under `key`.
    ///
    /// `Ok(None)` means the key is absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Removes `key`. Returns `true` if an entry was deleted.
    async fn delete(&self, key: &str) -> CacheResult<bool>;

    /// Reads the backend's keyspace hit/miss counters.
    async fn stats(&self) -> CacheResult<KeyspaceStats>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
