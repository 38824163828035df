//! Cache stores backing the listing reader and the page cache.
//!
//! Provides a [`CacheStore`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed store
//! - [`MemoryCache`] - Bounded in-process store for development and tests

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::{DEFAULT_MAX_ENTRIES, MemoryCache};
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheStore, KeyspaceStats};

#[cfg(test)]
pub use service::MockCacheStore;
