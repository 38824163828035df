//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheStore, KeyspaceStats};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, InfoDict, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache store.
///
/// Holds a `ConnectionManager` created once at startup; every operation clones
/// the manager, which multiplexes over the same connection and reconnects on failure.
pub struct RedisCache {
    client: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

fn op_error(command: &str, key: &str, e: redis::RedisError) -> CacheError {
    CacheError::Operation(format!("Redis {} failed for {}: {}", command, key, e))
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| op_error("GET", key, e))?;

        debug!(key, found = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.client.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| op_error("SET", key, e))?;

        debug!(key, ttl_seconds = ttl.as_secs(), "Redis SET");
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.client.clone();
        let deleted = conn
            .del::<_, i64>(key)
            .await
            .map_err(|e| op_error("DEL", key, e))?;

        Ok(deleted > 0)
    }

    async fn stats(&self) -> CacheResult<KeyspaceStats> {
        let mut conn = self.client.clone();
        let info: InfoDict = redis::cmd("INFO")
            .arg("stats")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Operation(format!("Redis INFO failed: {}", e)))?;

        Ok(KeyspaceStats {
            keyspace_hits: info.get("keyspace_hits").unwrap_or(0),
            keyspace_misses: info.get("keyspace_misses").unwrap_or(0),
        })
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
