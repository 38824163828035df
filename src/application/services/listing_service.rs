//! Cache-aside reads of the full listing collection.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::domain::entities::Listing;
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheStore;

/// Cache key holding the serialized listing collection.
pub const ALL_LISTINGS_KEY: &str = "all_properties";

/// Default lifetime of the cached collection.
pub const DEFAULT_LISTINGS_TTL: Duration = Duration::from_secs(3600);

/// Service returning all listings, served from the cache when possible.
///
/// # Cache Strategy
///
/// - **Cache hit**: the stored collection is returned unmodified
/// - **Cache miss**: load from the repository, write it back with the configured TTL
/// - **Cache error**: propagated to the caller
///
/// Concurrent misses each load and each write the key; the last write wins.
pub struct ListingService {
    repository: Arc<dyn ListingRepository>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(
        repository: Arc<dyn ListingRepository>,
        cache: Arc<dyn CacheStore>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Returns every listing, from the cache on hit or the repository on miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache read or write fails, the cached
    /// value cannot be decoded, or the repository load fails.
    pub async fn get_all_listings(&self) -> Result<Vec<Listing>, AppError> {
        if let Some(cached) = self.cache.get(ALL_LISTINGS_KEY).await? {
            let listings: Vec<Listing> = serde_json::from_str(&cached)?;
            metrics::counter!("listings_cache_hits_total").increment(1);
            info!(cache = "hit", count = listings.len(), "Retrieved listings from cache");
            return Ok(listings);
        }

        let listings = self.repository.find_all().await?;
        let payload = serde_json::to_string(&listings)?;
        self.cache.set(ALL_LISTINGS_KEY, &payload, self.ttl).await?;

        metrics::counter!("listings_cache_misses_total").increment(1);
        info!(cache = "miss", count = listings.len(), "Fetched listings from database");

        Ok(listings)
    }

    /// Drops the cached collection so the next read reloads it.
    ///
    /// Returns `true` if an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache delete fails.
    pub async fn invalidate(&self) -> Result<bool, AppError> {
        let removed = self.cache.delete(ALL_LISTINGS_KEY).await?;
        info!(removed, "Invalidated cached listings");
        Ok(removed)
    }

    /// Counts listings directly in the repository, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_listings(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
