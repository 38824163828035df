//! Cache hit/miss reporting.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::CacheMetrics;
use crate::infrastructure::cache::CacheStore;

/// Service summarising the cache store's server-wide hit/miss counters.
pub struct MetricsService {
    cache: Arc<dyn CacheStore>,
}

impl MetricsService {
    /// Creates a new metrics service.
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    /// Reads the store's counters and derives the hit ratio.
    ///
    /// Never fails: if the counters cannot be read, the error is logged and a
    /// zeroed snapshot carrying the error message is returned.
    pub async fn get_cache_metrics(&self) -> CacheMetrics {
        match self.cache.stats().await {
            Ok(stats) => {
                let snapshot =
                    CacheMetrics::from_counts(stats.keyspace_hits, stats.keyspace_misses);

                metrics::gauge!("cache_hit_ratio").set(snapshot.hit_ratio);
                info!(
                    "Cache Metrics - Hits: {}, Misses: {}, Hit Ratio: {:.2}%",
                    snapshot.keyspace_hits,
                    snapshot.keyspace_misses,
                    snapshot.hit_ratio * 100.0
                );

                snapshot
            }
            Err(e) => {
                error!("Error retrieving cache metrics: {}", e);
                CacheMetrics::unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{CacheError, KeyspaceStats, MockCacheStore};

    fn service_with_stats(stats: Result<KeyspaceStats, String>) -> MetricsService {
        let mut cache = MockCacheStore::new();
        cache
            .expect_stats()
            .times(1)
            .returning(move || stats.clone().map_err(CacheError::Connection));
        MetricsService::new(Arc::new(cache))
    }

    #[tokio::test]
    async fn test_metrics_from_store_counters() {
        let service = service_with_stats(Ok(KeyspaceStats {
            keyspace_hits: 80,
            keyspace_misses: 20,
        }));

        let metrics = service.get_cache_metrics().await;

        assert_eq!(metrics.keyspace_hits, 80);
        assert_eq!(metrics.keyspace_misses, 20);
        assert_eq!(metrics.total_requests, 100);
        assert_eq!(metrics.hit_ratio, 0.8);
        assert_eq!(metrics.hit_percentage, 80.0);
        assert!(metrics.error.is_none());
    }

    #[tokio::test]
    async fn test_metrics_without_traffic() {
        let service = service_with_stats(Ok(KeyspaceStats::default()));

        let metrics = service.get_cache_metrics().await;

        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.hit_ratio, 0.0);
    }

    #[tokio::test]
    async fn test_metrics_on_store_failure() {
        let service = service_with_stats(Err("connection refused".to_string()));

        let metrics = service.get_cache_metrics().await;

        assert_eq!(
            metrics,
            CacheMetrics::unavailable("Cache connection error: connection refused")
        );
    }
}
