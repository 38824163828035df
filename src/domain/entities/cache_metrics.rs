//! Cache hit/miss summary.

use serde::Serialize;

/// Snapshot of the cache store's lookup counters with the derived hit ratio.
///
/// Recomputed on every request from the store's live counters. When the counters
/// could not be read, `error` carries the reason and every numeric field is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
    pub total_requests: u64,
    pub hit_ratio: f64,
    pub hit_percentage: f64,
}

impl CacheMetrics {
    /// Derives totals and ratios from raw hit/miss counts.
    ///
    /// The ratio is `0.0` when no lookups were recorded; the percentage is
    /// rounded to two decimal places.
    pub fn from_counts(keyspace_hits: u64, keyspace_misses: u64) -> Self {
        let total_requests = keyspace_hits.saturating_add(keyspace_misses);
        let hit_ratio = if total_requests > 0 {
            keyspace_hits as f64 / total_requests as f64
        } else {
            0.0
        };

        Self {
            error: None,
            keyspace_hits,
            keyspace_misses,
            total_requests,
            hit_ratio,
            hit_percentage: round2(hit_ratio * 100.0),
        }
    }

    /// Zeroed snapshot flagged with the failure reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            keyspace_hits: 0,
            keyspace_misses: 0,
            total_requests: 0,
            hit_ratio: 0.0,
            hit_percentage: 0.0,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
