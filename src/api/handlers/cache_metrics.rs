//! Handler for cache hit/miss metrics.

use axum::{Json, extract::State};

use crate::domain::entities::CacheMetrics;
use crate::state::AppState;

/// Reports the cache store's server-wide hit/miss counters.
///
/// # Endpoint
///
/// `GET /cache/metrics`
///
/// Always responds `200 OK`. When the counters cannot be read, the body carries
/// an `error` field and every number is zero.
///
/// # Response
///
/// ```json
/// {
///   "keyspace_hits": 80,
///   "keyspace_misses": 20,
///   "total_requests": 100,
///   "hit_ratio": 0.8,
///   "hit_percentage": 80.0
/// }
/// ```
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<CacheMetrics> {
    Json(state.metrics_service.get_cache_metrics().await)
}
