//! API route configuration.

use crate::api::handlers::{cache_metrics_handler, health_handler, listings_handler};
use crate::api::middleware::page_cache::{self, PageCache};
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Listing routes, wrapped in the page cache.
///
/// # Endpoints
///
/// - `GET /properties` - All listings
pub fn listing_routes(page_cache: PageCache) -> Router<AppState> {
    Router::new()
        .route("/properties", get(listings_handler))
        .route_layer(middleware::from_fn_with_state(page_cache, page_cache::layer))
}

/// Operational routes, never page-cached.
///
/// # Endpoints
///
/// - `GET /cache/metrics` - Cache hit/miss counters
/// - `GET /health`        - Database and cache status
pub fn operational_routes() -> Router<AppState> {
    Router::new()
        .route("/cache/metrics", get(cache_metrics_handler))
        .route("/health", get(health_handler))
}
