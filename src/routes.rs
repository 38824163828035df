//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /properties`    - All listings (page-cached)
//! - `GET /cache/metrics` - Cache hit/miss counters
//! - `GET /health`        - Health check: database, cache
//!
//! # Middleware
//!
//! - **Page cache** - Whole-response cache on the listing routes
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::listing_routes(state.page_cache.clone()))
        .merge(api::routes::operational_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
