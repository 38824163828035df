//! HTTP request handlers.

pub mod cache_metrics;
pub mod health;
pub mod listings;

pub use cache_metrics::cache_metrics_handler;
pub use health::health_handler;
pub use listings::listings_handler;

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
