//! Business logic services for the application layer.

pub mod listing_service;
pub mod metrics_service;

pub use listing_service::{ALL_LISTINGS_KEY, DEFAULT_LISTINGS_TTL, ListingService};
pub use metrics_service::MetricsService;
