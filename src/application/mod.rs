//! Application layer services.
//!
//! Services coordinate repositories and the cache store and give HTTP handlers
//! and the admin CLI a small API.
//!
//! # Available Services
//!
//! - [`services::listing_service::ListingService`] - Cache-aside listing reads
//! - [`services::metrics_service::MetricsService`] - Cache hit/miss reporting

pub mod services;
