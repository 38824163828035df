//! Core domain entities.
//!
//! - [`Listing`] - A property listing read from the backing store
//! - [`CacheMetrics`] - Hit/miss summary derived from the cache store's counters

pub mod cache_metrics;
pub mod listing;

pub use cache_metrics::CacheMetrics;
pub use listing::Listing;
