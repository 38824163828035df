//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization. The cache metrics endpoint
//! serializes [`crate::domain::entities::CacheMetrics`] directly.

pub mod health;
pub mod listing;
