//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Cache stores (Redis and in-process implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
