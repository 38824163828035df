//! HTTP middleware for request processing.
//!
//! Provides whole-response page caching and request tracing.

pub mod page_cache;
pub mod tracing;
