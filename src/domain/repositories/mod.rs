//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod listing_repository;

pub use listing_repository::ListingRepository;

#[cfg(test)]
pub use listing_repository::MockListingRepository;
