//! PostgreSQL repository implementations.
//!
//! - [`PgListingRepository`] - Listing retrieval from the `properties` table

pub mod pg_listing_repository;

pub use pg_listing_repository::PgListingRepository;
