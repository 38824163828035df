//! Repository trait for listing data access.

use crate::domain::entities::Listing;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading property listings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgListingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Loads every listing in the store's natural order.
    ///
    /// No filtering and no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Listing>, AppError>;

    /// Counts stored listings. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
