//! PostgreSQL implementation of the listing repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Listing;
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

/// PostgreSQL repository for listing retrieval.
pub struct PgListingRepository {
    pool: Arc<PgPool>,
}

impl PgListingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, title, description, price, location, created_at
            FROM properties
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(listings)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
