//! PostgreSQL repository tests.
//!
//! Need a running database: `DATABASE_URL=... cargo test -- --ignored`.

use property_listings::domain::repositories::ListingRepository;
use property_listings::infrastructure::persistence::PgListingRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn insert_listing(pool: &PgPool, title: &str, price: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO properties (title, description, price, location)
         VALUES ($1, $2, $3::numeric, $4)
         RETURNING id",
    )
    .bind(title)
    .bind(format!("{} description", title))
    .bind(price)
    .bind("Nairobi")
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_returns_rows_in_id_order(pool: PgPool) {
    let first = insert_listing(&pool, "Garden flat", "1234.50").await;
    let second = insert_listing(&pool, "Penthouse", "99000.00").await;

    let repo = PgListingRepository::new(Arc::new(pool));
    let listings = repo.find_all().await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, first);
    assert_eq!(listings[1].id, second);
    assert_eq!(listings[0].price.to_string(), "1234.50");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_empty_table(pool: PgPool) {
    let repo = PgListingRepository::new(Arc::new(pool));

    let listings = repo.find_all().await.unwrap();

    assert!(listings.is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_count(pool: PgPool) {
    insert_listing(&pool, "Cabin", "450.00").await;

    let repo = PgListingRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 1);
}
