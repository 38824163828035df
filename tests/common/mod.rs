#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use property_listings::api::middleware::page_cache::DEFAULT_PAGE_TTL;
use property_listings::application::services::DEFAULT_LISTINGS_TTL;
use property_listings::domain::entities::Listing;
use property_listings::domain::repositories::ListingRepository;
use property_listings::error::AppError;
use property_listings::infrastructure::cache::{CacheStore, MemoryCache};
use property_listings::state::AppState;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the listings table.
///
/// Counts `find_all` calls so tests can observe cache behaviour.
#[derive(Default)]
pub struct FakeListingRepository {
    listings: Mutex<Vec<Listing>>,
    loads: AtomicUsize,
    failing: AtomicBool,
}

impl FakeListingRepository {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Mutex::new(listings),
            ..Self::default()
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn push(&self, listing: Listing) {
        self.listings.lock().unwrap().push(listing);
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ListingRepository for FakeListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self.listings.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self.listings.lock().unwrap().len() as i64)
    }
}

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 15, 30).unwrap()
}

pub fn listing(id: i64, title: &str, price: &str) -> Listing {
    Listing::new(
        id,
        title.to_string(),
        format!("{} description", title),
        Decimal::from_str(price).unwrap(),
        "Nairobi".to_string(),
        created_at(),
    )
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(1, "Garden flat", "1234.50"),
        listing(2, "Penthouse", "99000.00"),
    ]
}

pub fn create_test_state(
    repository: Arc<FakeListingRepository>,
) -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::default());
    let store: Arc<dyn CacheStore> = cache.clone();

    let state = AppState::new(repository, store, DEFAULT_LISTINGS_TTL, DEFAULT_PAGE_TTL);

    (state, cache)
}
