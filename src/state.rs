//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::api::middleware::page_cache::PageCache;
use crate::application::services::{ListingService, MetricsService};
use crate::domain::repositories::ListingRepository;
use crate::infrastructure::cache::CacheStore;

/// Services and the cache handle shared across requests.
///
/// Built once at startup; cloning is cheap (every field is reference-counted).
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService>,
    pub metrics_service: Arc<MetricsService>,
    pub cache: Arc<dyn CacheStore>,
    pub page_cache: PageCache,
}

impl AppState {
    /// Wires services around one repository and one cache store.
    ///
    /// The same store backs the listing cache (`listings_ttl`) and the page
    /// cache (`page_ttl`).
    pub fn new(
        repository: Arc<dyn ListingRepository>,
        cache: Arc<dyn CacheStore>,
        listings_ttl: Duration,
        page_ttl: Duration,
    ) -> Self {
        Self {
            listing_service: Arc::new(ListingService::new(
                repository,
                cache.clone(),
                listings_ttl,
            )),
            metrics_service: Arc::new(MetricsService::new(cache.clone())),
            page_cache: PageCache::new(cache.clone(), page_ttl),
            cache,
        }
    }
}
