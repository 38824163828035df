//! Whole-response caching middleware.
//!
//! Stores successful `GET`/`HEAD` responses in the [`CacheStore`] keyed by
//! request identity (method, path and query) for a fixed TTL. This layer is
//! independent of any data-level cache inside the wrapped handlers: a cached
//! page may be served for up to its TTL even after the data cache has been
//! refreshed or invalidated.
//!
//! Lookup and store failures are logged and the request falls through to the
//! handler uncached. Bodies larger than [`MAX_PAGE_BYTES`], or with no known
//! size, are passed through without being buffered.

use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::infrastructure::cache::CacheStore;

/// Default lifetime of a cached page.
pub const DEFAULT_PAGE_TTL: Duration = Duration::from_secs(900);

/// Largest response body the page cache will buffer and store.
pub const MAX_PAGE_BYTES: usize = 1024 * 1024;

const KEY_PREFIX: &str = "page";

/// Page cache configuration shared with the middleware.
#[derive(Clone)]
pub struct PageCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

/// Serialized form of a cached response.
#[derive(Debug, Serialize, Deserialize)]
struct CachedPage {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl PageCache {
    /// Creates a page cache storing responses in `store` for `ttl`.
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Builds the cache key for a request, e.g. `page:GET:/properties?sort=asc`.
    pub fn key_for(method: &Method, uri: &axum::http::Uri) -> String {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}:{}:{}", KEY_PREFIX, method, path_and_query)
    }

    fn cache_control(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&format!("max-age={}", self.ttl.as_secs())).ok()
    }

    async fn lookup(&self, key: &str) -> Option<CachedPage> {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(page) => Some(page),
                Err(e) => {
                    warn!("Discarding undecodable cached page {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Page cache lookup failed for {}: {}", key, e);
                None
            }
        }
    }

    /// Returns whether the page was written to the store.
    async fn store(&self, key: &str, page: &CachedPage) -> bool {
        let payload = match serde_json::to_string(page) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode page {}: {}", key, e);
                return false;
            }
        };

        match self.store.set(key, &payload, self.ttl).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Page cache store failed for {}: {}", key, e);
                false
            }
        }
    }

    fn render(&self, page: CachedPage) -> Response {
        let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::OK);
        let mut response = (status, page.body).into_response();

        let headers = response.headers_mut();
        if let Some(content_type) = page
            .content_type
            .and_then(|ct| HeaderValue::from_str(&ct).ok())
        {
            headers.insert(header::CONTENT_TYPE, content_type);
        }
        if let Some(cache_control) = self.cache_control() {
            headers.insert(header::CACHE_CONTROL, cache_control);
        }

        response
    }
}

/// Serves cached pages and caches fresh `200 OK` responses.
///
/// # Integration
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/properties", get(listings_handler))
///     .route_layer(middleware::from_fn_with_state(page_cache, page_cache::layer));
/// ```
pub async fn layer(
    State(page_cache): State<PageCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return next.run(request).await;
    }

    let key = PageCache::key_for(request.method(), request.uri());

    if let Some(page) = page_cache.lookup(&key).await {
        debug!("Page cache HIT: {}", key);
        return page_cache.render(page);
    }
    debug!("Page cache MISS: {}", key);

    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let fits = response
        .body()
        .size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_PAGE_BYTES as u64);
    if !fits {
        debug!("Page too large to cache: {}", key);
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_PAGE_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to buffer response for {}: {}", key, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let stored = match std::str::from_utf8(&bytes) {
        Ok(text) => {
            let page = CachedPage {
                status: parts.status.as_u16(),
                content_type: parts
                    .headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: text.to_string(),
            };
            page_cache.store(&key, &page).await
        }
        Err(_) => false,
    };

    if stored && let Some(cache_control) = page_cache.cache_control() {
        parts.headers.insert(header::CACHE_CONTROL, cache_control);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{CacheError, MemoryCache, MockCacheStore};
    use axum::{Json, Router, middleware, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_app(page_cache: PageCache, calls: Arc<AtomicUsize>) -> Router {
        let ok_calls = calls.clone();
        let missing_calls = calls.clone();
        let binary_calls = calls.clone();
        let large_calls = calls.clone();
        let post_calls = calls;

        Router::new()
            .route(
                "/items",
                get(move || {
                    let calls = ok_calls.clone();
                    async move {
                        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                        Json(json!({ "call": n }))
                    }
                })
                .post(move || {
                    let calls = post_calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        StatusCode::CREATED
                    }
                }),
            )
            .route(
                "/missing",
                get(move || {
                    let calls = missing_calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        StatusCode::NOT_FOUND
                    }
                }),
            )
            .route(
                "/binary",
                get(move || {
                    let calls = binary_calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        vec![0xff_u8, 0xfe, 0xfd]
                    }
                }),
            )
            .route(
                "/large",
                get(move || {
                    let calls = large_calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        "x".repeat(MAX_PAGE_BYTES + 1)
                    }
                }),
            )
            .route_layer(middleware::from_fn_with_state(page_cache, layer))
    }

    fn memory_page_cache() -> PageCache {
        PageCache::new(Arc::new(MemoryCache::default()), DEFAULT_PAGE_TTL)
    }

    #[test]
    fn test_key_includes_method_path_and_query() {
        let uri: axum::http::Uri = "/properties?page=2".parse().unwrap();
        assert_eq!(
            PageCache::key_for(&Method::GET, &uri),
            "page:GET:/properties?page=2"
        );
    }

    #[tokio::test]
    async fn test_second_get_served_from_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = TestServer::new(counting_app(memory_page_cache(), calls.clone())).unwrap();

        let first = server.get("/items").await;
        let second = server.get("/items").await;

        first.assert_status_ok();
        second.assert_status_ok();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.json::<Value>()["call"], 1);
        assert_eq!(
            second.header(header::CONTENT_TYPE),
            HeaderValue::from_static("application/json")
        );
        assert_eq!(
            second.header(header::CACHE_CONTROL),
            HeaderValue::from_static("max-age=900")
        );
    }

    #[tokio::test]
    async fn test_query_string_is_part_of_identity() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = TestServer::new(counting_app(memory_page_cache(), calls.clone())).unwrap();

        server.get("/items").await;
        server.get("/items").add_query_param("v", "2").await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_get_requests_bypass_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = TestServer::new(counting_app(memory_page_cache(), calls.clone())).unwrap();

        server.post("/items").await;
        server.post("/items").await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_error_responses_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = TestServer::new(counting_app(memory_page_cache(), calls.clone())).unwrap();

        server.get("/missing").await.assert_status_not_found();
        server.get("/missing").await.assert_status_not_found();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_store_failure_falls_through() {
        let mut store = MockCacheStore::new();
        store
            .expect_get()
            .returning(|_| Err(CacheError::Connection("refused".to_string())));
        store
            .expect_set()
            .returning(|_, _, _| Err(CacheError::Connection("refused".to_string())));

        let calls = Arc::new(AtomicUsize::new(0));
        let page_cache = PageCache::new(Arc::new(store), DEFAULT_PAGE_TTL);
        let server = TestServer::new(counting_app(page_cache, calls.clone())).unwrap();

        server.get("/items").await.assert_status_ok();
        server.get("/items").await.assert_status_ok();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_utf8_body_not_cached_and_no_cache_control() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = TestServer::new(counting_app(memory_page_cache(), calls.clone())).unwrap();

        let first = server.get("/binary").await;
        server.get("/binary").await.assert_status_ok();

        first.assert_status_ok();
        assert_eq!(first.as_bytes().to_vec(), vec![0xff_u8, 0xfe, 0xfd]);
        assert!(!first.headers().contains_key(header::CACHE_CONTROL));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_oversized_body_passes_through_uncached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let server = TestServer::new(counting_app(memory_page_cache(), calls.clone())).unwrap();

        let first = server.get("/large").await;
        server.get("/large").await.assert_status_ok();

        first.assert_status_ok();
        assert_eq!(first.as_bytes().len(), MAX_PAGE_BYTES + 1);
        assert!(!first.headers().contains_key(header::CACHE_CONTROL));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_store_omits_cache_control() {
        let mut store = MockCacheStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _, _| Err(CacheError::Operation("full".to_string())));

        let calls = Arc::new(AtomicUsize::new(0));
        let page_cache = PageCache::new(Arc::new(store), DEFAULT_PAGE_TTL);
        let server = TestServer::new(counting_app(page_cache, calls)).unwrap();

        let response = server.get("/items").await;

        response.assert_status_ok();
        assert!(!response.headers().contains_key(header::CACHE_CONTROL));
    }
}
