//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheStore, MemoryCache, RedisCache};
use crate::infrastructure::persistence::PgListingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Builds the cache store shared by the listing and page caches.
///
/// Uses Redis when configured and reachable, otherwise an in-process
/// [`MemoryCache`].
pub async fn build_cache(config: &Config) -> Arc<dyn CacheStore> {
    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using MemoryCache.", e);
                Arc::new(MemoryCache::new(config.memory_cache_max_entries))
            }
        }
    } else {
        tracing::info!("Cache enabled (MemoryCache)");
        Arc::new(MemoryCache::new(config.memory_cache_max_entries))
    }
}

/// Builds [`AppState`] from a database pool and cache store.
pub fn build_state(config: &Config, pool: PgPool, cache: Arc<dyn CacheStore>) -> AppState {
    let repository = Arc::new(PgListingRepository::new(Arc::new(pool)));

    AppState::new(
        repository,
        cache,
        config.listings_cache_ttl(),
        config.page_cache_ttl(),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or MemoryCache fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let cache = build_cache(&config).await;
    let state = build_state(&config, pool, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
