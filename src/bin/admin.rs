//! CLI administration tool for property-listings.
//!
//! Checks a deployment end to end and inspects the cache without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Verify model, cache round trip, listing reads and metrics
//! cargo run --bin admin -- verify
//!
//! # Print cache hit/miss metrics
//! cargo run --bin admin -- metrics
//!
//! # Drop the cached listing collection
//! cargo run --bin admin -- cache clear
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`property_listings::config`].

use property_listings::application::services::{ListingService, MetricsService};
use property_listings::config::{self, Config};
use property_listings::domain::entities::Listing;
use property_listings::infrastructure::cache::{CacheResult, CacheStore};
use property_listings::server;
use property_listings::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use std::time::Duration;

const PROBE_KEY: &str = "test_key";
const PROBE_VALUE: &str = "test_value";

/// CLI tool for managing property-listings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Verify that the database, cache and services are wired correctly
    Verify,

    /// Show cache hit/miss metrics
    Metrics,

    /// Cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Remove the cached listing collection
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let cache = server::build_cache(&config).await;

    match cli.command {
        Commands::Verify => verify(&config, cache).await?,
        Commands::Metrics => {
            let metrics = MetricsService::new(cache).get_cache_metrics().await;
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        Commands::Cache {
            action: CacheAction::Clear,
        } => {
            let state = connect_state(&config, cache).await?;
            clear_cache(&state.listing_service).await?;
        }
    }

    Ok(())
}

async fn connect_state(config: &Config, cache: Arc<dyn CacheStore>) -> Result<AppState> {
    let pool = server::connect_database(config).await?;
    Ok(server::build_state(config, pool, cache))
}

/// Runs every setup check, reporting each as ✓ or ✗ without stopping early.
async fn verify(config: &Config, cache: Arc<dyn CacheStore>) -> Result<()> {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("{}", "Property Listings - Setup Verification".bright_blue().bold());
    println!("{}", rule);

    println!();
    println!("{}", "✓ Listing model available".green());
    println!("  Model fields: {:?}", Listing::FIELDS);

    check_cache_round_trip(cache.as_ref()).await;

    match connect_state(config, cache.clone()).await {
        Ok(state) => match state.listing_service.get_all_listings().await {
            Ok(listings) => println!(
                "{}",
                format!(
                    "✓ get_all_listings() working (found {} listings)",
                    listings.len()
                )
                .green()
            ),
            Err(e) => println!("{}", format!("✗ get_all_listings() error: {}", e).red()),
        },
        Err(e) => println!("{}", format!("✗ Database connection error: {:#}", e).red()),
    }

    let metrics = MetricsService::new(cache).get_cache_metrics().await;
    match &metrics.error {
        None => println!("{}", "✓ get_cache_metrics() working".green()),
        Some(e) => println!("{}", format!("✗ get_cache_metrics() error: {}", e).red()),
    }
    println!("  Cache hits: {}", metrics.keyspace_hits);
    println!("  Cache misses: {}", metrics.keyspace_misses);

    println!();
    println!("{}", rule);
    println!("{}", "Verification complete!".bold());
    println!("{}", rule);

    Ok(())
}

async fn check_cache_round_trip(cache: &dyn CacheStore) {
    let result: CacheResult<Option<String>> = async {
        cache
            .set(PROBE_KEY, PROBE_VALUE, Duration::from_secs(10))
            .await?;
        cache.get(PROBE_KEY).await
    }
    .await;

    match result {
        Ok(Some(value)) if value == PROBE_VALUE => {
            println!("{}", "✓ Cache connection working".green())
        }
        Ok(_) => println!("{}", "✗ Cache connection issue".red()),
        Err(e) => println!("{}", format!("✗ Cache connection error: {}", e).red()),
    }
}

async fn clear_cache(service: &ListingService) -> Result<()> {
    if service.invalidate().await? {
        println!("{}", "✓ Cached listings removed".green());
    } else {
        println!("{}", "Cached listings were not present".yellow());
    }
    Ok(())
}
