// API Server Binary Entry Point
//
// Purpose: Start the Axum size recommendation server
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use size_recommender_rust::api_server::CacheConfig;
use size_recommender_rust::{create_router, AppState, BrandProfileTable, RecommenderConfig, SizeRecommender};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a numeric env var, falling back to the default when unset
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}='{}': {}", name, raw, e)),
        Err(_) => Ok(default),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "size_recommender_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting size recommendation server...");

    // Configuration from environment variables
    let port: u16 = env_or("PORT", 3000)?;
    let recommender_config = RecommenderConfig {
        max_chart_sizes: env_or("MAX_CHART_SIZES", RecommenderConfig::default().max_chart_sizes)?,
    };
    let defaults = CacheConfig::default();
    let cache_config = CacheConfig {
        max_entries: env_or("CACHE_MAX_ENTRIES", defaults.max_entries)?,
        ttl_secs: env_or("CACHE_TTL_SECS", defaults.ttl_secs)?,
    };
    let brand_profiles_path = std::env::var("BRAND_PROFILES_PATH").ok().map(PathBuf::from);

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", port);
    tracing::info!("  MAX_CHART_SIZES: {}", recommender_config.max_chart_sizes);
    tracing::info!("  CACHE_MAX_ENTRIES: {}", cache_config.max_entries);
    tracing::info!("  CACHE_TTL_SECS: {}", cache_config.ttl_secs);

    let mut recommender = SizeRecommender::new().with_config(recommender_config);
    match &brand_profiles_path {
        Some(path) => {
            tracing::info!("  BRAND_PROFILES_PATH: {}", path.display());
            let brands = BrandProfileTable::load(path)?;
            tracing::info!("Loaded {} brand profiles", brands.len());
            recommender = recommender.with_brand_profiles(Arc::new(brands));
        }
        None => tracing::info!("No BRAND_PROFILES_PATH set, brand adjustments disabled"),
    }
    let state = AppState::new(recommender, &cache_config);

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
