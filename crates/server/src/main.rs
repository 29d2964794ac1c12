//! Simple test harness for the taste service.
//!
//! Loads a collection, builds a profile, and logs the traits and
//! suggestions it produces. The collection path comes from
//! `TASTE_COLLECTION` (default `data/collection.json`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::TasteService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,engine=debug,pipeline=debug")),
        )
        .init();

    info!("Starting taste service test harness");

    let path = std::env::var("TASTE_COLLECTION")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/collection.json"));

    info!("Loading collection from {}", path.display());
    let collection = catalog::load_collection(&path)
        .with_context(|| format!("Failed to load collection from {}", path.display()))?;
    info!("Loaded {} movies", collection.len());

    let service = TasteService::new();

    let result = service.build_profile(collection.clone()).await?;
    info!("{}", result.message);
    for (i, t) in result.top_traits.iter().enumerate() {
        info!("{}. {} ({:.3})", i + 1, t.feature, t.weight);
    }

    let response = service.recommend(collection).await?;
    info!("Received {} suggestions:", response.suggestions.len());
    for s in &response.suggestions {
        info!("  [{}] {} ({}%)", s.kind, s.message, s.confidence);
    }
    info!("Display traits: {}", response.top_traits.join(", "));

    let health = service.health().await;
    info!("Health: {} ({} v{}, fitted: {})", health.status, health.engine, health.version, health.fitted);

    Ok(())
}
