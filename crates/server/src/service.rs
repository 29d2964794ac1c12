//! # Taste Service
//!
//! Async facade over a shared `TasteEngine`:
//! 1. `build_profile` fits a profile under the write lock
//! 2. `score_movie` and `rank_candidates` score under a read lock
//! 3. `recommend` rebuilds and reads suggestions back in one exclusive step
//! 4. `health` reports liveness and whether a profile is fitted
//!
//! ## Locking
//!
//! The engine lives behind `Arc<tokio::sync::RwLock<_>>`. Fitting and
//! scoring are CPU work, so each call takes an owned guard and moves it
//! into `spawn_blocking`; the lock is held until the blocking task ends.
//! A reader therefore sees either the old profile or the new one, never
//! a half-built state.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use catalog::MovieRecord;
use engine::{EngineConfig, ProfileResult, ScoredMovie, Suggestion, TasteEngine, TopTrait};

/// Name reported by the health check
pub const ENGINE_NAME: &str = "tfidf-cosine";

/// Response of the composite recommend call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub suggestions: Vec<Suggestion>,
    /// Names of the strongest profile traits, for display
    pub top_traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub engine: String,
    pub version: String,
    pub fitted: bool,
}

/// Cloneable handle to one shared engine
#[derive(Clone)]
pub struct TasteService {
    engine: Arc<RwLock<TasteEngine>>,
}

impl TasteService {
    pub fn new() -> Self {
        Self::from_engine(TasteEngine::new())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::from_engine(TasteEngine::with_config(config))
    }

    /// Wrap an already configured engine
    pub fn from_engine(engine: TasteEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    /// Fit a new profile from `collection`, replacing the current one
    #[instrument(skip_all, fields(collection_size = collection.len()))]
    pub async fn build_profile(&self, collection: Vec<MovieRecord>) -> Result<ProfileResult> {
        let start = Instant::now();
        let mut guard = self.engine.clone().write_owned().await;

        let result = tokio::task::spawn_blocking(move || guard.build_profile(&collection))
            .await
            .context("Profile build task panicked")?;

        info!(
            "Profile build finished in {:.2?} (success: {})",
            start.elapsed(),
            result.success
        );
        Ok(result)
    }

    /// Match score of one movie, 0-100
    pub async fn score_movie(&self, movie: MovieRecord) -> Result<u8> {
        let guard = self.engine.clone().read_owned().await;

        let score = tokio::task::spawn_blocking(move || guard.score_movie(&movie))
            .await
            .context("Scoring task panicked")?;

        debug!("Scored movie: {}", score);
        Ok(score)
    }

    /// Score a batch and return the best `limit`, highest first
    #[instrument(skip_all, fields(candidates = candidates.len(), limit))]
    pub async fn rank_candidates(
        &self,
        candidates: Vec<MovieRecord>,
        limit: usize,
    ) -> Result<Vec<ScoredMovie>> {
        let guard = self.engine.clone().read_owned().await;

        tokio::task::spawn_blocking(move || guard.rank_candidates(&candidates, limit))
            .await
            .context("Ranking task panicked")
    }

    /// Rebuild the profile from `collection` and return suggestions with
    /// the display traits, all under one write lock.
    #[instrument(skip_all, fields(collection_size = collection.len()))]
    pub async fn recommend(&self, collection: Vec<MovieRecord>) -> Result<RecommendResponse> {
        let mut guard = self.engine.clone().write_owned().await;

        let response = tokio::task::spawn_blocking(move || {
            let engine = &mut *guard;
            engine.build_profile(&collection);
            let suggestions = engine.get_recommendations(&collection);
            RecommendResponse {
                success: true,
                suggestions,
                top_traits: engine.top_trait_names(),
            }
        })
        .await
        .context("Recommend task panicked")?;

        info!(
            "Recommend produced {} suggestions, {} display traits",
            response.suggestions.len(),
            response.top_traits.len()
        );
        Ok(response)
    }

    /// Current top traits; empty when no profile is fitted
    pub async fn top_traits(&self, limit: usize) -> Vec<TopTrait> {
        self.engine.read().await.top_traits(limit)
    }

    pub async fn is_fitted(&self) -> bool {
        self.engine.read().await.is_fitted()
    }

    pub async fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            engine: ENGINE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            fitted: self.is_fitted().await,
        }
    }
}

impl Default for TasteService {
    fn default() -> Self {
        Self::new()
    }
}
