//! # Taste Engine
//!
//! Owns the fitted vector space and profile vector, and exposes the three
//! operations callers use:
//! 1. `build_profile` fits a fresh profile from a collection
//! 2. `score_movie` rates a candidate 0-100 against the profile
//! 3. `get_recommendations` derives search suggestions
//!
//! The engine is a plain value: whoever owns it decides how it is shared.
//! `build_profile` and `get_recommendations` take `&mut self` because they
//! replace the profile; scoring only reads.

use crate::config::EngineConfig;
use crate::profile::TasteProfile;
use crate::ranker::{percent, suggest};
use crate::types::{ProfileResult, ScoredMovie, Suggestion, TopTrait};
use catalog::MovieRecord;
use pipeline::{FeatureExtractor, FeatureString, MIN_DOCUMENTS, MetadataExtractor};
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

pub struct TasteEngine {
    config: EngineConfig,
    extractor: Box<dyn FeatureExtractor>,
    /// `Some` exactly when a profile has been built successfully
    profile: Option<TasteProfile>,
}

impl TasteEngine {
    /// Create an unfitted engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            extractor: Box::new(MetadataExtractor),
            profile: None,
        }
    }

    /// Swap in a different feature extractor (default: `MetadataExtractor`)
    pub fn with_extractor(mut self, extractor: impl FeatureExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self.profile = None;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether scoring and recommending have a profile to work with
    pub fn is_fitted(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&TasteProfile> {
        self.profile.as_ref()
    }

    /// Feature string for a movie, as the engine sees it
    pub fn extract(&self, movie: &MovieRecord) -> FeatureString {
        self.extractor.extract(movie)
    }

    /// Drop the current profile
    pub fn reset(&mut self) {
        self.profile = None;
    }

    /// Build a taste profile from a collection, replacing any previous one.
    ///
    /// The previous profile is discarded even when this build fails.
    #[instrument(skip_all, fields(collection_size = collection.len()))]
    pub fn build_profile(&mut self, collection: &[MovieRecord]) -> ProfileResult {
        self.profile = None;

        let required = self.config.min_collection_size.max(MIN_DOCUMENTS);
        if collection.len() < required {
            debug!(
                "Collection too small for a profile: {} < {}",
                collection.len(),
                required
            );
            return ProfileResult::failed(format!(
                "Need at least {} movies for recommendations",
                required
            ));
        }

        let profile = match TasteProfile::build(
            collection,
            self.extractor.as_ref(),
            self.config.token_pattern,
        ) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Profile build failed: {}", e);
                return ProfileResult::failed(e.to_string());
            }
        };

        let top_traits = profile.top_traits(self.config.top_traits);
        let total_features = profile.vocabulary().len();
        info!(
            "Profile built from {} movies ({} features, top trait: {})",
            collection.len(),
            total_features,
            top_traits
                .first()
                .map(|t| t.feature.as_str())
                .unwrap_or("none")
        );

        self.profile = Some(profile);
        ProfileResult::built(collection.len(), top_traits, total_features)
    }

    /// Match score of a candidate against the profile, 0-100.
    ///
    /// An unfitted engine scores everything 0.
    pub fn score_movie(&self, movie: &MovieRecord) -> u8 {
        let Some(profile) = &self.profile else {
            debug!("Scoring without a profile, returning 0");
            return 0;
        };
        let features = self.extractor.extract(movie);
        percent(profile.similarity(features.as_str()))
    }

    /// Search suggestions from the profile's strongest dimensions.
    ///
    /// If no profile is fitted yet, one is built from `collection` first;
    /// an existing profile is used as is. Returns an empty list when no
    /// profile can be built.
    #[instrument(skip_all, fields(collection_size = collection.len()))]
    pub fn get_recommendations(&mut self, collection: &[MovieRecord]) -> Vec<Suggestion> {
        if !self.is_fitted() {
            self.build_profile(collection);
        }
        match &self.profile {
            Some(profile) => suggest(profile, &self.config),
            None => Vec::new(),
        }
    }

    /// Top traits with rounded weights; empty when unfitted
    pub fn top_traits(&self, limit: usize) -> Vec<TopTrait> {
        self.profile
            .as_ref()
            .map(|p| p.top_traits(limit))
            .unwrap_or_default()
    }

    /// Names of the `display_traits` strongest traits; empty when unfitted
    pub fn top_trait_names(&self) -> Vec<String> {
        self.profile
            .as_ref()
            .map(|p| p.trait_names(self.config.display_traits))
            .unwrap_or_default()
    }

    /// Score a batch of candidates and return the best `limit`, highest first.
    ///
    /// Candidates with equal scores keep their input order.
    pub fn rank_candidates(&self, candidates: &[MovieRecord], limit: usize) -> Vec<ScoredMovie> {
        let mut scored: Vec<ScoredMovie> = candidates
            .par_iter()
            .map(|movie| ScoredMovie {
                title: movie.title.clone(),
                score: self.score_movie(movie),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored
    }
}

impl Default for TasteEngine {
    fn default() -> Self {
        Self::new()
    }
}
