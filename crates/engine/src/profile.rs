//! Taste profile: the ratings-weighted centroid of a collection.
//!
//! ## Algorithm
//! 1. Extract a feature string per movie
//! 2. Fit the TF-IDF space over the collection
//! 3. Scale each movie's row by its rating weight
//! 4. Profile vector = per-dimension mean of the scaled rows
//!
//! The mean divides by the number of movies, not by the sum of weights,
//! so a collection of loved movies has a longer profile vector than the
//! same collection rated lukewarm. Cosine scoring is unaffected by that
//! length; trait weights and suggestion confidences are.

use crate::types::TopTrait;
use catalog::MovieRecord;
use pipeline::{FeatureExtractor, TfidfModel, TokenPattern, Vocabulary, cosine_similarity};
use tracing::debug;

/// Influence of a movie on the profile, from its user rating
///
/// - rated 4 or more: 1.5
/// - rated 3 up to 4: 1.0
/// - rated below 3:   0.7
/// - unrated:         1.0
pub fn rating_weight(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r >= 4.0 => 1.5,
        Some(r) if r >= 3.0 => 1.0,
        Some(_) => 0.7,
        None => 1.0,
    }
}

/// A fitted vector space plus the profile vector living in it.
///
/// `vector.len() == model.vocabulary().len()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct TasteProfile {
    model: TfidfModel,
    vector: Vec<f64>,
}

impl TasteProfile {
    /// Fit a profile over a collection
    pub fn build(
        collection: &[MovieRecord],
        extractor: &dyn FeatureExtractor,
        pattern: TokenPattern,
    ) -> pipeline::Result<Self> {
        let features = extractor.extract_all(collection);
        let (model, matrix) = TfidfModel::fit(features.as_slice(), pattern)?;

        let weights: Vec<f64> = collection
            .iter()
            .map(|movie| rating_weight(movie.user_rating()))
            .collect();

        let vector = weighted_mean(&matrix, &weights, model.vocabulary().len());
        debug!(
            "Built profile vector over {} dimensions from {} movies ({})",
            vector.len(),
            collection.len(),
            extractor.name()
        );

        Ok(Self { model, vector })
    }

    /// Profile dimensions by weight, strongest first, positive weights only.
    ///
    /// Equal weights keep vocabulary order.
    pub fn ranked_dimensions(&self, limit: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.vector.iter().copied().enumerate().collect();
        // Stable sort: ties stay in ascending index order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(limit);
        ranked.retain(|&(_, weight)| weight > 0.0);
        ranked
    }

    /// Top traits with weights rounded to 3 decimals
    pub fn top_traits(&self, limit: usize) -> Vec<TopTrait> {
        self.ranked_dimensions(limit)
            .into_iter()
            .filter_map(|(i, weight)| {
                Some(TopTrait {
                    feature: self.vocabulary().term(i)?.to_string(),
                    weight: round_to_thousandths(weight),
                })
            })
            .collect()
    }

    /// Top trait names only
    pub fn trait_names(&self, limit: usize) -> Vec<String> {
        self.ranked_dimensions(limit)
            .into_iter()
            .filter_map(|(i, _)| self.vocabulary().term(i).map(str::to_string))
            .collect()
    }

    /// Cosine similarity between the profile and a feature string
    pub fn similarity(&self, document: &str) -> f64 {
        let candidate = self.model.transform(document);
        cosine_similarity(&self.vector, &candidate)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.model.vocabulary()
    }

    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    /// Weight of a vocabulary term in the profile, if the term is known
    pub fn weight_of(&self, term: &str) -> Option<f64> {
        self.vocabulary()
            .index_of(term)
            .and_then(|i| self.vector.get(i).copied())
    }
}

/// Per-dimension mean of `weights[i] * rows[i]`, divided by the row count
fn weighted_mean(rows: &[Vec<f64>], weights: &[f64], dimensions: usize) -> Vec<f64> {
    let mut mean = vec![0.0; dimensions];
    if rows.is_empty() {
        return mean;
    }
    for (row, weight) in rows.iter().zip(weights) {
        for (acc, value) in mean.iter_mut().zip(row) {
            *acc += value * weight;
        }
    }
    let count = rows.len() as f64;
    for acc in mean.iter_mut() {
        *acc /= count;
    }
    mean
}

/// Three decimals, ties to even like the confidence percentages
fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}
