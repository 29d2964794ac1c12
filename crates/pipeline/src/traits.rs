//! Core traits for the feature pipeline.
//!
//! This module defines the FeatureExtractor trait: the seam between raw
//! movie metadata and the vector space built on top of it.

use crate::features::FeatureString;
use catalog::MovieRecord;
use rayon::prelude::*;

/// Maps a movie record to its weighted token representation.
///
/// ## Design Note
/// - Extraction is pure and infallible: malformed fields are skipped,
///   never reported
/// - `Send + Sync` lets a whole collection be extracted in parallel
pub trait FeatureExtractor: Send + Sync {
    /// Returns the name of this extractor (for logging/debugging)
    fn name(&self) -> &str;

    /// Build the feature string for a single movie.
    fn extract(&self, movie: &MovieRecord) -> FeatureString;

    /// Build feature strings for a whole collection, preserving order.
    fn extract_all(&self, movies: &[MovieRecord]) -> Vec<FeatureString> {
        movies.par_iter().map(|movie| self.extract(movie)).collect()
    }
}
