//! Feature pipeline: movie metadata -> weighted tokens -> TF-IDF vectors.
//!
//! This crate provides:
//! - FeatureExtractor trait and the standard MetadataExtractor
//! - TokenPattern for splitting feature strings into terms
//! - TfidfModel for fitting a vocabulary and vectorizing documents
//! - Cosine similarity and L2 helpers
//!
//! ## Architecture
//! The pipeline processes a collection in stages:
//! 1. The extractor turns each movie into a feature string
//! 2. TfidfModel fits a vocabulary over the batch and yields one row per movie
//! 3. Later candidates are transformed into the same space and compared
//!    by cosine similarity
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FeatureExtractor, MetadataExtractor, TfidfModel, TokenPattern};
//!
//! let features = MetadataExtractor.extract_all(&collection);
//! let (model, matrix) = TfidfModel::fit(&features, TokenPattern::default())?;
//!
//! let candidate = model.transform(MetadataExtractor.extract(&movie).as_str());
//! ```

pub mod error;
pub mod features;
pub mod similarity;
pub mod tfidf;
pub mod tokenizer;
pub mod traits;

// Re-export main types
pub use error::{Result, VectorizeError};
pub use features::{FeatureString, MetadataExtractor, RatingBucket};
pub use similarity::{cosine_similarity, l2_norm};
pub use tfidf::{TfidfModel, Vocabulary, MIN_DOCUMENTS};
pub use tokenizer::TokenPattern;
pub use traits::FeatureExtractor;
