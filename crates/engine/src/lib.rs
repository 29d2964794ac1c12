//! # Engine Crate
//!
//! Content-based taste profiling for a personal movie collection.
//!
//! ## Components
//!
//! ### Profile Builder
//! Fits a TF-IDF space over the collection's feature strings and averages
//! the rating-weighted rows into a single profile vector.
//!
//! ### Scorer
//! Cosine similarity between the profile and a candidate's vector, as an
//! integer percentage.
//!
//! ### Recommendation Ranker
//! Reads the strongest profile dimensions back out as genre, director and
//! actor suggestions.
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::TasteEngine;
//!
//! let mut engine = TasteEngine::new();
//! let result = engine.build_profile(&collection);
//! if result.success {
//!     let score = engine.score_movie(&candidate);
//!     let suggestions = engine.get_recommendations(&collection);
//! }
//! ```
//!
//! ## Concurrency
//!
//! `TasteEngine` does no locking of its own. Callers that share one engine
//! between threads must give `build_profile` exclusive access; scoring may
//! run concurrently with other reads.

pub mod config;
pub mod engine;
pub mod profile;
pub mod ranker;
pub mod types;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::TasteEngine;
pub use profile::{TasteProfile, rating_weight};
pub use types::{ProfileResult, ScoredMovie, Suggestion, SuggestionKind, TopTrait};
