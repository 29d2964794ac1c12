//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors that can occur while fitting the vector space
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// Too few documents to fit a meaningful vocabulary
    #[error("Need at least {required} documents to fit, got {found}")]
    TooFewDocuments { found: usize, required: usize },

    /// No document produced a single term
    #[error("Empty vocabulary: documents contain no terms")]
    EmptyVocabulary,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, VectorizeError>;
