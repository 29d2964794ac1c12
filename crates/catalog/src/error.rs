//! Error types for the catalog crate.
//!
//! Field-level problems inside a movie record never surface here: the
//! record decoder degrades malformed values to "missing". These errors
//! only cover getting the JSON document itself.

use thiserror::Error;

/// Errors that can occur while loading a collection or a single movie
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is not valid JSON, or has the wrong top-level shape
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A wrapper object was given without the field that carries the payload
    ///
    /// e.g. `{"movies": [...]}` where `{"collection": [...]}` was expected
    #[error("Missing \"{field}\" in {source_name}")]
    MissingField { field: String, source_name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
