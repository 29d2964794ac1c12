//! # Catalog Crate
//!
//! The data model for a user's movie collection and the loaders that
//! read collections from JSON.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and its lenient field decoding
//! - **parser**: Load collections and single movies from files or strings
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_collection;
//! use std::path::Path;
//!
//! let collection = load_collection(Path::new("data/collection.json"))?;
//! for movie in &collection {
//!     println!("{} rated {:?}", movie, movie.user_rating());
//! }
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use parser::{load_collection, load_movie, parse_collection, parse_movie};
pub use types::MovieRecord;
