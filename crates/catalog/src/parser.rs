//! Parser for movie collection documents.
//!
//! Two shapes are accepted for a collection:
//! - a bare JSON array of movie objects
//! - an object wrapping the array: `{"collection": [...]}`
//!
//! and likewise for a single movie: a bare object, or `{"movie": {...}}`.
//! The wrapped shapes are what the web front end posts, so exported
//! request bodies can be fed straight back in.

use crate::error::{CatalogError, Result};
use crate::types::MovieRecord;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Wrapper key for a collection document
const COLLECTION_FIELD: &str = "collection";

/// Wrapper key for a single-movie document
const MOVIE_FIELD: &str = "movie";

/// Load a collection from a JSON file
pub fn load_collection(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = read_document(path)?;
    let movies = parse_collection(&content, &path.display().to_string())?;
    debug!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Load a single movie from a JSON file
pub fn load_movie(path: &Path) -> Result<MovieRecord> {
    let content = read_document(path)?;
    parse_movie(&content, &path.display().to_string())
}

/// Parse a collection document
///
/// `source_name` is only used in error messages.
pub fn parse_collection(json: &str, source_name: &str) -> Result<Vec<MovieRecord>> {
    let document = parse_json(json, source_name)?;

    let list = match document {
        Value::Array(_) => document,
        Value::Object(mut map) => {
            map.remove(COLLECTION_FIELD)
                .ok_or_else(|| CatalogError::MissingField {
                    field: COLLECTION_FIELD.to_string(),
                    source_name: source_name.to_string(),
                })?
        }
        other => {
            return Err(CatalogError::ParseError {
                source_name: source_name.to_string(),
                reason: format!("expected an array or an object, found {}", kind_of(&other)),
            });
        }
    };

    serde_json::from_value(list).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: format!("Invalid collection: {}", e),
    })
}

/// Parse a single-movie document
pub fn parse_movie(json: &str, source_name: &str) -> Result<MovieRecord> {
    let document = parse_json(json, source_name)?;

    let mut map = match document {
        Value::Object(map) => map,
        other => {
            return Err(CatalogError::ParseError {
                source_name: source_name.to_string(),
                reason: format!("expected an object, found {}", kind_of(&other)),
            });
        }
    };

    // `{"movie": {...}}` unwraps; anything else is the movie itself
    let movie = match map.remove(MOVIE_FIELD) {
        Some(inner @ Value::Object(_)) => inner,
        Some(other) => {
            map.insert(MOVIE_FIELD.to_string(), other);
            Value::Object(map)
        }
        None => Value::Object(map),
    };

    serde_json::from_value(movie).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: format!("Invalid movie: {}", e),
    })
}

fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn parse_json(json: &str, source_name: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"title": "A", "genre": "Drama"}, {"title": "B"}]"#;
        let movies = parse_collection(json, "inline").unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].genre, "Drama");
        assert_eq!(movies[1].title, "B");
    }

    #[test]
    fn test_parse_wrapped_collection() {
        let json = r#"{"collection": [{"title": "A", "rating": 4}]}"#;
        let movies = parse_collection(json, "inline").unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].rating, Some(4.0));
    }

    #[test]
    fn test_missing_collection_field() {
        let err = parse_collection(r#"{"movies": []}"#, "body.json").unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { ref field, .. } if field == "collection"));
        assert_eq!(err.to_string(), "Missing \"collection\" in body.json");
    }

    #[test]
    fn test_collection_wrong_shape() {
        let err = parse_collection("42", "inline").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_collection("[{", "inline").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_parse_movie_bare_and_wrapped() {
        let bare = parse_movie(r#"{"title": "Heat", "year": 1995}"#, "inline").unwrap();
        assert_eq!(bare.title, "Heat");
        assert_eq!(bare.year.as_deref(), Some("1995"));

        let wrapped = parse_movie(r#"{"movie": {"title": "Heat"}}"#, "inline").unwrap();
        assert_eq!(wrapped.title, "Heat");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_collection(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_collection_from_file() {
        let path = std::env::temp_dir().join(format!("catalog-test-{}.json", std::process::id()));
        fs::write(&path, r#"[{"title": "A"}, {"title": "B"}, {"title": "C"}]"#).unwrap();

        let movies = load_collection(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(movies.len(), 3);
    }
}
