//! Core domain types for a user's movie collection.
//!
//! Records arrive from outside the system (a browser library, a JSON
//! export, a request body) and are frequently incomplete: `"N/A"` genres,
//! ratings that are strings, years that are numbers. The decoder here
//! never rejects a record for a bad field; it maps the value to "missing"
//! and lets the feature extractor skip it.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// MovieRecord
// =============================================================================

/// One movie in a collection, or a candidate to be scored.
///
/// Text fields hold the raw comma-separated lists exactly as supplied;
/// normalization happens during feature extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Display title. Not used as a feature.
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    /// Comma-separated genres, e.g. `"Action, Sci-Fi"`. May be `"N/A"`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub genre: String,

    /// Comma-separated directors. May be `"N/A"` or `"Unknown"`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub director: String,

    /// Comma-separated cast list, billing order.
    #[serde(default, deserialize_with = "lenient::text")]
    pub actors: String,

    /// Release year as text. JSON numbers are stored the way JSON prints
    /// them (`2008` -> `"2008"`, `2008.0` -> `"2008.0"`).
    #[serde(
        default,
        deserialize_with = "lenient::year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,

    /// User rating. `None` when absent or not a JSON number.
    #[serde(
        default,
        deserialize_with = "lenient::rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,

    /// Optional free-text mood tag
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub mood: Option<String>,
}

impl MovieRecord {
    /// Create a record with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    pub fn with_actors(mut self, actors: impl Into<String>) -> Self {
        self.actors = actors.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// The rating, if the user actually rated this movie.
    ///
    /// Zero, negative and non-finite values all mean "no rating".
    pub fn user_rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite() && *r > 0.0)
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            "<untitled>"
        } else {
            self.title.as_str()
        };
        match self.year.as_deref() {
            Some(year) if !year.is_empty() => write!(f, "{} ({})", title, year),
            _ => write!(f, "{}", title),
        }
    }
}

// =============================================================================
// Lenient field decoding
// =============================================================================

/// Field decoders that map unexpected JSON types to "missing"
/// instead of failing the whole record.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            _ => String::new(),
        })
    }

    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_decodes() {
        let json = r#"{
            "title": "Iron Man",
            "genre": "Action, Sci-Fi",
            "director": "Jon Favreau",
            "actors": "Robert Downey Jr., Gwyneth Paltrow",
            "year": "2008",
            "rating": 5,
            "mood": "Hype"
        }"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(movie.title, "Iron Man");
        assert_eq!(movie.genre, "Action, Sci-Fi");
        assert_eq!(movie.year.as_deref(), Some("2008"));
        assert_eq!(movie.rating, Some(5.0));
        assert_eq!(movie.mood.as_deref(), Some("Hype"));
    }

    #[test]
    fn test_missing_fields_default() {
        let movie: MovieRecord = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();

        assert_eq!(movie.genre, "");
        assert_eq!(movie.director, "");
        assert_eq!(movie.actors, "");
        assert!(movie.year.is_none());
        assert!(movie.rating.is_none());
        assert!(movie.mood.is_none());
    }

    #[test]
    fn test_numeric_year_is_stringified() {
        let movie: MovieRecord = serde_json::from_str(r#"{"year": 1999}"#).unwrap();
        assert_eq!(movie.year.as_deref(), Some("1999"));

        let movie: MovieRecord = serde_json::from_str(r#"{"year": 2008.0}"#).unwrap();
        assert_eq!(movie.year.as_deref(), Some("2008.0"));
    }

    #[test]
    fn test_malformed_fields_become_missing() {
        let json = r#"{
            "genre": ["Action"],
            "director": null,
            "actors": 42,
            "year": true,
            "rating": "five",
            "mood": {"x": 1}
        }"#;
        let movie: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(movie.genre, "");
        assert_eq!(movie.director, "");
        assert_eq!(movie.actors, "");
        assert!(movie.year.is_none());
        assert!(movie.rating.is_none());
        assert!(movie.mood.is_none());
    }

    #[test]
    fn test_user_rating_ignores_zero_and_negative() {
        assert_eq!(MovieRecord::new("a").with_rating(4.5).user_rating(), Some(4.5));
        assert_eq!(MovieRecord::new("b").with_rating(0.0).user_rating(), None);
        assert_eq!(MovieRecord::new("c").with_rating(-1.0).user_rating(), None);
        assert_eq!(MovieRecord::new("d").user_rating(), None);
    }

    #[test]
    fn test_display() {
        let movie = MovieRecord::new("Heat").with_year("1995");
        assert_eq!(movie.to_string(), "Heat (1995)");
        assert_eq!(MovieRecord::default().to_string(), "<untitled>");
    }
}
