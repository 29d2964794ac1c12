//! Feature extraction from movie metadata.
//!
//! Each movie becomes a space-joined string of prefixed tokens. Weight is
//! expressed by repetition because the downstream TF-IDF weighting is
//! count based:
//!
//! | field    | token                 | repeats              |
//! |----------|-----------------------|----------------------|
//! | genre    | `genre_<value>`       | 3 per entry          |
//! | director | `director_<value>`    | 2 per entry          |
//! | actors   | `actor_<value>`       | 1, first 3 only      |
//! | year     | `decade_<decade>s`    | 1                    |
//! | rating   | `rating_<bucket>`     | 1, only when rated   |
//! | mood     | `mood_<value>`        | 1                    |
//!
//! A movie that yields nothing is the single token `unknown`.

use crate::traits::FeatureExtractor;
use catalog::MovieRecord;
use std::fmt;

pub const GENRE_PREFIX: &str = "genre_";
pub const DIRECTOR_PREFIX: &str = "director_";
pub const ACTOR_PREFIX: &str = "actor_";
pub const DECADE_PREFIX: &str = "decade_";
pub const RATING_PREFIX: &str = "rating_";
pub const MOOD_PREFIX: &str = "mood_";

/// Emitted when no field produced a token
pub const UNKNOWN_TOKEN: &str = "unknown";

const GENRE_REPEAT: usize = 3;
const DIRECTOR_REPEAT: usize = 2;
const MAX_ACTORS: usize = 3;

/// Placeholder values that mean "field not available"
const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN_DIRECTOR: &str = "Unknown";

// =============================================================================
// FeatureString
// =============================================================================

/// Whitespace-joined token representation of one movie. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureString(String);

impl FeatureString {
    /// Join tokens with single spaces, falling back to `unknown`
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        if tokens.is_empty() {
            Self(UNKNOWN_TOKEN.to_string())
        } else {
            Self(tokens.join(" "))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tokens in emission order, repeats included
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// How many times `token` occurs
    pub fn count(&self, token: &str) -> usize {
        self.tokens().filter(|t| *t == token).count()
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_TOKEN
    }
}

impl fmt::Display for FeatureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FeatureString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Rating buckets
// =============================================================================

/// Coarse bucket for a user rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBucket {
    High,
    Mid,
    Low,
}

impl RatingBucket {
    /// `High` at 4 and above, `Mid` at 2.5 and above, `Low` otherwise
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            RatingBucket::High
        } else if rating >= 2.5 {
            RatingBucket::Mid
        } else {
            RatingBucket::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingBucket::High => "high",
            RatingBucket::Mid => "mid",
            RatingBucket::Low => "low",
        }
    }
}

// =============================================================================
// MetadataExtractor
// =============================================================================

/// The standard extractor over genre, director, cast, year, rating and mood.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataExtractor;

impl FeatureExtractor for MetadataExtractor {
    fn name(&self) -> &str {
        "MetadataExtractor"
    }

    fn extract(&self, movie: &MovieRecord) -> FeatureString {
        let mut tokens = Vec::new();

        if is_listed(&movie.genre, &[NOT_AVAILABLE]) {
            for value in normalized_entries(&movie.genre) {
                let token = format!("{}{}", GENRE_PREFIX, value);
                tokens.extend(std::iter::repeat_n(token, GENRE_REPEAT));
            }
        }

        if is_listed(&movie.director, &[NOT_AVAILABLE, UNKNOWN_DIRECTOR]) {
            for value in normalized_entries(&movie.director) {
                let token = format!("{}{}", DIRECTOR_PREFIX, value);
                tokens.extend(std::iter::repeat_n(token, DIRECTOR_REPEAT));
            }
        }

        if is_listed(&movie.actors, &[NOT_AVAILABLE]) {
            // Truncate before normalizing: an entry that normalizes to
            // nothing still uses up one of the three billing slots
            for entry in movie.actors.split(',').take(MAX_ACTORS) {
                let value = normalize(entry);
                if !value.is_empty() {
                    tokens.push(format!("{}{}", ACTOR_PREFIX, value));
                }
            }
        }

        if let Some(decade) = movie.year.as_deref().and_then(decade_of) {
            tokens.push(format!("{}{}s", DECADE_PREFIX, decade));
        }

        if let Some(rating) = movie.user_rating() {
            let bucket = RatingBucket::from_rating(rating);
            tokens.push(format!("{}{}", RATING_PREFIX, bucket.as_str()));
        }

        // Lower-cased only; punctuation is left for the tokenizer to drop
        if let Some(mood) = movie.mood.as_deref().filter(|m| !m.is_empty()) {
            tokens.push(format!("{}{}", MOOD_PREFIX, mood.to_lowercase()));
        }

        FeatureString::from_tokens(tokens)
    }
}

/// A raw list field is usable unless empty or one of the placeholders
fn is_listed(raw: &str, placeholders: &[&str]) -> bool {
    !raw.is_empty() && !placeholders.contains(&raw)
}

/// Split on commas and normalize, dropping entries that end up empty
fn normalized_entries(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',').map(normalize).filter(|value| !value.is_empty())
}

/// Lower-case and keep only `[a-z0-9]`: `"Robert Downey Jr."` -> `"robertdowneyjr"`
pub fn normalize(entry: &str) -> String {
    entry
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Decade of a year string, from its first four characters.
///
/// Example: "2008" -> Some(2000)
///          "1994-06-10" -> Some(1990)
///          "199" / "abcd" / "" -> None
pub fn decade_of(year: &str) -> Option<i64> {
    let prefix: String = year.chars().take(4).collect();
    if prefix.chars().count() < 4 {
        return None;
    }
    let year: i64 = prefix.trim().parse().ok()?;
    Some(year.div_euclid(10) * 10)
}
