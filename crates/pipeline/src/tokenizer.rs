//! Tokenization of feature strings for vectorization.
//!
//! Documents are lower-cased, then split into maximal runs of "word"
//! characters. What counts as a word character is the only difference
//! between the two patterns:
//!
//! - `FeatureTokens`: `[a-zA-Z0-9_]+`. Every extractor token is one term,
//!   so `genre_action` and `director_jonfavreau` are dimensions of the
//!   vector space.
//! - `Alphanumeric`: `[a-zA-Z0-9]+`. The underscore is a delimiter too, so
//!   `genre_action` yields the two terms `genre` and `action`. Kept for
//!   vocabularies fitted that way.

use serde::{Deserialize, Serialize};

/// How a feature string is split into vocabulary terms.
///
/// `Alphanumeric` reproduces the underscore-splitting sub-token vocabulary;
/// no term keeps its `genre_`/`director_`/`actor_` prefix, so a profile
/// fitted this way yields no suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPattern {
    #[default]
    FeatureTokens,
    Alphanumeric,
}

impl TokenPattern {
    fn is_word_char(&self, c: char) -> bool {
        match self {
            TokenPattern::FeatureTokens => c.is_ascii_alphanumeric() || c == '_',
            TokenPattern::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    /// Split a document into lower-case terms, in order, repeats included
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        document
            .to_lowercase()
            .split(|c: char| !self.is_word_char(c))
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect()
    }
}
