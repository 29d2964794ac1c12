//! Plain-data results handed back to callers.
//!
//! Serialized field names match the JSON the web front end already
//! consumes (`top_traits`, `total_features`, `searchTerm`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of building a taste profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub success: bool,
    pub message: String,
    /// Highest-weight profile dimensions, strongest first
    #[serde(default)]
    pub top_traits: Vec<TopTrait>,
    /// Vocabulary size of the fitted space
    #[serde(default)]
    pub total_features: usize,
}

impl ProfileResult {
    pub fn built(collection_size: usize, top_traits: Vec<TopTrait>, total_features: usize) -> Self {
        Self {
            success: true,
            message: format!("Profile built from {} movies", collection_size),
            top_traits,
            total_features,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            top_traits: Vec::new(),
            total_features: 0,
        }
    }
}

/// One profile dimension with its weight rounded to 3 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTrait {
    pub feature: String,
    pub weight: f64,
}

/// What a suggestion points the user at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Genre,
    Director,
    Actor,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuggestionKind::Genre => "genre",
            SuggestionKind::Director => "director",
            SuggestionKind::Actor => "actor",
        };
        f.write_str(name)
    }
}

/// A search the user is likely to enjoy, derived from the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    /// Bare value with its token prefix removed, e.g. `jonfavreau`
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    /// 0..=99
    pub confidence: u8,
}

/// A candidate together with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMovie {
    pub title: String,
    /// 0..=100
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_json_names() {
        let suggestion = Suggestion {
            kind: SuggestionKind::Director,
            message: "You really enjoy jonfavreau's filmmaking style".to_string(),
            search_term: "jonfavreau".to_string(),
            confidence: 42,
        };
        let json = serde_json::to_value(&suggestion).unwrap();

        assert_eq!(json["type"], "director");
        assert_eq!(json["searchTerm"], "jonfavreau");
        assert_eq!(json["confidence"], 42);
    }

    #[test]
    fn test_failed_profile_result() {
        let result = ProfileResult::failed("Need at least 2 movies for recommendations");
        assert!(!result.success);
        assert!(result.top_traits.is_empty());
        assert_eq!(result.total_features, 0);
    }
}
