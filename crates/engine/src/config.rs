//! Engine configuration.
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes:
//!
//! ```json
//! { "top_traits": 20, "token_pattern": "alphanumeric" }
//! ```

use anyhow::{Context, Result};
use pipeline::TokenPattern;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Smallest collection a profile can be built from
    pub min_collection_size: usize,

    /// Number of traits reported by `build_profile`
    pub top_traits: usize,

    /// Number of top profile dimensions scanned for suggestions
    pub recommendation_window: usize,

    /// Upper bound on suggestions returned
    pub max_suggestions: usize,

    /// Upper bound on actor suggestions
    pub max_actor_suggestions: usize,

    /// Number of trait names shown next to suggestions
    pub display_traits: usize,

    /// How feature strings are split into vocabulary terms
    pub token_pattern: TokenPattern,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_collection_size: pipeline::MIN_DOCUMENTS,
            top_traits: 10,
            recommendation_window: 15,
            max_suggestions: 5,
            max_actor_suggestions: 2,
            display_traits: 5,
            token_pattern: TokenPattern::default(),
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configure the minimum collection size (default: 2, never below 2)
    pub fn with_min_collection_size(mut self, size: usize) -> Self {
        self.min_collection_size = size.max(pipeline::MIN_DOCUMENTS);
        self
    }

    /// Configure the number of reported traits (default: 10)
    pub fn with_top_traits(mut self, count: usize) -> Self {
        self.top_traits = count;
        self
    }

    /// Configure the suggestion scan window (default: 15)
    pub fn with_recommendation_window(mut self, window: usize) -> Self {
        self.recommendation_window = window;
        self
    }

    /// Configure the suggestion limit (default: 5)
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Configure the tokenizer (default: whole feature tokens)
    pub fn with_token_pattern(mut self, pattern: TokenPattern) -> Self {
        self.token_pattern = pattern;
        self
    }
}
