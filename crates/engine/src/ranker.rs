//! Turns the strongest profile dimensions into search suggestions.
//!
//! ## Algorithm
//! Walk the top `recommendation_window` dimensions (positive weight only),
//! strongest first, and keep:
//! - the first genre token
//! - the first director token
//! - the first `max_actor_suggestions` actor token(s)
//!
//! Decade, rating and mood tokens are never suggested. Suggestions keep
//! discovery order and stop at `max_suggestions`.

use crate::config::EngineConfig;
use crate::profile::TasteProfile;
use crate::types::{Suggestion, SuggestionKind};
use pipeline::features::{ACTOR_PREFIX, DIRECTOR_PREFIX, GENRE_PREFIX};
use tracing::debug;

/// Classify a vocabulary term, returning its kind and bare value
fn classify(term: &str) -> Option<(SuggestionKind, &str)> {
    if let Some(value) = term.strip_prefix(GENRE_PREFIX) {
        Some((SuggestionKind::Genre, value))
    } else if let Some(value) = term.strip_prefix(DIRECTOR_PREFIX) {
        Some((SuggestionKind::Director, value))
    } else if let Some(value) = term.strip_prefix(ACTOR_PREFIX) {
        Some((SuggestionKind::Actor, value))
    } else {
        None
    }
}

fn suggestion_message(kind: SuggestionKind, value: &str, confidence: u8) -> String {
    match kind {
        SuggestionKind::Genre => format!(
            "Your taste profile strongly favors {} (confidence: {}%)",
            value, confidence
        ),
        SuggestionKind::Director => format!("You really enjoy {}'s filmmaking style", value),
        SuggestionKind::Actor => format!("You tend to enjoy movies with {}", value),
    }
}

/// Weight as a percentage, capped at 99
pub fn confidence(weight: f64) -> u8 {
    percent(weight).min(99)
}

/// Round `fraction * 100` half-to-even, clamped to 0..=100.
///
/// Non-finite input maps to 0.
pub fn percent(fraction: f64) -> u8 {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Derive suggestions from a fitted profile
pub fn suggest(profile: &TasteProfile, config: &EngineConfig) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let mut genre_added = false;
    let mut director_added = false;
    let mut actor_count = 0;

    for (i, weight) in profile.ranked_dimensions(config.recommendation_window) {
        if suggestions.len() >= config.max_suggestions {
            break;
        }

        let Some(term) = profile.vocabulary().term(i) else {
            continue;
        };
        let Some((kind, value)) = classify(term) else {
            continue;
        };

        let wanted = match kind {
            SuggestionKind::Genre => !genre_added,
            SuggestionKind::Director => !director_added,
            SuggestionKind::Actor => actor_count < config.max_actor_suggestions,
        };
        if !wanted {
            continue;
        }

        match kind {
            SuggestionKind::Genre => genre_added = true,
            SuggestionKind::Director => director_added = true,
            SuggestionKind::Actor => actor_count += 1,
        }

        let confidence = confidence(weight);
        suggestions.push(Suggestion {
            kind,
            message: suggestion_message(kind, value, confidence),
            search_term: value.to_string(),
            confidence,
        });
    }

    debug!("Derived {} suggestions", suggestions.len());
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MovieRecord;
    use pipeline::{MetadataExtractor, TokenPattern};

    #[test]
    fn test_classify() {
        assert_eq!(classify("genre_action"), Some((SuggestionKind::Genre, "action")));
        assert_eq!(
            classify("director_jonfavreau"),
            Some((SuggestionKind::Director, "jonfavreau"))
        );
        assert_eq!(classify("actor_x"), Some((SuggestionKind::Actor, "x")));
        assert_eq!(classify("decade_2000s"), None);
        assert_eq!(classify("rating_high"), None);
        assert_eq!(classify("mood_happy"), None);
        assert_eq!(classify("genre"), None);
    }

    #[test]
    fn test_percent_rounds_half_to_even() {
        assert_eq!(percent(0.125), 12);
        assert_eq!(percent(0.375), 38);
        assert_eq!(percent(0.426), 43);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(1.7), 100);
        assert_eq!(percent(-0.3), 0);
        assert_eq!(percent(f64::NAN), 0);
    }

    #[test]
    fn test_confidence_capped() {
        assert_eq!(confidence(1.5), 99);
        assert_eq!(confidence(0.42), 42);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            suggestion_message(SuggestionKind::Genre, "action", 80),
            "Your taste profile strongly favors action (confidence: 80%)"
        );
        assert_eq!(
            suggestion_message(SuggestionKind::Director, "jonfavreau", 50),
            "You really enjoy jonfavreau's filmmaking style"
        );
        assert_eq!(
            suggestion_message(SuggestionKind::Actor, "robertdowneyjr", 30),
            "You tend to enjoy movies with robertdowneyjr"
        );
    }

    #[test]
    fn test_one_genre_one_director_two_actors() {
        let collection = vec![
            MovieRecord::new("a")
                .with_genre("Action, Sci-Fi")
                .with_director("Jon Favreau, Louis Leterrier")
                .with_actors("A1, A2, A3")
                .with_rating(5.0),
            MovieRecord::new("b")
                .with_genre("Action, Drama")
                .with_director("Jon Favreau")
                .with_actors("A1, A2, A4")
                .with_rating(4.0),
        ];
        let profile =
            TasteProfile::build(&collection, &MetadataExtractor, TokenPattern::default()).unwrap();
        let suggestions = suggest(&profile, &EngineConfig::default());

        let count = |kind| suggestions.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(SuggestionKind::Genre), 1);
        assert_eq!(count(SuggestionKind::Director), 1);
        assert_eq!(count(SuggestionKind::Actor), 2);
        assert!(suggestions.len() <= 5);
        assert!(suggestions.iter().all(|s| s.confidence <= 99));
    }

    #[test]
    fn test_sub_token_vocabulary_yields_no_suggestions() {
        let collection = vec![
            MovieRecord::new("a").with_genre("Action").with_director("Jon Favreau"),
            MovieRecord::new("b").with_genre("Action").with_director("Jon Favreau"),
        ];
        let profile =
            TasteProfile::build(&collection, &MetadataExtractor, TokenPattern::Alphanumeric)
                .unwrap();
        assert!(suggest(&profile, &EngineConfig::default()).is_empty());
    }
}
