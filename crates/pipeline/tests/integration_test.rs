//! Integration tests for the pipeline.
//!
//! These tests verify that feature extraction, TF-IDF fitting and cosine
//! similarity work together on a realistic collection.

use catalog::{MovieRecord, parse_collection};
use pipeline::{
    FeatureExtractor, MetadataExtractor, TfidfModel, TokenPattern, VectorizeError,
    cosine_similarity, l2_norm,
};

fn create_test_collection() -> Vec<MovieRecord> {
    let json = r#"{
        "collection": [
            {"title": "Iron Man", "genre": "Action, Sci-Fi", "director": "Jon Favreau",
             "actors": "Robert Downey Jr., Gwyneth Paltrow, Terrence Howard, Jeff Bridges",
             "year": 2008, "userRating": 5, "rating": 5},
            {"title": "Zodiac", "genre": "Crime, Mystery", "director": "David Fincher",
             "actors": "Jake Gyllenhaal, Mark Ruffalo, Robert Downey Jr.",
             "year": "2007", "rating": 4},
            {"title": "Mamma Mia!", "genre": "Musical, Romance", "director": "Phyllida Lloyd",
             "actors": "Meryl Streep, Amanda Seyfried", "year": "2008",
             "rating": "N/A", "mood": "Upbeat"}
        ]
    }"#;
    parse_collection(json, "inline").unwrap()
}

#[test]
fn test_extract_fit_and_compare() {
    let collection = create_test_collection();
    let features = MetadataExtractor.extract_all(&collection);
    assert_eq!(features.len(), 3);

    let (model, rows) = TfidfModel::fit(&features, TokenPattern::FeatureTokens).unwrap();
    assert_eq!(rows.len(), 3);

    for row in &rows {
        assert_eq!(row.len(), model.vocabulary().len());
        assert!((l2_norm(row) - 1.0).abs() < 1e-9);
    }

    // Shared actor and decade make the first two closer than the musical
    let thriller_pair = cosine_similarity(&rows[0], &rows[1]);
    let musical_pair = cosine_similarity(&rows[1], &rows[2]);
    assert!(thriller_pair > musical_pair);
}

#[test]
fn test_lenient_fields_reach_features() {
    let collection = create_test_collection();
    let features = MetadataExtractor.extract_all(&collection);

    // Numeric year decoded, fourth actor dropped
    assert!(features[0].tokens().any(|t| t == "decade_2000s"));
    assert!(!features[0].tokens().any(|t| t == "actor_jeffbridges"));
    // Non-numeric rating gives no rating token, mood survives
    assert!(!features[2].tokens().any(|t| t.starts_with("rating_")));
    assert!(features[2].tokens().any(|t| t == "mood_upbeat"));
}

#[test]
fn test_transform_new_movie_into_fitted_space() {
    let collection = create_test_collection();
    let features = MetadataExtractor.extract_all(&collection);
    let (model, rows) = TfidfModel::fit(&features, TokenPattern::FeatureTokens).unwrap();

    let sequel = MovieRecord::new("Iron Man 2")
        .with_genre("Action, Sci-Fi")
        .with_director("Jon Favreau")
        .with_actors("Robert Downey Jr., Gwyneth Paltrow, Don Cheadle")
        .with_year("2010");
    let vector = model.transform(MetadataExtractor.extract(&sequel).as_str());

    let to_first = cosine_similarity(&vector, &rows[0]);
    let to_musical = cosine_similarity(&vector, &rows[2]);
    assert!(to_first > 0.5);
    assert_eq!(to_musical, 0.0);
}

#[test]
fn test_single_document_cannot_be_fitted() {
    let collection = create_test_collection();
    let features = MetadataExtractor.extract_all(&collection[..1]);

    let err = TfidfModel::fit(&features, TokenPattern::FeatureTokens).unwrap_err();
    assert_eq!(err, VectorizeError::TooFewDocuments { found: 1, required: 2 });
}
