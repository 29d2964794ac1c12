//! Example: Build a taste profile and score a few candidates
//!
//! Run with: cargo run --package engine --example taste_walkthrough
//!
//! This example shows how to:
//! 1. Describe a small collection
//! 2. Build a taste profile from it
//! 3. Inspect the strongest traits
//! 4. Score and rank candidates
//! 5. Derive search suggestions

use catalog::MovieRecord;
use engine::TasteEngine;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== Taste Profile Walkthrough ===\n");

    let collection = vec![
        MovieRecord::new("Iron Man")
            .with_genre("Action, Sci-Fi")
            .with_director("Jon Favreau")
            .with_actors("Robert Downey Jr., Gwyneth Paltrow, Terrence Howard")
            .with_year("2008")
            .with_rating(5.0),
        MovieRecord::new("Heat")
            .with_genre("Crime, Drama, Thriller")
            .with_director("Michael Mann")
            .with_actors("Al Pacino, Robert De Niro, Val Kilmer")
            .with_year("1995")
            .with_rating(4.5),
        MovieRecord::new("Sherlock Holmes")
            .with_genre("Action, Adventure, Mystery")
            .with_director("Guy Ritchie")
            .with_actors("Robert Downey Jr., Jude Law, Rachel McAdams")
            .with_year("2009")
            .with_rating(4.0),
        MovieRecord::new("The Notebook")
            .with_genre("Drama, Romance")
            .with_director("Nick Cassavetes")
            .with_actors("Ryan Gosling, Rachel McAdams")
            .with_year("2004")
            .with_rating(2.0),
    ];

    // Build the profile
    let mut engine = TasteEngine::new();
    let start = Instant::now();
    let result = engine.build_profile(&collection);
    println!("{} in {:?}", result.message, start.elapsed());
    println!("  Vocabulary: {} features\n", result.total_features);

    println!("Top traits:");
    for (i, t) in result.top_traits.iter().enumerate() {
        println!("  {}. {} ({:.3})", i + 1, t.feature, t.weight);
    }
    println!();

    // Score candidates
    let candidates = vec![
        MovieRecord::new("Iron Man 2")
            .with_genre("Action, Sci-Fi")
            .with_director("Jon Favreau")
            .with_actors("Robert Downey Jr., Gwyneth Paltrow, Don Cheadle")
            .with_year("2010"),
        MovieRecord::new("Collateral")
            .with_genre("Crime, Drama, Thriller")
            .with_director("Michael Mann")
            .with_actors("Tom Cruise, Jamie Foxx")
            .with_year("2004"),
        MovieRecord::new("Frozen")
            .with_genre("Animation, Musical")
            .with_director("Chris Buck, Jennifer Lee")
            .with_actors("Kristen Bell, Idina Menzel")
            .with_year("2013"),
    ];

    println!("Candidate ranking:");
    for (i, scored) in engine.rank_candidates(&candidates, 10).iter().enumerate() {
        println!("  {}. {} - {}% match", i + 1, scored.title, scored.score);
    }
    println!();

    // Suggestions
    println!("Suggestions:");
    for suggestion in engine.get_recommendations(&collection) {
        println!(
            "  [{}] {} (search: {}, confidence {}%)",
            suggestion.kind, suggestion.message, suggestion.search_term, suggestion.confidence
        );
    }

    Ok(())
}
