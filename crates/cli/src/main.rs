use anyhow::{Context, Result, bail};
use catalog::MovieRecord;
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{EngineConfig, ProfileResult, TasteEngine};
use rand::seq::IndexedRandom;
use server::TasteService;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// Taste - content-based movie taste profiles
#[derive(Parser)]
#[command(name = "taste")]
#[command(about = "Build a taste profile from a movie collection and score candidates", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a taste profile and show its strongest traits
    Profile {
        /// Collection file: a JSON array or {"collection": [...]}
        #[arg(long)]
        collection: PathBuf,
    },

    /// Score one movie against the profile of a collection
    Score {
        #[arg(long)]
        collection: PathBuf,

        /// Movie file: a JSON object or {"movie": {...}}
        #[arg(long)]
        movie: PathBuf,
    },

    /// Suggest genres, directors and actors to search for
    Recommend {
        #[arg(long)]
        collection: PathBuf,
    },

    /// Rank a file of candidates by match score
    Rank {
        #[arg(long)]
        collection: PathBuf,

        /// Candidate file, same shape as a collection
        #[arg(long)]
        candidates: PathBuf,

        /// Number of candidates to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show the feature string extracted for a movie
    Features {
        #[arg(long)]
        movie: PathBuf,
    },

    /// Run benchmark to test scoring throughput
    Benchmark {
        #[arg(long)]
        collection: PathBuf,

        #[arg(long)]
        candidates: PathBuf,

        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading engine config from {}", path.display());
            EngineConfig::from_json_file(path)?
        }
        None => EngineConfig::default(),
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Profile { collection } => handle_profile(config, &collection, cli.json).await?,
        Commands::Score { collection, movie } => {
            handle_score(config, &collection, &movie, cli.json).await?
        }
        Commands::Recommend { collection } => {
            handle_recommend(config, &collection, cli.json).await?
        }
        Commands::Rank {
            collection,
            candidates,
            limit,
        } => handle_rank(config, &collection, &candidates, limit, cli.json).await?,
        Commands::Features { movie } => handle_features(config, &movie, cli.json)?,
        Commands::Benchmark {
            collection,
            candidates,
            requests,
            concurrent,
        } => handle_benchmark(config, &collection, &candidates, requests, concurrent).await?,
    }

    Ok(())
}

fn load_collection(path: &Path) -> Result<Vec<MovieRecord>> {
    let start = Instant::now();
    let collection = catalog::load_collection(path)
        .with_context(|| format!("Failed to load collection {}", path.display()))?;
    if !collection.is_empty() {
        eprintln!(
            "{} Loaded {} movies from {} in {:?}",
            "✓".green(),
            collection.len(),
            path.display(),
            start.elapsed()
        );
    }
    Ok(collection)
}

fn load_movie(path: &Path) -> Result<MovieRecord> {
    catalog::load_movie(path).with_context(|| format!("Failed to load movie {}", path.display()))
}

/// Build a profile on a fresh service and report a failed build
async fn fitted_service(config: EngineConfig, collection: Vec<MovieRecord>) -> Result<TasteService> {
    let service = TasteService::with_config(config);
    let result = service.build_profile(collection).await?;
    if !result.success {
        eprintln!("{} {}", "✗".red(), result.message);
    }
    Ok(service)
}

/// Handle the 'profile' command
async fn handle_profile(config: EngineConfig, collection: &Path, json: bool) -> Result<()> {
    let collection = load_collection(collection)?;
    let service = TasteService::with_config(config);
    let result = service.build_profile(collection).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_profile(&result);
    }
    Ok(())
}

/// Handle the 'score' command
async fn handle_score(
    config: EngineConfig,
    collection: &Path,
    movie: &Path,
    json: bool,
) -> Result<()> {
    let collection = load_collection(collection)?;
    let movie = load_movie(movie)?;
    let service = fitted_service(config, collection).await?;

    let title = movie.to_string();
    let score = service.score_movie(movie).await?;

    if json {
        println!("{}", serde_json::json!({ "success": true, "score": score }));
    } else {
        println!("{} {}", title.bold(), format!("{}% match", score).green());
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(config: EngineConfig, collection: &Path, json: bool) -> Result<()> {
    let collection = load_collection(collection)?;
    let service = TasteService::with_config(config);
    let response = service.recommend(collection).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.suggestions.is_empty() {
        println!("{}", "No suggestions yet, add more movies to your collection".yellow());
        return Ok(());
    }

    print!("{}", "Suggestions:\n".bold().blue());
    for (i, s) in response.suggestions.iter().enumerate() {
        println!(
            "{}. [{}] {} {}",
            (i + 1).to_string().green(),
            s.kind.to_string().cyan(),
            s.message,
            format!("(search: {}, {}%)", s.search_term, s.confidence).dimmed()
        );
    }
    if !response.top_traits.is_empty() {
        println!("{} {}", "Your taste:".bold(), response.top_traits.join(", "));
    }
    Ok(())
}

/// Handle the 'rank' command
async fn handle_rank(
    config: EngineConfig,
    collection: &Path,
    candidates: &Path,
    limit: usize,
    json: bool,
) -> Result<()> {
    let collection = load_collection(collection)?;
    let candidates = load_collection(candidates)?;
    let service = fitted_service(config, collection).await?;

    let ranked = service.rank_candidates(candidates, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    print!("{}", "Best matches:\n".bold().blue());
    for (i, scored) in ranked.iter().enumerate() {
        let score = format!("{:>3}%", scored.score);
        let score = match scored.score {
            70..=100 => score.green(),
            40..=69 => score.yellow(),
            _ => score.normal(),
        };
        println!("{}. {} {}", (i + 1).to_string().green(), score, scored.title);
    }
    Ok(())
}

/// Handle the 'features' command
fn handle_features(config: EngineConfig, movie: &Path, json: bool) -> Result<()> {
    let movie = load_movie(movie)?;
    let engine = TasteEngine::with_config(config);
    let features = engine.extract(&movie);

    if json {
        println!("{}", serde_json::json!({ "features": features.as_str() }));
    } else {
        println!("{}", movie.to_string().bold());
        println!("{}", features);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    config: EngineConfig,
    collection: &Path,
    candidates: &Path,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let collection = load_collection(collection)?;
    let candidates = load_collection(candidates)?;
    if candidates.is_empty() {
        bail!("Candidate file has no movies");
    }

    let start = Instant::now();
    let service = fitted_service(config, collection).await?;
    println!("Profile built in {:?}", start.elapsed());

    // Pick random candidates to score
    let picks: Vec<MovieRecord> = {
        let mut rng = rand::rng();
        (0..requests)
            .filter_map(|_| candidates.choose(&mut rng).cloned())
            .collect()
    };

    // Use tokio::spawn to make concurrent requests
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall = Instant::now();
    let mut handles = vec![];
    for movie in picks {
        let service = service.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            service.score_movie(movie).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", timings.len(), concurrent.max(1));
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print a profile build result
fn print_profile(result: &ProfileResult) {
    if !result.success {
        println!("{} {}", "✗".red(), result.message);
        return;
    }

    println!("{} {}", "✓".green(), result.message);
    println!("{} {}", "• ".cyan(), format!("{} features", result.total_features));
    print!("{}", "Top traits:\n".bold().blue());
    for (i, t) in result.top_traits.iter().enumerate() {
        println!(
            "{}. {:<28} {:.3}",
            (i + 1).to_string().green(),
            t.feature,
            t.weight
        );
    }
}
