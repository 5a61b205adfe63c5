//! Arena CLI
//!
//! Play engines against each other and keep their Elo ratings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena::{create_engine, ArenaConfig, ArenaResults, MatchRunner, RatingTable, ENGINE_NAMES};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Checkers engine arena with Elo tracking")]
struct Cli {
    /// TOML file with arena settings
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Command,
}

/// Flags that take precedence over the config file.
#[derive(Args, Debug)]
struct Overrides {
    #[arg(long, short, global = true)]
    games: Option<u32>,
    #[arg(long, global = true)]
    max_turns: Option<u32>,
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(long, global = true)]
    move_time_ms: Option<u64>,
    #[arg(long, global = true)]
    results: Option<PathBuf>,
    #[arg(long, global = true)]
    ratings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one match between two engines (random, easy, medium, hard)
    Match { engine1: String, engine2: String },
    /// Play every engine against every other
    Ladder {
        /// Engines to include (defaults to all)
        #[arg(long, value_delimiter = ',')]
        engines: Vec<String>,
    },
    /// Show the current leaderboard
    Ratings,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Match { engine1, engine2 } => run_matches(&config, "match", &[engine1, engine2], false),
        Command::Ladder { engines } => {
            let engines = if engines.is_empty() {
                ENGINE_NAMES.iter().map(|s| s.to_string()).collect()
            } else {
                engines
            };
            run_matches(&config, "ladder", &engines, true)
        }
        Command::Ratings => {
            let table = RatingTable::load_or_default(&config.ratings_path)
                .with_context(|| format!("reading ratings from {}", config.ratings_path.display()))?;
            print!("{}", table.render_leaderboard());
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<ArenaConfig> {
    let mut config = match &cli.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ArenaConfig::default(),
    };

    let o = &cli.overrides;
    if let Some(games) = o.games {
        config.games_per_match = games;
    }
    if let Some(max_turns) = o.max_turns {
        config.max_turns = max_turns;
    }
    if o.seed.is_some() {
        config.seed = o.seed;
    }
    if o.move_time_ms.is_some() {
        config.move_time_ms = o.move_time_ms;
    }
    if let Some(path) = &o.results {
        config.results_path = path.clone();
    }
    if let Some(path) = &o.ratings {
        config.ratings_path = path.clone();
    }
    Ok(config)
}

/// Plays the first two names against each other, or every pair when
/// `round_robin` is set, then updates ratings and writes the report.
fn run_matches(config: &ArenaConfig, name: &str, engines: &[String], round_robin: bool) -> Result<()> {
    let mut pairs = Vec::new();
    for i in 0..engines.len() {
        for j in (i + 1)..engines.len() {
            pairs.push((&engines[i], &engines[j]));
            if !round_robin {
                break;
            }
        }
        if !round_robin {
            break;
        }
    }

    let mut table = RatingTable::load_or_default(&config.ratings_path)
        .with_context(|| format!("reading ratings from {}", config.ratings_path.display()))?;
    let mut results = ArenaResults::new(name, engines.to_vec(), config.games_per_match, config.max_turns);
    results.seed = config.seed;
    let runner = MatchRunner::new(config.match_config());

    for (index, (first, second)) in pairs.into_iter().enumerate() {
        let seed = config.seed.map(|s| s.wrapping_add(2 * index as u64));
        let mut engine1 = create_engine(first, seed)?;
        let mut engine2 = create_engine(second, seed.map(|s| s.wrapping_add(1)))?;

        info!(engine1 = %first, engine2 = %second, games = config.games_per_match, "match started");
        let result = runner.run_match(engine1.as_mut(), engine2.as_mut());
        info!(
            engine1 = %first,
            engine2 = %second,
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );

        table.update_match(first, second, &result);
        results.add_match(first, second, result);
    }

    print!("{}", results.generate_report());
    println!();
    print!("{}", table.render_leaderboard());

    table
        .save(&config.ratings_path)
        .with_context(|| format!("writing ratings to {}", config.ratings_path.display()))?;
    results
        .save(&config.results_path)
        .with_context(|| format!("writing results to {}", config.results_path.display()))?;
    Ok(())
}
