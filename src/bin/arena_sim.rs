//! Headless Arena Runner
//!
//! Runs whole rounds without a display and prints the outcome as JSON or text.

use std::path::PathBuf;

use clap::Parser;
use rps_arena::arena::ArenaRunner;
use rps_arena::core::error::Result;
use rps_arena::core::types::ArenaBounds;
use rps_arena::core::RunConfig;
use tracing_subscriber::EnvFilter;

/// Headless Arena Runner - play rock-paper-scissors rounds to completion
#[derive(Parser, Debug)]
#[command(name = "arena_sim")]
#[command(about = "Run rock-paper-scissors rounds headless and report the winner")]
struct Args {
    /// TOML config with [simulation] and [arena] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total number of entities (split evenly across kinds)
    #[arg(long)]
    population: Option<usize>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum frames before giving up without a winner
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Use the tall 1440x2560 arena
    #[arg(long)]
    portrait: bool,

    /// Number of rounds to play (seeds increment per round)
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Include every event in JSON output
    #[arg(long)]
    events: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rps_arena=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if let Some(population) = args.population {
        config.simulation.total_population = population;
        config.simulation.kind_split = None;
    }
    if args.portrait {
        config.simulation.bounds = ArenaBounds::portrait();
    }
    if let Some(max_ticks) = args.max_ticks {
        config.arena.max_ticks = max_ticks;
    }

    let base_seed = args
        .seed
        .or(config.simulation.seed)
        .unwrap_or_else(rand::random);

    for round in 0..args.rounds {
        let mut round_config = config.clone();
        round_config.simulation.seed = Some(base_seed.wrapping_add(u64::from(round)));

        let mut runner = ArenaRunner::new(round_config)?;
        let mut output = runner.run_to_completion()?;

        if args.format == "text" {
            println!("Round {}: {}", round + 1, output.summary());
        } else {
            if args.events {
                output = output.with_events(runner.log().events.clone());
            }
            println!("{}", output.to_json()?);
        }
    }

    Ok(())
}
