//! RPS Arena - Entry Point
//!
//! Interactive console session around the headless arena: advance frames,
//! pause and resume, place a bet on a kind, and replay once a kind has
//! taken over. Pass a TOML config path as the first argument to override
//! the defaults.

use rps_arena::arena::ArenaRunner;
use rps_arena::core::error::Result;
use rps_arena::core::types::Kind;
use rps_arena::core::RunConfig;
use rps_arena::simulation::{SimulationEvent, SimulationState};

use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rps_arena=info")),
        )
        .init();

    tracing::info!("RPS Arena starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(Path::new(&path))?,
        None => RunConfig::default(),
    };

    let mut runner = ArenaRunner::new(config)?;
    let mut bet: Option<Kind> = None;

    println!("\n=== ROCK PAPER SCISSORS ===");
    println!("This is just a random tournament of RPS!");
    println!("Bet on one, then let them collide.");
    println!();
    println!("Commands:");
    println!("  bet <kind>      - Bet on rock, paper or scissors");
    println!("  tick / t        - Advance one frame");
    println!("  run <n>         - Advance n frames");
    println!("  finish / f      - Run until one kind remains");
    println!("  pause / p       - Pause or resume");
    println!("  status / s      - Show detailed status");
    println!("  restart / r     - Start a new round");
    println!("  quit / q        - Exit");
    println!();

    loop {
        display_status(&runner, bet);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "tick" || input == "t" {
            let events = runner.step()?;
            report(&events, bet);
            continue;
        }

        if let Some(arg) = input.strip_prefix("run ") {
            match arg.trim().parse::<u64>() {
                Ok(n) => {
                    let mut conversions = 0;
                    for _ in 0..n {
                        if runner.controller.state() != SimulationState::Running {
                            break;
                        }
                        let events = runner.step()?;
                        conversions += events
                            .iter()
                            .filter(|e| matches!(e, SimulationEvent::CollisionResolved { .. }))
                            .count();
                        report_ending(&events, bet);
                    }
                    println!(
                        "{} conversions. Now at tick {}.",
                        conversions,
                        runner.controller.current_tick()
                    );
                }
                Err(_) => println!("Usage: run <number>"),
            }
            continue;
        }

        if input == "finish" || input == "f" {
            let output = runner.run_to_completion()?;
            println!("{}", output.summary());
            if let (Some(winner), Some(pick)) = (output.winner, bet) {
                if winner == pick {
                    println!("You won the bet!");
                } else {
                    println!("Better luck next round.");
                }
            }
            continue;
        }

        if input == "pause" || input == "p" {
            match runner.toggle_pause() {
                Some(SimulationEvent::Paused { .. }) => println!("Paused."),
                Some(SimulationEvent::Resumed { .. }) => println!("Resumed."),
                _ => println!("The round is over; type restart to play again."),
            }
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(&runner);
            continue;
        }

        if input == "restart" || input == "r" {
            runner.restart()?;
            bet = None;
            println!("New round started. Place your bet!");
            continue;
        }

        if let Some(arg) = input.strip_prefix("bet ") {
            if runner.controller.current_tick() > 0 {
                println!("Bets close once the round starts.");
            } else {
                match arg.parse::<Kind>() {
                    Ok(kind) => {
                        bet = Some(kind);
                        println!("You bet on {}.", kind);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            continue;
        }

        println!(
            "Unknown command. Available: bet <kind>, tick, run <n>, finish, pause, status, restart, quit"
        );
    }

    println!(
        "\nGoodbye! Final scores: {}, {} ticks elapsed.",
        runner.controller.scoreboard(),
        runner.controller.current_tick()
    );
    Ok(())
}

fn report(events: &[SimulationEvent], bet: Option<Kind>) {
    for event in events {
        if let SimulationEvent::CollisionResolved {
            winner,
            loser,
            winning_kind,
            losing_kind,
            ..
        } = event
        {
            println!("  {} ({}) converted {} ({})", winner, winning_kind, loser, losing_kind);
        }
    }
    report_ending(events, bet);
}

fn report_ending(events: &[SimulationEvent], bet: Option<Kind>) {
    for event in events {
        if let SimulationEvent::SimulationEnded { winning_kind, tick } = event {
            println!();
            println!("Game Over! {} won at tick {}!", winning_kind.title(), tick);
            match bet {
                Some(pick) if pick == *winning_kind => println!("You won the bet!"),
                Some(_) => println!("Better luck next round."),
                None => println!("Did you win?"),
            }
            println!("Type restart to replay.");
        }
    }
}

/// Display the scoreboard line
fn display_status(runner: &ArenaRunner, bet: Option<Kind>) {
    let controller = &runner.controller;
    println!();
    println!(
        "--- Tick {} | {:?} | {} ---",
        controller.current_tick(),
        controller.state(),
        controller.scoreboard()
    );
    if let Some(kind) = bet {
        println!("  Your bet: {}", kind);
    }
}

/// Display every kind's members with position and speed
fn display_detailed_status(runner: &ArenaRunner) {
    let registry = runner.controller.registry();
    println!();
    println!("=== Detailed Status (Tick {}) ===", runner.controller.current_tick());

    for kind in Kind::ALL {
        println!();
        println!("{} ({})", kind.title(), registry.count_of(kind));
        for entity in registry.all_of(kind).take(10) {
            println!(
                "  {} at ({:.0}, {:.0}) moving {:.0}/s",
                entity.id,
                entity.position.x,
                entity.position.y,
                entity.speed()
            );
        }
        if registry.count_of(kind) > 10 {
            println!("  ... and {} more", registry.count_of(kind) - 10);
        }
    }
    println!();
}
