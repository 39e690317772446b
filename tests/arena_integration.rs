//! Integration tests for headless runs

use rps_arena::arena::ArenaRunner;
use rps_arena::core::types::{ArenaBounds, SpeedRange};
use rps_arena::core::{ArenaConfig, RunConfig, SimulationConfig};
use rps_arena::simulation::SimulationEvent;

fn crowded(seed: u64, population: usize) -> RunConfig {
    RunConfig {
        simulation: SimulationConfig {
            total_population: population,
            kind_split: None,
            bounds: ArenaBounds::new(400.0, 300.0),
            speed: SpeedRange::new(128.0, 640.0),
            seed: Some(seed),
        },
        arena: ArenaConfig {
            collision_radius: 10.0,
            tick_seconds: 1.0 / 60.0,
            max_ticks: 500_000,
        },
    }
}

#[test]
fn test_round_runs_to_a_single_kind() {
    let mut runner = ArenaRunner::new(crowded(17, 30)).unwrap();
    let output = runner.run_to_completion().unwrap();

    assert!(output.finished);
    let winner = output.winner.unwrap();
    assert_eq!(output.final_scores.count(winner), 30);
    assert_eq!(output.final_scores.total(), 30);
}

#[test]
fn test_scores_conserved_every_frame() {
    let mut runner = ArenaRunner::new(crowded(4, 21)).unwrap();

    for _ in 0..2_000 {
        let events = runner.step().unwrap();
        for event in &events {
            if let SimulationEvent::ScoreChanged { scores, .. } = event {
                assert_eq!(scores.total(), 21);
            }
        }
        assert_eq!(runner.controller.scoreboard().total(), 21);
        if !runner.controller.is_running() {
            break;
        }
    }
    assert!(runner.controller.registry().verify().is_ok());
}

#[test]
fn test_entities_stay_in_arena() {
    let config = crowded(8, 15);
    let bounds = config.simulation.bounds;
    let mut runner = ArenaRunner::new(config).unwrap();

    for _ in 0..500 {
        runner.step().unwrap();
        for entity in runner.controller.registry().iter() {
            assert!(bounds.contains(entity.position), "{:?} escaped", entity.id);
        }
    }
}

#[test]
fn test_conversion_events_match_scoreboard_changes() {
    let mut runner = ArenaRunner::new(crowded(12, 24)).unwrap();
    let output = runner.run_to_completion().unwrap();

    let log = runner.log();
    assert_eq!(log.conversions(), output.conversions);
    assert!(output.conversions >= 16, "at least two kinds had to convert fully");
    assert_eq!(log.ending().map(|(kind, _)| kind), output.winner);
}
