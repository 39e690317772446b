//! Run output and serialization

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::arena::runner::ArenaRunner;
use crate::core::error::Result;
use crate::core::types::{Kind, Tick};
use crate::simulation::events::SimulationEvent;
use crate::simulation::scoreboard::ScoreSnapshot;

/// Summary of one headless run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunOutput {
    pub seed: u64,
    pub total_population: usize,
    pub ticks: Tick,
    /// True when one kind swept the arena
    pub finished: bool,
    pub winner: Option<Kind>,
    pub final_scores: ScoreSnapshot,
    pub conversions: usize,
    pub simulation_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<SimulationEvent>>,
}

impl RunOutput {
    pub fn new(runner: &ArenaRunner, elapsed: Duration) -> Self {
        let controller = &runner.controller;
        Self {
            seed: controller.seed(),
            total_population: controller.config().total_population,
            ticks: controller.current_tick(),
            finished: controller.winner().is_some(),
            winner: controller.winner(),
            final_scores: controller.scoreboard(),
            conversions: runner.log().conversions(),
            simulation_time_ms: elapsed.as_millis() as u64,
            events: None,
        }
    }

    /// Attach the full event list (large for big populations)
    pub fn with_events(mut self, events: Vec<SimulationEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let headline = match self.winner {
            Some(kind) => format!("Game Over! {} won!", kind.title()),
            None => "No winner yet.".to_string(),
        };
        format!(
            "{}\n{} ticks, {} conversions, {} ({}ms, seed {})",
            headline,
            self.ticks,
            self.conversions,
            self.final_scores,
            self.simulation_time_ms,
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunOutput {
        RunOutput {
            seed: 42,
            total_population: 6,
            ticks: 120,
            finished: true,
            winner: Some(Kind::Scissors),
            final_scores: ScoreSnapshot { rock: 0, paper: 0, scissors: 6 },
            conversions: 9,
            simulation_time_ms: 3,
            events: None,
        }
    }

    #[test]
    fn test_summary_names_winner() {
        let text = sample().summary();
        assert!(text.starts_with("Game Over! Scissors won!"));
        assert!(text.contains("scissors: 6"));
        assert!(text.contains("seed 42"));
    }

    #[test]
    fn test_json_omits_missing_events() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["winner"], "scissors");
        assert_eq!(json["final_scores"]["scissors"], 6);
        assert!(json.get("events").is_none());
    }

    #[test]
    fn test_json_includes_attached_events() {
        let output = sample().with_events(vec![SimulationEvent::SimulationEnded {
            tick: 120,
            winning_kind: Kind::Scissors,
        }]);
        let json: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(json["events"].as_array().map(Vec::len), Some(1));
    }
}
