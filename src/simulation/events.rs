//! Events emitted by the controller and the running event log

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Kind, Tick, Vec2};
use crate::simulation::scoreboard::ScoreSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimulationEvent {
    /// A collision converted `loser` to the winner's kind
    CollisionResolved {
        tick: Tick,
        winner: EntityId,
        loser: EntityId,
        winning_kind: Kind,
        /// Kind the loser had before converting
        losing_kind: Kind,
        winner_velocity: Vec2,
        loser_velocity: Vec2,
    },
    /// Counts after a conversion
    ScoreChanged { tick: Tick, scores: ScoreSnapshot },
    Paused { tick: Tick },
    Resumed { tick: Tick },
    /// One kind holds the whole population; emitted once per run
    SimulationEnded { tick: Tick, winning_kind: Kind },
}

impl SimulationEvent {
    pub fn tick(&self) -> Tick {
        match *self {
            SimulationEvent::CollisionResolved { tick, .. }
            | SimulationEvent::ScoreChanged { tick, .. }
            | SimulationEvent::Paused { tick }
            | SimulationEvent::Resumed { tick }
            | SimulationEvent::SimulationEnded { tick, .. } => tick,
        }
    }
}

/// Append-only record of everything a run emitted
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<SimulationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = SimulationEvent>) {
        self.events.extend(events);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn conversions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::CollisionResolved { .. }))
            .count()
    }

    /// Winning kind and tick of the terminal event, if the run ended
    pub fn ending(&self) -> Option<(Kind, Tick)> {
        self.events.iter().find_map(|e| match *e {
            SimulationEvent::SimulationEnded { tick, winning_kind } => Some((winning_kind, tick)),
            _ => None,
        })
    }

    pub fn events_for_tick(&self, tick: Tick) -> impl Iterator<Item = &SimulationEvent> {
        self.events.iter().filter(move |e| e.tick() == tick)
    }

    pub fn events_for_entity(&self, id: EntityId) -> impl Iterator<Item = &SimulationEvent> {
        self.events.iter().filter(move |e| match e {
            SimulationEvent::CollisionResolved { winner, loser, .. } => {
                *winner == id || *loser == id
            }
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversion(tick: Tick, winner: u32, loser: u32) -> SimulationEvent {
        SimulationEvent::CollisionResolved {
            tick,
            winner: EntityId(winner),
            loser: EntityId(loser),
            winning_kind: Kind::Rock,
            losing_kind: Kind::Scissors,
            winner_velocity: Vec2::new(1.0, 0.0),
            loser_velocity: Vec2::new(0.0, 1.0),
        }
    }

    #[test]
    fn test_log_queries() {
        let mut log = EventLog::new();
        log.extend([
            conversion(1, 0, 4),
            SimulationEvent::Paused { tick: 2 },
            conversion(3, 1, 4),
            SimulationEvent::SimulationEnded { tick: 3, winning_kind: Kind::Rock },
        ]);

        assert_eq!(log.len(), 4);
        assert_eq!(log.conversions(), 2);
        assert_eq!(log.ending(), Some((Kind::Rock, 3)));
        assert_eq!(log.events_for_tick(3).count(), 2);
        assert_eq!(log.events_for_entity(EntityId(4)).count(), 2);
        assert_eq!(log.events_for_entity(EntityId(0)).count(), 1);
    }

    #[test]
    fn test_no_ending_while_running() {
        let mut log = EventLog::new();
        log.extend([conversion(1, 0, 1)]);
        assert_eq!(log.ending(), None);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_value(SimulationEvent::SimulationEnded {
            tick: 9,
            winning_kind: Kind::Paper,
        })
        .unwrap();
        assert_eq!(json["type"], "simulation_ended");
        assert_eq!(json["winning_kind"], "paper");
        assert_eq!(json["tick"], 9);
    }
}
