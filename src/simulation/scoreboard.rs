//! Per-kind counts derived from the registry

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Kind;
use crate::ecs::registry::EntityRegistry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl ScoreSnapshot {
    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Rock => self.rock,
            Kind::Paper => self.paper,
            Kind::Scissors => self.scissors,
        }
    }

    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    /// The kind that holds the whole population, if any
    pub fn dominant(&self) -> Option<Kind> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Kind::ALL.into_iter().find(|&k| self.count(k) == total)
    }

    /// Largest kind; ties go to the earlier kind
    pub fn leader(&self) -> Kind {
        Kind::ALL
            .into_iter()
            .fold(Kind::Rock, |best, k| {
                if self.count(k) > self.count(best) {
                    k
                } else {
                    best
                }
            })
    }
}

impl fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rock: {}  paper: {}  scissors: {}",
            self.rock, self.paper, self.scissors
        )
    }
}

/// Reads counts straight from the registry; nothing is cached
pub struct ScoreBoard;

impl ScoreBoard {
    pub fn snapshot(registry: &EntityRegistry) -> ScoreSnapshot {
        ScoreSnapshot {
            rock: registry.count_of(Kind::Rock),
            paper: registry.count_of(Kind::Paper),
            scissors: registry.count_of(Kind::Scissors),
        }
    }
}
