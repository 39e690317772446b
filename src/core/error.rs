use thiserror::Error;

use crate::core::types::{EntityId, Tick};
use crate::simulation::events::SimulationEvent;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    #[error("Registry invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tick failed after some of its pairs were already resolved; `events`
    /// holds what those resolutions emitted
    #[error("Tick {tick} aborted after {} events: {source}", .events.len())]
    TickAborted {
        tick: Tick,
        events: Vec<SimulationEvent>,
        source: Box<ArenaError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl ArenaError {
    /// Events applied before the failure, empty for every other variant
    pub fn partial_events(&self) -> &[SimulationEvent] {
        match self {
            ArenaError::TickAborted { events, .. } => events,
            _ => &[],
        }
    }

    /// The underlying error, unwrapping `TickAborted`
    pub fn root(&self) -> &ArenaError {
        match self {
            ArenaError::TickAborted { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;
