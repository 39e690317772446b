pub mod config;
pub mod error;
pub mod types;

pub use config::{ArenaConfig, KindSplit, RunConfig, SimulationConfig};
pub use error::{ArenaError, Result};
pub use types::{ArenaBounds, EntityId, Kind, SpeedRange, Tick, Vec2};
