//! The conversion engine: setup, collision resolution, win detection

pub mod collision;
pub mod controller;
pub mod events;
pub mod motion;
pub mod scoreboard;
pub mod setup;

pub use collision::{CollisionOutcome, CollisionResolver};
pub use controller::{SimulationController, SimulationState};
pub use events::{EventLog, SimulationEvent};
pub use scoreboard::{ScoreBoard, ScoreSnapshot};
