//! Headless arena: the physics and overlap detection a renderer would
//! otherwise provide, plus a loop that drives the controller with them

pub mod output;
pub mod overlap;
pub mod physics;
pub mod runner;

pub use output::RunOutput;
pub use overlap::OverlapDetector;
pub use runner::ArenaRunner;
