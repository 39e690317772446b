//! Kind dominance rules

pub mod dominance;

pub use dominance::{is_opposing, resolve, OPPOSING_PAIRS};
