//! RPS Arena - rock-paper-scissors population simulation
//!
//! Entities of three kinds drift around a bounded arena. When two of
//! different kinds touch, the loser converts to the winner's kind, until one
//! kind holds the whole population.

pub mod arena;
pub mod core;
pub mod ecs;
pub mod rules;
pub mod simulation;
pub mod spatial;
