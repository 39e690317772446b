//! Initial population

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{EntityId, Kind};
use crate::ecs::entity::Entity;
use crate::ecs::registry::EntityRegistry;
use crate::simulation::motion::{random_position, random_velocity};

/// Build the starting registry from a validated config
///
/// Kinds are spawned in Rock, Paper, Scissors order with sequential ids,
/// each at a random point in the arena with a random launch velocity.
pub fn populate<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<EntityRegistry> {
    config.validate()?;

    let split = config.split();
    let mut registry = EntityRegistry::new();
    let mut next_id = 0u32;

    for kind in Kind::ALL {
        for _ in 0..split.count(kind) {
            let position = random_position(rng, &config.bounds);
            let velocity = random_velocity(rng, config.speed);
            registry.add_entity(Entity::new(EntityId(next_id), kind, position, velocity), kind)?;
            next_id += 1;
        }
    }

    tracing::info!(
        "Spawned {} entities ({} rock, {} paper, {} scissors)",
        registry.total_count(),
        split.rock,
        split.paper,
        split.scissors
    );

    Ok(registry)
}
