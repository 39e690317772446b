//! Collision outcome resolution

use rand::Rng;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{EntityId, Kind, SpeedRange, Vec2};
use crate::ecs::registry::EntityRegistry;
use crate::rules::dominance;
use crate::simulation::motion::random_velocity;
use crate::simulation::scoreboard::{ScoreBoard, ScoreSnapshot};

/// What a converting collision changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOutcome {
    pub winner: EntityId,
    pub loser: EntityId,
    pub winning_kind: Kind,
    /// Kind the loser had before it converted
    pub losing_kind: Kind,
    pub winner_velocity: Vec2,
    pub loser_velocity: Vec2,
    /// Counts right after the conversion
    pub scores: ScoreSnapshot,
}

/// Applies dominance to a colliding pair and relaunches both entities
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    speed: SpeedRange,
}

impl CollisionResolver {
    pub fn new(speed: SpeedRange) -> Self {
        Self { speed }
    }

    /// Resolve one collision between `a` and `b`
    ///
    /// Returns `Ok(None)` when both already share a kind, which happens when
    /// an earlier conversion in the same tick touched one of them. Both
    /// entities get fresh, independently drawn velocities so neither is left
    /// stalled at the contact point.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        registry: &mut EntityRegistry,
        a: EntityId,
        b: EntityId,
        rng: &mut R,
    ) -> Result<Option<CollisionOutcome>> {
        let kind_a = registry.kind_of(a).ok_or(ArenaError::EntityNotFound(a))?;
        let kind_b = registry.kind_of(b).ok_or(ArenaError::EntityNotFound(b))?;

        if !dominance::is_opposing(kind_a, kind_b) {
            return Ok(None);
        }

        let winning_kind = dominance::resolve(kind_a, kind_b);
        let (winner, loser) = if winning_kind == kind_a { (a, b) } else { (b, a) };

        let losing_kind = registry.reclassify(loser, winning_kind)?;

        let winner_velocity = self.relaunch(registry, winner, rng)?;
        let loser_velocity = self.relaunch(registry, loser, rng)?;

        let scores = ScoreBoard::snapshot(registry);

        tracing::debug!(
            "{} ({}) converted {} ({} -> {}); {}",
            winner,
            winning_kind,
            loser,
            losing_kind,
            winning_kind,
            scores
        );

        Ok(Some(CollisionOutcome {
            winner,
            loser,
            winning_kind,
            losing_kind,
            winner_velocity,
            loser_velocity,
            scores,
        }))
    }

    fn relaunch<R: Rng + ?Sized>(
        &self,
        registry: &mut EntityRegistry,
        id: EntityId,
        rng: &mut R,
    ) -> Result<Vec2> {
        let velocity = random_velocity(rng, self.speed);
        let entity = registry.get_mut(id).ok_or(ArenaError::EntityNotFound(id))?;
        entity.velocity = velocity;
        Ok(velocity)
    }
}
