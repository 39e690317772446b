//! Drift with elastic wall bounces; no gravity, no friction

use crate::core::types::ArenaBounds;
use crate::ecs::entity::Entity;

/// Advance every entity by `dt` seconds, bouncing off the arena walls
///
/// An entity's collision circle (`radius`) stays inside the arena. A wall
/// hit mirrors the overshoot back inside and flips that velocity component,
/// so speed is unchanged.
pub fn step<'a>(
    entities: impl Iterator<Item = &'a mut Entity>,
    bounds: &ArenaBounds,
    radius: f32,
    dt: f32,
) {
    let (lo_x, hi_x) = (bounds.min.x + radius, bounds.max.x - radius);
    let (lo_y, hi_y) = (bounds.min.y + radius, bounds.max.y - radius);

    for entity in entities {
        entity.position = entity.position + entity.velocity * dt;
        bounce_axis(&mut entity.position.x, &mut entity.velocity.x, lo_x, hi_x);
        bounce_axis(&mut entity.position.y, &mut entity.velocity.y, lo_y, hi_y);
    }
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32) {
    if *pos < lo {
        *pos = (2.0 * lo - *pos).min(hi);
        *vel = vel.abs();
    } else if *pos > hi {
        *pos = (2.0 * hi - *pos).max(lo);
        *vel = -vel.abs();
    }
}
