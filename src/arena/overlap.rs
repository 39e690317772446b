//! Opposing-kind overlap detection

use crate::core::types::EntityId;
use crate::ecs::registry::EntityRegistry;
use crate::rules::dominance::OPPOSING_PAIRS;
use crate::spatial::sparse_hash::SparseHashGrid;

/// Finds opposing-kind pairs whose collision circles touch
///
/// The grid's cell size equals the contact distance, so the 3x3 neighbor
/// block around an entity holds every candidate.
pub struct OverlapDetector {
    radius: f32,
    grid: SparseHashGrid,
}

impl OverlapDetector {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            grid: SparseHashGrid::new(radius * 2.0),
        }
    }

    /// All overlapping opposing pairs, grouped Rock-Paper, Paper-Scissors,
    /// Scissors-Rock, each unordered pair once
    ///
    /// Same-kind overlaps are never reported.
    pub fn detect(&mut self, registry: &EntityRegistry) -> Vec<(EntityId, EntityId)> {
        let contact = self.radius * 2.0;
        let contact_sq = contact * contact;

        self.grid.rebuild(registry.iter().map(|e| (e.id, e.position)));

        let mut pairs = Vec::new();
        for (first, second) in OPPOSING_PAIRS {
            for a in registry.all_of(first) {
                for b_id in self.grid.query_neighbors(a.position) {
                    let Some(b) = registry.get(b_id) else {
                        continue;
                    };
                    if b.kind() == second
                        && a.position.distance_squared(&b.position) <= contact_sq
                    {
                        pairs.push((a.id, b.id));
                    }
                }
            }
        }
        pairs
    }
}
