//! Entity registry - owns every live entity, partitioned by kind

use ahash::{AHashMap, AHashSet};

use crate::core::error::{ArenaError, Result};
use crate::core::types::{EntityId, Kind};
use crate::ecs::entity::Entity;

/// Live entities split into one partition per kind
///
/// `records` is the reverse lookup: an id maps to its entity, and the
/// entity's kind names the partition that must hold the id.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    records: AHashMap<EntityId, Entity>,
    partitions: [Vec<EntityId>; 3],
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` into the `kind` partition
    pub fn add_entity(&mut self, mut entity: Entity, kind: Kind) -> Result<()> {
        if let Some(existing) = self.records.get(&entity.id) {
            return Err(ArenaError::InvariantViolation(format!(
                "entity {} is already registered as {}",
                entity.id, existing.kind
            )));
        }

        entity.kind = kind;
        self.partitions[kind.index()].push(entity.id);
        self.records.insert(entity.id, entity);
        Ok(())
    }

    /// Remove an entity from whichever partition holds it
    ///
    /// Removing an entity that is in no partition is a caller bug (usually a
    /// stale id) and fails instead of doing nothing.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<Entity> {
        let kind = match self.records.get(&id) {
            Some(entity) => entity.kind,
            None => {
                return Err(ArenaError::InvariantViolation(format!(
                    "entity {} is in no partition",
                    id
                )))
            }
        };

        let slot = self.slot_in(kind, id)?;
        self.partitions[kind.index()].remove(slot);

        self.records.remove(&id).ok_or_else(|| {
            ArenaError::InvariantViolation(format!("entity {} vanished during removal", id))
        })
    }

    /// Move an entity to another partition in one step
    ///
    /// The entity keeps its id and record; only its kind changes. Returns
    /// the kind it had before.
    pub fn reclassify(&mut self, id: EntityId, new_kind: Kind) -> Result<Kind> {
        let old_kind = self
            .records
            .get(&id)
            .map(|e| e.kind)
            .ok_or(ArenaError::EntityNotFound(id))?;

        if old_kind == new_kind {
            return Ok(old_kind);
        }

        let slot = self.slot_in(old_kind, id)?;
        self.partitions[old_kind.index()].remove(slot);
        self.partitions[new_kind.index()].push(id);

        if let Some(entity) = self.records.get_mut(&id) {
            entity.kind = new_kind;
        }

        Ok(old_kind)
    }

    fn slot_in(&self, kind: Kind, id: EntityId) -> Result<usize> {
        self.partitions[kind.index()]
            .iter()
            .position(|&e| e == id)
            .ok_or_else(|| {
                ArenaError::InvariantViolation(format!(
                    "entity {} claims kind {} but is missing from that partition",
                    id, kind
                ))
            })
    }

    pub fn count_of(&self, kind: Kind) -> usize {
        self.partitions[kind.index()].len()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Entities of one kind, in the order they joined the partition
    pub fn all_of(&self, kind: Kind) -> impl Iterator<Item = &Entity> + '_ {
        self.partitions[kind.index()]
            .iter()
            .filter_map(move |id| self.records.get(id))
    }

    pub fn ids_of(&self, kind: Kind) -> &[EntityId] {
        &self.partitions[kind.index()]
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn kind_of(&self, id: EntityId) -> Option<Kind> {
        self.records.get(&id).map(|e| e.kind)
    }

    /// Every entity, partition by partition
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        Kind::ALL.into_iter().flat_map(move |kind| self.all_of(kind))
    }

    /// Motion access for physics; kinds stay registry-owned
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.records.values_mut()
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.records.get_mut(&id)
    }

    /// Check that partitions are disjoint, agree with the records, and
    /// together hold exactly the live set
    pub fn verify(&self) -> Result<()> {
        let mut seen = AHashSet::with_capacity(self.records.len());

        for kind in Kind::ALL {
            for &id in &self.partitions[kind.index()] {
                if !seen.insert(id) {
                    return Err(ArenaError::InvariantViolation(format!(
                        "entity {} appears in more than one partition",
                        id
                    )));
                }
                match self.records.get(&id) {
                    Some(entity) if entity.kind == kind => {}
                    Some(entity) => {
                        return Err(ArenaError::InvariantViolation(format!(
                            "entity {} sits in the {} partition but is {}",
                            id, kind, entity.kind
                        )))
                    }
                    None => {
                        return Err(ArenaError::InvariantViolation(format!(
                            "partition {} holds unknown entity {}",
                            kind, id
                        )))
                    }
                }
            }
        }

        if seen.len() != self.records.len() {
            return Err(ArenaError::InvariantViolation(format!(
                "{} entities registered but {} partitioned",
                self.records.len(),
                seen.len()
            )));
        }

        Ok(())
    }
}
