//! A single mobile unit in the arena

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, Kind, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Only the registry changes this, so the partition it sits in and the
    /// kind it reports never disagree.
    pub(super) kind: Kind,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Entity {
    pub fn new(id: EntityId, kind: Kind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            id,
            kind,
            position,
            velocity,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
