//! Entity storage

pub mod entity;
pub mod registry;

pub use entity::Entity;
pub use registry::EntityRegistry;
