//! Entity storage: tagged entities with a fixed component bundle, owned by
//! a registry that stages additions and defers removals to `flush`.

pub mod entity;
pub mod registry;

pub use entity::Entity;
pub use registry::EntityRegistry;
