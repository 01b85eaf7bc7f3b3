//! Systems that operate on the entity registry each frame.
//!
//! Systems are plain functions over `&mut EntityRegistry` (or `&EntityRegistry`
//! for read-only ones). They own no state; the engine passes in the frame
//! counter, config, RNG and event buffer they need.

pub mod collision;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod snapshot;
pub mod spawner;
