//! Simulation engine for geowars.
//!
//! Owns the entity registry, runs the per-frame system pipeline and produces
//! `FrameSnapshot`s for whatever renders them.

pub mod ecs;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use geowars_core as core;
