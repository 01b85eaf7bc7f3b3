//! Headless runner for the geowars simulation.
//!
//! Wires the engine to a scripted input source and a log renderer and drives
//! it through a frame loop with a close signal.

pub mod autopilot;
pub mod game_loop;
pub mod render;
