//! Core types and definitions for the geowars simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, configuration, commands, events, snapshots and constants.
//! It contains no simulation logic and no windowing or rendering code.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
