//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the four movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A stage of the per-frame pipeline that can be switched off at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemKind {
    Input,
    Spawner,
    Movement,
    Lifespan,
    Collision,
    Render,
}

impl SystemKind {
    #[cfg(test)]
    pub(crate) const ALL: [SystemKind; 6] = [
        SystemKind::Input,
        SystemKind::Spawner,
        SystemKind::Movement,
        SystemKind::Lifespan,
        SystemKind::Collision,
        SystemKind::Render,
    ];
}
