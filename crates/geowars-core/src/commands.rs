//! Commands sent by the input-capture collaborator to the simulation.
//!
//! Commands are queued and applied at the input stage of the next frame.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, SystemKind};
use crate::types::{EntityId, Vec2};

/// All possible player and operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// A direction key went down.
    Press { direction: Direction },
    /// A direction key went up.
    Release { direction: Direction },

    // --- Weapons ---
    /// Primary fire toward a point in playfield coordinates.
    Fire { target: Vec2 },

    // --- Simulation control ---
    /// Freeze or unfreeze the gameplay systems.
    TogglePause,
    /// Switch a pipeline stage on or off.
    SetSystemEnabled { system: SystemKind, enabled: bool },
    /// Mark an entity destroyed from the debug overlay.
    DestroyEntity { id: EntityId },
    /// Raise the close signal; the frame loop stops after this frame.
    Quit,
}

impl PlayerCommand {
    /// Control commands are honoured even while the input system is disabled.
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            PlayerCommand::TogglePause
                | PlayerCommand::SetSystemEnabled { .. }
                | PlayerCommand::DestroyEntity { .. }
                | PlayerCommand::Quit
        )
    }
}
