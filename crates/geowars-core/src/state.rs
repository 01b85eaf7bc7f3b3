//! Frame snapshot: everything the render collaborator needs after a frame.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::{Shape, Transform};
use crate::enums::SystemKind;
use crate::events::SimEvent;
use crate::types::EntityId;

/// Which pipeline stages run. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemToggles {
    pub input: bool,
    pub spawner: bool,
    pub movement: bool,
    pub lifespan: bool,
    pub collision: bool,
    pub render: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            input: true,
            spawner: true,
            movement: true,
            lifespan: true,
            collision: true,
            render: true,
        }
    }
}

impl SystemToggles {
    pub fn is_enabled(&self, system: SystemKind) -> bool {
        match system {
            SystemKind::Input => self.input,
            SystemKind::Spawner => self.spawner,
            SystemKind::Movement => self.movement,
            SystemKind::Lifespan => self.lifespan,
            SystemKind::Collision => self.collision,
            SystemKind::Render => self.render,
        }
    }

    pub fn set(&mut self, system: SystemKind, enabled: bool) {
        let flag = match system {
            SystemKind::Input => &mut self.input,
            SystemKind::Spawner => &mut self.spawner,
            SystemKind::Movement => &mut self.movement,
            SystemKind::Lifespan => &mut self.lifespan,
            SystemKind::Collision => &mut self.collision,
            SystemKind::Render => &mut self.render,
        };
        *flag = enabled;
    }
}

/// Complete visible state handed to the renderer after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Frame number this snapshot was produced in.
    pub frame: u64,
    pub score: u32,
    pub paused: bool,
    pub systems: SystemToggles,
    /// Drawable entities. Empty when the render stage is disabled.
    pub entities: Vec<EntityView>,
    /// Live entity count per tag, in tag order.
    pub tag_counts: BTreeMap<String, usize>,
    pub events: Vec<SimEvent>,
}

/// A single live entity as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub tag: String,
    /// `false` when destroyed this frame but not yet reaped.
    pub alive: bool,
    pub transform: Transform,
    pub shape: Shape,
}
