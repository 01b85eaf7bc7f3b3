//! Snapshot system: builds a `FrameSnapshot` from the registry.
//!
//! Read-only over the registry; this is the render handoff.

use geowars_core::components::{Shape, Transform};
use geowars_core::events::SimEvent;
use geowars_core::state::{EntityView, FrameSnapshot, SystemToggles};

use crate::ecs::EntityRegistry;

/// Build the snapshot for `frame`. Drawable entities (those with both a
/// transform and a shape) are only collected while the render stage is on;
/// tag counts are always filled.
pub fn build_snapshot(
    registry: &EntityRegistry,
    frame: u64,
    score: u32,
    paused: bool,
    systems: SystemToggles,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    let entities = if systems.render {
        registry
            .entities()
            .iter()
            .filter_map(|e| {
                let transform = *e.get::<Transform>()?;
                let shape = *e.get::<Shape>()?;
                Some(EntityView {
                    id: e.id(),
                    tag: e.tag().to_string(),
                    alive: e.is_alive(),
                    transform,
                    shape,
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    let tag_counts = registry
        .tags()
        .map(|(tag, ids)| (tag.to_string(), ids.len()))
        .collect();

    FrameSnapshot {
        frame,
        score,
        paused,
        systems,
        entities,
        tag_counts,
        events,
    }
}
