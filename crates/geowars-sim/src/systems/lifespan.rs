//! Lifespan system: counts finite-life entities down, fades them and expires them.

use geowars_core::components::{Lifespan, Shape};
use geowars_core::events::SimEvent;

use crate::ecs::EntityRegistry;

/// Decrement every lifespan by one frame (never below zero), set the shape's
/// alpha to the remaining fraction, and destroy entities that reach zero.
pub fn run(registry: &mut EntityRegistry, events: &mut Vec<SimEvent>) {
    for entity in registry.entities_mut() {
        let Some(life) = entity.get_mut::<Lifespan>() else {
            continue;
        };
        life.remaining = life.remaining.saturating_sub(1);
        let life = *life;

        if let Some(shape) = entity.get_mut::<Shape>() {
            let alpha = fade_alpha(life);
            shape.fill = shape.fill.with_alpha(alpha);
            shape.outline = shape.outline.with_alpha(alpha);
        }

        if life.remaining == 0 && entity.is_alive() {
            entity.destroy();
            events.push(SimEvent::EntityExpired { id: entity.id() });
        }
    }
}

/// `clamp(remaining / total, 0, 1) * 255`.
pub fn fade_alpha(life: Lifespan) -> u8 {
    let ratio = (life.remaining as f32 / life.total.max(1) as f32).clamp(0.0, 1.0);
    (ratio * 255.0) as u8
}
