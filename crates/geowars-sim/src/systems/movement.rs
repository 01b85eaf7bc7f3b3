//! Movement system.
//!
//! Recomputes the player's velocity from its input flags, then integrates
//! every transform: position += velocity * dt, angle += angular_velocity * dt.

use geowars_core::components::{Input, Transform};
use geowars_core::config::GameConfig;
use geowars_core::types::{EntityId, Vec2};

use crate::ecs::EntityRegistry;

/// Run player steering and kinematic integration. `dt` is in seconds.
pub fn run(registry: &mut EntityRegistry, config: &GameConfig, player: EntityId, dt: f32) {
    if let Some(entity) = registry.get_mut(player) {
        let input = entity.get::<Input>().copied().unwrap_or_default();
        if let Some(transform) = entity.get_mut::<Transform>() {
            transform.velocity = intent_velocity(input, config.player.speed);
        }
    }

    for entity in registry.entities_mut() {
        if let Some(t) = entity.get_mut::<Transform>() {
            t.position += t.velocity * dt;
            t.angle += t.angular_velocity * dt;
        }
    }
}

/// Velocity implied by the held directions. Diagonals are normalized so
/// they are not faster; nothing held (or opposite keys cancelling) is zero.
pub fn intent_velocity(input: Input, speed: f32) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    dir.normalize_or_zero() * speed
}
