//! Collision system.
//!
//! Resolves pairs in a fixed order each frame:
//! 1. bullet × enemy: both destroyed, enemy shatters, +25 points
//! 2. bullet × smallEnemy: both destroyed, +50 points
//! 3. player × enemy, then player × smallEnemy: player respawns, enemy survives
//!
//! then keeps every collidable entity inside the playfield.
//!
//! An entity destroyed earlier in the frame takes part in no later pair, so a
//! bullet scores at most once and an enemy shatters at most once.

use rand::Rng;

use geowars_core::components::{Collision, Score, Transform};
use geowars_core::config::GameConfig;
use geowars_core::constants::{tags, BIG_ENEMY_POINTS, SMALL_ENEMY_POINTS};
use geowars_core::events::SimEvent;
use geowars_core::types::{EntityId, Playfield, Vec2};

use crate::ecs::{Entity, EntityRegistry};
use crate::world_setup;

/// Circle-circle overlap: `|pa - pb|² <= (ra + rb)²`.
/// Entities missing a transform or a collision radius never collide.
pub fn collides(a: &Entity, b: &Entity) -> bool {
    match (
        a.get::<Transform>(),
        a.get::<Collision>(),
        b.get::<Transform>(),
        b.get::<Collision>(),
    ) {
        (Some(ta), Some(ca), Some(tb), Some(cb)) => {
            overlaps(ta.position, ca.radius, tb.position, cb.radius)
        }
        _ => false,
    }
}

/// Touching circles count as overlapping.
pub fn overlaps(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    pa.distance_squared(pb) <= reach * reach
}

/// Resolve this frame's collisions, then contain everything in the playfield.
pub fn run<R: Rng>(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut R,
    player: EntityId,
    events: &mut Vec<SimEvent>,
) {
    // Tag buckets only change at flush, but fan-out borrows the registry
    // mutably, so iterate over copies.
    let bullets = registry.tagged_ids(tags::BULLET).to_vec();
    let enemies = registry.tagged_ids(tags::ENEMY).to_vec();
    let smalls = registry.tagged_ids(tags::SMALL_ENEMY).to_vec();

    let mut points = 0;
    for &bullet in &bullets {
        if !registry.is_alive(bullet) {
            continue;
        }

        if let Some(enemy) = first_hit(registry, bullet, &enemies) {
            registry.destroy(bullet);
            registry.destroy(enemy);
            let fragments = world_setup::spawn_small_enemies(registry, config, rng, enemy);
            points += BIG_ENEMY_POINTS;
            tracing::debug!(%bullet, %enemy, fragments, "enemy destroyed");
            events.push(SimEvent::EnemyDestroyed {
                id: enemy,
                fragments,
            });
            continue;
        }

        if let Some(small) = first_hit(registry, bullet, &smalls) {
            registry.destroy(bullet);
            registry.destroy(small);
            points += SMALL_ENEMY_POINTS;
            tracing::debug!(%bullet, %small, "small enemy destroyed");
            events.push(SimEvent::SmallEnemyDestroyed { id: small });
        }
    }

    if points > 0 {
        if let Some(score) = registry.get_mut(player).and_then(|e| e.get_mut::<Score>()) {
            score.score += points;
        }
    }

    let mut respawned = false;
    for &enemy in enemies.iter().chain(&smalls) {
        let hit = match (registry.get(player), registry.get(enemy)) {
            (Some(p), Some(e)) => e.is_alive() && collides(p, e),
            _ => false,
        };
        if hit {
            world_setup::respawn_player(registry, config, player);
            respawned = true;
        }
    }
    if respawned {
        tracing::debug!(%player, "player hit, respawning");
        events.push(SimEvent::PlayerRespawned);
    }

    contain(registry, config.playfield());
}

/// First live target in `targets` (in bucket order) overlapping `bullet`.
fn first_hit(registry: &EntityRegistry, bullet: EntityId, targets: &[EntityId]) -> Option<EntityId> {
    let b = registry.get(bullet)?;
    targets.iter().copied().find(|&id| {
        registry
            .get(id)
            .is_some_and(|target| target.is_alive() && collides(b, target))
    })
}

/// Clamp each collidable entity into `[r, bound - r]` per axis, inverting the
/// velocity component of any axis that was clamped.
pub fn contain(registry: &mut EntityRegistry, field: Playfield) {
    for entity in registry.entities_mut() {
        let Some(r) = entity.get::<Collision>().map(|c| c.radius) else {
            continue;
        };
        let Some(t) = entity.get_mut::<Transform>() else {
            continue;
        };

        if t.position.x - r < 0.0 {
            t.position.x = r;
            t.velocity.x = -t.velocity.x;
        } else if t.position.x + r > field.width {
            t.position.x = field.width - r;
            t.velocity.x = -t.velocity.x;
        }

        if t.position.y - r < 0.0 {
            t.position.y = r;
            t.velocity.y = -t.velocity.y;
        } else if t.position.y + r > field.height {
            t.position.y = field.height - r;
            t.velocity.y = -t.velocity.y;
        }
    }
}
