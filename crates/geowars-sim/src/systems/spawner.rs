//! Enemy spawner: one big enemy every `spawn_interval` frames.

use rand::Rng;

use geowars_core::config::GameConfig;
use geowars_core::events::SimEvent;
use geowars_core::types::EntityId;

use crate::ecs::EntityRegistry;
use crate::world_setup;

/// Spawn an enemy if `frame` falls on the spawn interval (frame 0 included).
/// The cadence is counted in frames, not seconds.
pub fn run<R: Rng>(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut R,
    frame: u64,
    events: &mut Vec<SimEvent>,
) -> Option<EntityId> {
    let interval = u64::from(config.enemy.spawn_interval.max(1));
    if frame % interval != 0 {
        return None;
    }

    let id = world_setup::spawn_enemy(registry, config, rng);
    tracing::debug!(%id, frame, "enemy spawned");
    events.push(SimEvent::EnemySpawned { id });
    Some(id)
}
