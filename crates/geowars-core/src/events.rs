//! Events emitted by the simulation for UI, audio and logging feedback.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Something noteworthy that happened during a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The spawner created a big enemy.
    EnemySpawned { id: EntityId },
    /// The player fired.
    BulletFired { id: EntityId },
    /// A bullet killed a big enemy, which shattered into `fragments` small enemies.
    EnemyDestroyed { id: EntityId, fragments: u32 },
    /// A bullet killed a small enemy.
    SmallEnemyDestroyed { id: EntityId },
    /// The player touched an enemy and was sent back to the centre.
    PlayerRespawned,
    /// A lifespan ran out.
    EntityExpired { id: EntityId },
}
