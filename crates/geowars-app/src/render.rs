//! Headless renderer that reports snapshots through `tracing`.

use geowars_core::events::SimEvent;
use geowars_core::state::FrameSnapshot;

use crate::game_loop::Renderer;

/// Logs a one-line summary every `every` frames and each noteworthy event
/// at debug level. Keeps running totals for the end-of-run report.
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    pub presented: u64,
    pub kills: u32,
    pub respawns: u32,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            presented: 0,
            kills: 0,
            respawns: 0,
        }
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, snapshot: &FrameSnapshot) {
        self.presented += 1;

        for event in &snapshot.events {
            match event {
                SimEvent::EnemyDestroyed { .. } | SimEvent::SmallEnemyDestroyed { .. } => {
                    self.kills += 1
                }
                SimEvent::PlayerRespawned => self.respawns += 1,
                _ => {}
            }
            tracing::debug!(frame = snapshot.frame, ?event);
        }

        if snapshot.frame % self.every == 0 && !snapshot.paused {
            let counts = snapshot
                .tag_counts
                .iter()
                .map(|(tag, n)| format!("{tag}={n}"))
                .collect::<Vec<_>>()
                .join(" ");
            tracing::info!(
                frame = snapshot.frame,
                score = snapshot.score,
                drawn = snapshot.entities.len(),
                "{counts}"
            );
        }
    }
}
