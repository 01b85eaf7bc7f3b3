//! Scripted stand-in for a human at the keyboard.
//!
//! Steers away from the closest threat when it gets near, otherwise holds
//! still, and fires at the closest big or small enemy at a fixed cadence.
//! Emits press/release commands only when the held set changes, the way a
//! window event source would.

use geowars_core::commands::PlayerCommand;
use geowars_core::components::Transform;
use geowars_core::constants::tags;
use geowars_core::enums::Direction;
use geowars_core::types::Vec2;
use geowars_sim::SimulationEngine;

use crate::game_loop::InputSource;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Fire once every this many frames.
    fire_every: u64,
    /// Start evading when a threat's centre is closer than this.
    danger_radius: f32,
    held: [bool; 4],
}

impl Autopilot {
    pub fn new(fire_every: u64, danger_radius: f32) -> Self {
        Self {
            fire_every: fire_every.max(1),
            danger_radius,
            held: [false; 4],
        }
    }

    /// Which of up/down/left/right to hold to move from `player` away from
    /// `threat`, if it is within the danger radius.
    fn evasion(&self, player: Vec2, threat: Option<Vec2>) -> [bool; 4] {
        let Some(threat) = threat else {
            return [false; 4];
        };
        let away = player - threat;
        if away.length_squared() > self.danger_radius * self.danger_radius {
            return [false; 4];
        }
        [away.y < 0.0, away.y > 0.0, away.x < 0.0, away.x > 0.0]
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(10, 150.0)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, engine: &SimulationEngine) -> Vec<PlayerCommand> {
        let registry = engine.registry();
        let Some(player) = registry
            .get(engine.player_id())
            .and_then(|p| p.get::<Transform>())
            .map(|t| t.position)
        else {
            return Vec::new();
        };

        let nearest = registry
            .tagged(tags::ENEMY)
            .chain(registry.tagged(tags::SMALL_ENEMY))
            .filter(|e| e.is_alive())
            .filter_map(|e| e.get::<Transform>().map(|t| t.position))
            .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)));

        let mut commands = Vec::new();
        let wanted = self.evasion(player, nearest);
        for (i, direction) in DIRECTIONS.into_iter().enumerate() {
            if wanted[i] != self.held[i] {
                commands.push(if wanted[i] {
                    PlayerCommand::Press { direction }
                } else {
                    PlayerCommand::Release { direction }
                });
            }
        }
        self.held = wanted;

        if let Some(target) = nearest {
            if engine.frame() % self.fire_every == 0 {
                commands.push(PlayerCommand::Fire { target });
            }
        }
        commands
    }
}
