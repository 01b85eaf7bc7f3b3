//! Input-intent system: applies movement and fire commands to the player.
//!
//! Control commands (pause, toggles, debug destroy, quit) are handled by the
//! engine itself; this system only sees gameplay commands.

use geowars_core::commands::PlayerCommand;
use geowars_core::components::Input;
use geowars_core::config::GameConfig;
use geowars_core::enums::Direction;
use geowars_core::events::SimEvent;
use geowars_core::types::EntityId;

use crate::ecs::EntityRegistry;
use crate::world_setup;

/// Apply one gameplay command. Control commands are ignored here.
pub fn apply(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    player: EntityId,
    command: &PlayerCommand,
    events: &mut Vec<SimEvent>,
) {
    match *command {
        PlayerCommand::Press { direction } => set_direction(registry, player, direction, true),
        PlayerCommand::Release { direction } => set_direction(registry, player, direction, false),
        PlayerCommand::Fire { target } => {
            if let Some(id) = world_setup::spawn_bullet(registry, config, player, target) {
                tracing::debug!(%id, x = target.x, y = target.y, "bullet fired");
                events.push(SimEvent::BulletFired { id });
            }
        }
        PlayerCommand::TogglePause
        | PlayerCommand::SetSystemEnabled { .. }
        | PlayerCommand::DestroyEntity { .. }
        | PlayerCommand::Quit => {}
    }
}

fn set_direction(registry: &mut EntityRegistry, player: EntityId, direction: Direction, held: bool) {
    let Some(input) = registry.get_mut(player).and_then(|e| e.get_mut::<Input>()) else {
        return;
    };
    match direction {
        Direction::Up => input.up = held,
        Direction::Down => input.down = held,
        Direction::Left => input.left = held,
        Direction::Right => input.right = held,
    }
}
