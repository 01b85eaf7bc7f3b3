//! Simulation engine: the frame orchestrator.
//!
//! `SimulationEngine` owns the entity registry, processes queued commands,
//! runs all systems in a fixed order and produces a `FrameSnapshot` per frame.
//! Completely headless, so a seeded engine replays identically in tests.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use geowars_core::commands::PlayerCommand;
use geowars_core::components::Score;
use geowars_core::config::{ConfigError, GameConfig};
use geowars_core::constants::tags;
use geowars_core::enums::SystemKind;
use geowars_core::events::SimEvent;
use geowars_core::state::{FrameSnapshot, SystemToggles};
use geowars_core::types::EntityId;

use crate::ecs::EntityRegistry;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the registry and all per-run state.
pub struct SimulationEngine {
    config: GameConfig,
    registry: EntityRegistry,
    rng: ChaCha8Rng,
    frame: u64,
    last_enemy_spawn_frame: Option<u64>,
    paused: bool,
    running: bool,
    systems: SystemToggles,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Validate `config`, seed the generator and spawn the player.
    ///
    /// Uses `config.seed` when present, otherwise draws a fresh seed and
    /// logs it so the run can be replayed.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, fixed = config.seed.is_some(), "seeding simulation");
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Like [`new`](Self::new) but with a caller-supplied generator.
    pub fn with_rng(config: GameConfig, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = EntityRegistry::new();
        let player = world_setup::spawn_player(&mut registry, &config);
        registry.flush();
        tracing::info!(
            %player,
            width = config.window.width,
            height = config.window.height,
            fps = config.window.fps,
            "simulation ready"
        );

        Ok(Self {
            config,
            registry,
            rng,
            frame: 0,
            last_enemy_spawn_frame: None,
            paused: false,
            running: true,
            systems: SystemToggles::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a command for the input stage of the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one frame. `dt` is the elapsed wall time in seconds.
    ///
    /// Order: flush, commands, then (unless paused) spawner, movement,
    /// lifespan and collision, each behind its toggle. The snapshot is always
    /// built; the frame counter only advances while unpaused.
    pub fn tick(&mut self, dt: f32) -> FrameSnapshot {
        self.registry.flush();
        let player = self.player_id();

        self.process_commands(player);

        if !self.paused {
            self.run_systems(player, dt);
        }

        let events = std::mem::take(&mut self.events);
        let snapshot = systems::snapshot::build_snapshot(
            &self.registry,
            self.frame,
            self.score(),
            self.paused,
            self.systems,
            events,
        );
        tracing::trace!(
            frame = self.frame,
            entities = self.registry.len(),
            pending = self.registry.pending_len(),
            "frame done"
        );

        if !self.paused {
            self.frame += 1;
        }
        snapshot
    }

    /// Frames simulated so far (paused frames excluded).
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frame on which the spawner last created an enemy.
    pub fn last_enemy_spawn_frame(&self) -> Option<u64> {
        self.last_enemy_spawn_frame
    }

    /// The player's current score.
    pub fn score(&self) -> u32 {
        self.registry
            .get(self.player_id())
            .and_then(|p| p.get::<Score>())
            .map_or(0, |s| s.score)
    }

    /// False once a `Quit` command has been processed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn systems(&self) -> SystemToggles {
        self.systems
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// The player's id.
    ///
    /// # Panics
    /// If there is no player; the player is spawned at construction and is
    /// never removed, so this indicates a broken invariant.
    pub fn player_id(&self) -> EntityId {
        self.registry
            .last_tagged(tags::PLAYER)
            .unwrap_or_else(|| panic!("no '{}' entity in the registry", tags::PLAYER))
    }

    /// Mutable registry access for test setups.
    #[cfg(test)]
    pub(crate) fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Drain the queue. Control commands always apply; gameplay commands are
    /// dropped while the input system is disabled.
    fn process_commands(&mut self, player: EntityId) {
        while let Some(command) = self.command_queue.pop_front() {
            if command.is_control() {
                self.handle_control(player, command);
            } else if self.systems.input {
                systems::input::apply(
                    &mut self.registry,
                    &self.config,
                    player,
                    &command,
                    &mut self.events,
                );
            } else {
                tracing::trace!(?command, "input disabled, command dropped");
            }
        }
    }

    fn handle_control(&mut self, player: EntityId, command: PlayerCommand) {
        match command {
            PlayerCommand::TogglePause => {
                self.paused = !self.paused;
                tracing::debug!(paused = self.paused, frame = self.frame, "pause toggled");
            }
            PlayerCommand::SetSystemEnabled { system, enabled } => {
                self.systems.set(system, enabled);
                tracing::debug!(?system, enabled, "system toggled");
            }
            PlayerCommand::DestroyEntity { id } => {
                if id == player {
                    tracing::warn!(%id, "refusing to destroy the player");
                } else if self.registry.destroy(id) {
                    tracing::debug!(%id, "entity destroyed on request");
                } else {
                    tracing::debug!(%id, "destroy requested for unknown entity");
                }
            }
            PlayerCommand::Quit => {
                tracing::info!(frame = self.frame, score = self.score(), "quit requested");
                self.running = false;
            }
            PlayerCommand::Press { .. }
            | PlayerCommand::Release { .. }
            | PlayerCommand::Fire { .. } => {}
        }
    }

    /// Run all gameplay systems in order.
    fn run_systems(&mut self, player: EntityId, dt: f32) {
        let toggles = self.systems;
        let on = |kind: SystemKind| toggles.is_enabled(kind);

        // 1. Spawner
        if on(SystemKind::Spawner)
            && systems::spawner::run(
                &mut self.registry,
                &self.config,
                &mut self.rng,
                self.frame,
                &mut self.events,
            )
            .is_some()
        {
            self.last_enemy_spawn_frame = Some(self.frame);
        }
        // 2. Movement
        if on(SystemKind::Movement) {
            systems::movement::run(&mut self.registry, &self.config, player, dt);
        }
        // 3. Lifespan
        if on(SystemKind::Lifespan) {
            systems::lifespan::run(&mut self.registry, &mut self.events);
        }
        // 4. Collision + containment
        if on(SystemKind::Collision) {
            systems::collision::run(
                &mut self.registry,
                &self.config,
                &mut self.rng,
                player,
                &mut self.events,
            );
        }
    }
}
