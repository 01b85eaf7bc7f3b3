//! Simulation constants and tuning parameters that are not configurable.

// --- Tags ---

/// Entity tags used for indexed queries.
pub mod tags {
    pub const PLAYER: &str = "player";
    pub const ENEMY: &str = "enemy";
    pub const SMALL_ENEMY: &str = "smallEnemy";
    pub const BULLET: &str = "bullet";
}

// --- Scoring ---

/// Points for shooting a big enemy.
pub const BIG_ENEMY_POINTS: u32 = 25;

/// Points for shooting a small enemy fragment.
pub const SMALL_ENEMY_POINTS: u32 = 50;

// --- Spin ---

/// Enemy angular velocity is sampled from [-MAX, MAX] degrees per second.
pub const ENEMY_ANGULAR_VELOCITY_MAX: f32 = 180.0;

/// Sampled angular velocities with a smaller magnitude are pushed out to this floor.
pub const ENEMY_ANGULAR_VELOCITY_FLOOR: f32 = 30.0;

/// Player spin in degrees per second.
pub const PLAYER_ANGULAR_VELOCITY: f32 = 180.0;

// --- Colour ---

/// Lowest value sampled for each channel of an enemy's fill (never pure black).
pub const ENEMY_FILL_CHANNEL_MIN: u8 = 1;

// --- Defaults ---

/// Frame rate assumed when a config omits the window section's fps.
pub const DEFAULT_FPS: u32 = 60;
