//! Game configuration, loaded once at startup and immutable afterwards.
//!
//! A config is either complete and valid or rejected: [`GameConfig::load`]
//! and [`GameConfig::from_toml_str`] validate before returning, so the
//! simulation never starts from a partial configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_FPS;
use crate::types::Playfield;

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [{section}] section: {reason}")]
    Invalid {
        section: &'static str,
        reason: String,
    },
}

fn invalid(section: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        section,
        reason: reason.into(),
    }
}

/// Playfield size and target frame rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub fill: [u8; 3],
    pub outline: [u8; 3],
    pub outline_thickness: f32,
    pub vertices: u32,
    /// Units per second.
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub outline: [u8; 3],
    pub outline_thickness: f32,
    pub vertices_min: u32,
    pub vertices_max: u32,
    /// Lifespan in frames of the fragments a destroyed enemy shatters into.
    pub small_lifespan: u32,
    /// Frames between enemy spawns.
    pub spawn_interval: u32,
    /// Per-axis velocity band, units per second.
    pub speed_min: f32,
    pub speed_max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletConfig {
    pub shape_radius: f32,
    pub collision_radius: f32,
    pub fill: [u8; 3],
    pub outline: [u8; 3],
    pub outline_thickness: f32,
    pub vertices: u32,
    /// Lifespan in frames.
    pub lifespan: u32,
    /// Units per second.
    pub speed: f32,
}

/// Complete configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
    /// RNG seed. A random seed is drawn (and logged) when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.window.width as f32, self.window.height as f32)
    }

    /// Seconds per frame at the configured frame rate.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.window.fps.max(1) as f32
    }

    /// Check every section; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.width == 0 || w.height == 0 {
            return Err(invalid("window", "width and height must be positive"));
        }
        if w.fps == 0 {
            return Err(invalid("window", "fps must be positive"));
        }

        let field = self.playfield();

        let p = &self.player;
        check_radii("player", p.shape_radius, p.collision_radius, field)?;
        check_vertices("player", p.vertices)?;
        check_non_negative("player", "outline_thickness", p.outline_thickness)?;
        check_speed("player", p.speed)?;

        let e = &self.enemy;
        check_radii("enemy", e.shape_radius, e.collision_radius, field)?;
        check_vertices("enemy", e.vertices_min)?;
        check_non_negative("enemy", "outline_thickness", e.outline_thickness)?;
        if e.vertices_min > e.vertices_max {
            return Err(invalid(
                "enemy",
                format!(
                    "vertices_min ({}) exceeds vertices_max ({})",
                    e.vertices_min, e.vertices_max
                ),
            ));
        }
        if !e.speed_min.is_finite() || !e.speed_max.is_finite() || e.speed_min > e.speed_max {
            return Err(invalid(
                "enemy",
                format!(
                    "speed band [{}, {}] is not a finite ascending range",
                    e.speed_min, e.speed_max
                ),
            ));
        }
        if e.small_lifespan == 0 {
            return Err(invalid("enemy", "small_lifespan must be at least one frame"));
        }
        if e.spawn_interval == 0 {
            return Err(invalid("enemy", "spawn_interval must be at least one frame"));
        }
        let diameter = 2.0 * e.shape_radius;
        if diameter >= w.width as f32 || diameter >= w.height as f32 {
            return Err(invalid(
                "enemy",
                format!(
                    "shape_radius {} does not fit a {}x{} playfield",
                    e.shape_radius, w.width, w.height
                ),
            ));
        }

        let b = &self.bullet;
        check_radii("bullet", b.shape_radius, b.collision_radius, field)?;
        check_vertices("bullet", b.vertices)?;
        check_non_negative("bullet", "outline_thickness", b.outline_thickness)?;
        if b.lifespan == 0 {
            return Err(invalid("bullet", "lifespan must be at least one frame"));
        }
        check_speed("bullet", b.speed)?;

        Ok(())
    }
}

/// Radii must be finite and positive, and the hitbox must fit inside the
/// playfield or containment has no valid position to clamp to.
fn check_radii(
    section: &'static str,
    shape: f32,
    collision: f32,
    field: Playfield,
) -> Result<(), ConfigError> {
    let positive = |r: f32| r.is_finite() && r > 0.0;
    if !positive(shape) || !positive(collision) {
        return Err(invalid(
            section,
            format!("radii must be finite and positive (shape {shape}, collision {collision})"),
        ));
    }
    if 2.0 * collision >= field.width.min(field.height) {
        return Err(invalid(
            section,
            format!(
                "collision_radius {collision} does not fit a {}x{} playfield",
                field.width, field.height
            ),
        ));
    }
    Ok(())
}

fn check_speed(section: &'static str, speed: f32) -> Result<(), ConfigError> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(invalid(
            section,
            format!("speed must be finite and positive, got {speed}"),
        ));
    }
    Ok(())
}

fn check_vertices(section: &'static str, vertices: u32) -> Result<(), ConfigError> {
    if vertices < 3 {
        return Err(invalid(
            section,
            format!("a polygon needs at least 3 vertices, got {vertices}"),
        ));
    }
    Ok(())
}

fn check_non_negative(section: &'static str, field: &str, value: f32) -> Result<(), ConfigError> {
    if !(value >= 0.0) {
        return Err(invalid(section, format!("{field} must not be negative")));
    }
    Ok(())
}

impl Default for GameConfig {
    /// The stock arcade tuning: 1280x720 at 60 fps.
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 1280,
                height: 720,
                fps: DEFAULT_FPS,
            },
            player: PlayerConfig {
                shape_radius: 32.0,
                collision_radius: 32.0,
                fill: [5, 5, 5],
                outline: [255, 0, 0],
                outline_thickness: 4.0,
                vertices: 8,
                speed: 300.0,
            },
            enemy: EnemyConfig {
                shape_radius: 32.0,
                collision_radius: 32.0,
                outline: [255, 255, 255],
                outline_thickness: 2.0,
                vertices_min: 3,
                vertices_max: 8,
                small_lifespan: 90,
                spawn_interval: 60,
                speed_min: 60.0,
                speed_max: 180.0,
            },
            bullet: BulletConfig {
                shape_radius: 10.0,
                collision_radius: 10.0,
                fill: [255, 255, 255],
                outline: [255, 255, 255],
                outline_thickness: 2.0,
                vertices: 20,
                lifespan: 90,
                speed: 600.0,
            },
            seed: None,
        }
    }
}
