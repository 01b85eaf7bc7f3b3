//! Entity spawn factories.
//!
//! Creates the player, enemies, enemy fragments and bullets with their
//! component bundles. Every random decision draws from the generator passed
//! in, so a seeded generator reproduces the same entities.

use rand::Rng;

use geowars_core::components::*;
use geowars_core::config::GameConfig;
use geowars_core::constants::*;
use geowars_core::types::{Color, EntityId, Vec2};

use crate::ecs::EntityRegistry;

/// Spawn the player at the centre of the playfield.
pub fn spawn_player(registry: &mut EntityRegistry, config: &GameConfig) -> EntityId {
    let p = &config.player;
    let player = registry.add_entity(tags::PLAYER);
    player.add(Transform::new(
        config.playfield().center(),
        Vec2::ZERO,
        PLAYER_ANGULAR_VELOCITY,
    ));
    player.add(Shape {
        radius: p.shape_radius,
        vertex_count: p.vertices,
        fill: p.fill.into(),
        outline: p.outline.into(),
        outline_thickness: p.outline_thickness,
    });
    player.add(Collision {
        radius: p.collision_radius,
    });
    player.add(Input::default());
    player.add(Score::default());
    player.id()
}

/// Teleport the player back to the centre and stop it.
pub fn respawn_player(registry: &mut EntityRegistry, config: &GameConfig, player: EntityId) {
    let center = config.playfield().center();
    if let Some(transform) = registry
        .get_mut(player)
        .and_then(|e| e.get_mut::<Transform>())
    {
        transform.position = center;
        transform.velocity = Vec2::ZERO;
    }
}

/// Spawn a big enemy somewhere fully inside the playfield.
pub fn spawn_enemy<R: Rng>(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut R,
) -> EntityId {
    let e = &config.enemy;
    let field = config.playfield();

    let vertex_count = rng.gen_range(e.vertices_min..=e.vertices_max);

    // Inset by the radius so a fresh enemy never overlaps a wall.
    let r = e.shape_radius;
    let position = Vec2::new(
        rng.gen_range(r..=field.width - r),
        rng.gen_range(r..=field.height - r),
    );
    let velocity = sample_velocity(rng, config);
    let angular_velocity = sample_angular_velocity(rng);
    let fill = sample_fill(rng);

    let enemy = registry.add_entity(tags::ENEMY);
    enemy.add(Transform::new(position, velocity, angular_velocity));
    enemy.add(Shape {
        radius: e.shape_radius,
        vertex_count,
        fill,
        outline: e.outline.into(),
        outline_thickness: e.outline_thickness,
    });
    enemy.add(Collision {
        radius: e.collision_radius,
    });
    enemy.id()
}

/// Shatter `parent` into one small enemy per polygon vertex.
///
/// Fragments start at the parent's position with its colours, half its
/// radii and a fresh velocity each; they share one sampled spin and expire
/// after `enemy.small_lifespan` frames. Returns the number spawned.
pub fn spawn_small_enemies<R: Rng>(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut R,
    parent: EntityId,
) -> u32 {
    let Some(source) = registry.get(parent) else {
        return 0;
    };
    let (Some(transform), Some(shape)) = (source.get::<Transform>(), source.get::<Shape>()) else {
        return 0;
    };
    let position = transform.position;
    let shape = *shape;
    let collision_radius = source
        .get::<Collision>()
        .map_or(config.enemy.collision_radius, |c| c.radius);

    let angular_velocity = sample_angular_velocity(rng);

    for _ in 0..shape.vertex_count {
        let velocity = sample_velocity(rng, config);

        let small = registry.add_entity(tags::SMALL_ENEMY);
        small.add(Transform::new(position, velocity, angular_velocity));
        small.add(Shape {
            radius: shape.radius / 2.0,
            ..shape
        });
        small.add(Collision {
            radius: collision_radius / 2.0,
        });
        small.add(Lifespan::new(config.enemy.small_lifespan));
    }

    shape.vertex_count
}

/// Fire a bullet from `shooter` toward `target`.
/// Returns `None` if the shooter has no transform to fire from.
pub fn spawn_bullet(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    shooter: EntityId,
    target: Vec2,
) -> Option<EntityId> {
    let origin = registry.get(shooter)?.get::<Transform>()?.position;
    let b = &config.bullet;
    let velocity = (target - origin).normalize_or_zero() * b.speed;

    let bullet = registry.add_entity(tags::BULLET);
    bullet.add(Transform::new(origin, velocity, 0.0));
    bullet.add(Shape {
        radius: b.shape_radius,
        vertex_count: b.vertices,
        fill: b.fill.into(),
        outline: b.outline.into(),
        outline_thickness: b.outline_thickness,
    });
    bullet.add(Collision {
        radius: b.collision_radius,
    });
    bullet.add(Lifespan::new(b.lifespan));
    Some(bullet.id())
}

/// Spin in [-180, 180] deg/s with magnitudes under the floor pushed out to it.
pub(crate) fn sample_angular_velocity<R: Rng>(rng: &mut R) -> f32 {
    let spin = rng.gen_range(-ENEMY_ANGULAR_VELOCITY_MAX..=ENEMY_ANGULAR_VELOCITY_MAX);
    floor_spin(spin)
}

pub(crate) fn floor_spin(spin: f32) -> f32 {
    if spin.abs() >= ENEMY_ANGULAR_VELOCITY_FLOOR {
        spin
    } else if spin < 0.0 {
        -ENEMY_ANGULAR_VELOCITY_FLOOR
    } else {
        ENEMY_ANGULAR_VELOCITY_FLOOR
    }
}

/// Each axis independently from the enemy speed band.
fn sample_velocity<R: Rng>(rng: &mut R, config: &GameConfig) -> Vec2 {
    let e = &config.enemy;
    Vec2::new(
        rng.gen_range(e.speed_min..=e.speed_max),
        rng.gen_range(e.speed_min..=e.speed_max),
    )
}

fn sample_fill<R: Rng>(rng: &mut R) -> Color {
    Color::rgb(
        rng.gen_range(ENEMY_FILL_CHANNEL_MIN..=u8::MAX),
        rng.gen_range(ENEMY_FILL_CHANNEL_MIN..=u8::MAX),
        rng.gen_range(ENEMY_FILL_CHANNEL_MIN..=u8::MAX),
    )
}
