use std::collections::HashSet;
use std::path::PathBuf;

use geowars_sim::core::commands::PlayerCommand;
use geowars_sim::core::config::GameConfig;
use geowars_sim::core::constants::tags;
use geowars_sim::core::enums::Direction;
use geowars_sim::core::events::SimEvent;
use geowars_sim::core::types::Vec2;
use geowars_sim::SimulationEngine;

fn shipped_config() -> GameConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/geowars.toml");
    GameConfig::load(path).expect("shipped config loads and validates")
}

/// Fire at the newest enemy every few frames while strafing.
fn drive(engine: &mut SimulationEngine, frame: u64) {
    if frame % 8 == 0 {
        let target = engine
            .registry()
            .tagged(tags::ENEMY)
            .last()
            .and_then(|e| e.get::<geowars_sim::core::components::Transform>())
            .map(|t| t.position);
        if let Some(target) = target {
            engine.queue_command(PlayerCommand::Fire { target });
        }
    }
    let direction = if (frame / 90) % 2 == 0 {
        Direction::Left
    } else {
        Direction::Right
    };
    if frame % 90 == 0 {
        engine.queue_commands([
            PlayerCommand::Release {
                direction: Direction::Left,
            },
            PlayerCommand::Release {
                direction: Direction::Right,
            },
            PlayerCommand::Press { direction },
        ]);
    }
}

#[test]
fn shipped_config_runs_a_full_session() {
    let mut config = shipped_config();
    config.seed = Some(2024);
    let dt = config.frame_dt();
    let mut engine = SimulationEngine::new(config).unwrap();

    let mut seen_ids = HashSet::new();
    let mut big_kills = 0;
    let mut small_kills = 0;
    let mut last_score = 0;

    for frame in 0..1800 {
        drive(&mut engine, frame);
        let snap = engine.tick(dt);
        assert_eq!(snap.frame, frame);
        assert!(snap.score >= last_score, "score never decreases");
        last_score = snap.score;

        for event in &snap.events {
            match event {
                SimEvent::EnemyDestroyed { fragments, .. } => {
                    big_kills += 1;
                    assert!((3..=8).contains(fragments));
                }
                SimEvent::SmallEnemyDestroyed { .. } => small_kills += 1,
                SimEvent::EnemySpawned { id } | SimEvent::BulletFired { id } => {
                    assert!(seen_ids.insert(*id), "id {id} handed out twice");
                }
                _ => {}
            }
        }

        assert_eq!(snap.tag_counts.get(tags::PLAYER), Some(&1));
        for view in &snap.entities {
            let p = view.transform.position;
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    assert_eq!(engine.score(), big_kills * 25 + small_kills * 50);
    assert!(big_kills > 0, "autofire should land at least one hit in 30 seconds");
    assert_eq!(engine.last_enemy_spawn_frame(), Some(1740));
}

#[test]
fn quit_ends_the_session() {
    let mut config = shipped_config();
    config.seed = Some(1);
    let mut engine = SimulationEngine::new(config).unwrap();

    let mut frames = 0;
    while engine.is_running() {
        if frames == 42 {
            engine.queue_command(PlayerCommand::Quit);
        }
        engine.tick(1.0 / 60.0);
        frames += 1;
    }
    assert_eq!(frames, 43);
    assert_eq!(engine.frame(), 43);
}

#[test]
fn fire_at_own_position_leaves_bullet_in_place() {
    let mut config = shipped_config();
    config.seed = Some(3);
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.queue_command(PlayerCommand::Fire {
        target: Vec2::new(640.0, 360.0),
    });
    engine.tick(1.0 / 60.0);
    let snap = engine.tick(1.0 / 60.0);
    let bullet = snap
        .entities
        .iter()
        .find(|v| v.tag == tags::BULLET)
        .unwrap();
    assert_eq!(bullet.transform.velocity, Vec2::ZERO);
    assert_eq!(bullet.transform.position, Vec2::new(640.0, 360.0));
}
