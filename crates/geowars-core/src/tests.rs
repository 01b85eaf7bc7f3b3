#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::*;
    use crate::config::{ConfigError, GameConfig};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::{FrameSnapshot, SystemToggles};
    use crate::types::{Color, EntityId, Playfield, Vec2};

    const SAMPLE_CONFIG: &str = r#"
        seed = 7

        [window]
        width = 1280
        height = 720
        fps = 60

        [player]
        shape_radius = 32.0
        collision_radius = 32.0
        fill = [5, 5, 5]
        outline = [255, 0, 0]
        outline_thickness = 4.0
        vertices = 8
        speed = 300.0

        [enemy]
        shape_radius = 32.0
        collision_radius = 32.0
        outline = [255, 255, 255]
        outline_thickness = 2.0
        vertices_min = 3
        vertices_max = 8
        small_lifespan = 90
        spawn_interval = 60
        speed_min = 60.0
        speed_max = 180.0

        [bullet]
        shape_radius = 10.0
        collision_radius = 10.0
        fill = [255, 255, 255]
        outline = [255, 255, 255]
        outline_thickness = 2.0
        vertices = 20
        lifespan = 90
        speed = 600.0
    "#;

    // ---- Component bundle ----

    #[test]
    fn test_bundle_starts_empty() {
        let bundle = ComponentBundle::default();
        assert!(!bundle.has::<Transform>());
        assert!(!bundle.has::<Shape>());
        assert!(!bundle.has::<Collision>());
        assert!(!bundle.has::<Input>());
        assert!(!bundle.has::<Score>());
        assert!(!bundle.has::<Lifespan>());
    }

    #[test]
    fn test_bundle_add_replaces_existing_slot() {
        let mut bundle = ComponentBundle::default();
        bundle.add(Collision { radius: 4.0 });
        bundle.add(Collision { radius: 9.0 });
        assert_eq!(bundle.get::<Collision>(), Some(&Collision { radius: 9.0 }));

        bundle.get_mut::<Collision>().unwrap().radius = 1.5;
        assert_eq!(bundle.collision.unwrap().radius, 1.5);

        assert_eq!(bundle.remove::<Collision>(), Some(Collision { radius: 1.5 }));
        assert!(!bundle.has::<Collision>());
    }

    #[test]
    fn test_bundle_serde_preserves_presence_and_values() {
        let mut bundle = ComponentBundle::default();
        bundle.add(Transform {
            position: Vec2::new(12.5, -3.0),
            velocity: Vec2::new(1.0, 2.0),
            angle: 45.0,
            angular_velocity: -30.0,
        });
        bundle.add(Shape {
            radius: 16.0,
            vertex_count: 5,
            fill: Color::rgb(10, 20, 30).with_alpha(128),
            outline: Color::rgb(255, 255, 255),
            outline_thickness: 2.0,
        });
        bundle.add(Lifespan {
            remaining: 17,
            total: 90,
        });

        let json = serde_json::to_string(&bundle).unwrap();
        let back: ComponentBundle = serde_json::from_str(&json).unwrap();

        assert_eq!(back, bundle);
        assert!(back.has::<Transform>() && back.has::<Shape>() && back.has::<Lifespan>());
        assert!(!back.has::<Collision>() && !back.has::<Input>() && !back.has::<Score>());
    }

    #[test]
    fn test_lifespan_new_starts_full() {
        let life = Lifespan::new(42);
        assert_eq!(life.remaining, 42);
        assert_eq!(life.total, 42);
    }

    // ---- Types ----

    #[test]
    fn test_color_with_alpha_keeps_rgb() {
        let c = Color::rgb(1, 2, 3).with_alpha(7);
        assert_eq!((c.r, c.g, c.b, c.a), (1, 2, 3, 7));
        assert_eq!(Color::from([9, 8, 7]), Color::rgb(9, 8, 7));
    }

    #[test]
    fn test_playfield_center() {
        let field = Playfield::new(1280.0, 720.0);
        assert_eq!(field.center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(12).to_string(), "E12");
    }

    // ---- Commands, events, snapshot ----

    #[test]
    fn test_command_serde() {
        let commands = vec![
            PlayerCommand::Press {
                direction: Direction::Up,
            },
            PlayerCommand::Release {
                direction: Direction::Left,
            },
            PlayerCommand::Fire {
                target: Vec2::new(100.0, 200.0),
            },
            PlayerCommand::TogglePause,
            PlayerCommand::SetSystemEnabled {
                system: SystemKind::Spawner,
                enabled: false,
            },
            PlayerCommand::DestroyEntity { id: EntityId(3) },
            PlayerCommand::Quit,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_control_commands() {
        assert!(PlayerCommand::Quit.is_control());
        assert!(PlayerCommand::TogglePause.is_control());
        assert!(!PlayerCommand::Fire { target: Vec2::ZERO }.is_control());
        assert!(!PlayerCommand::Press {
            direction: Direction::Down
        }
        .is_control());
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_string(&SimEvent::EnemyDestroyed {
            id: EntityId(4),
            fragments: 6,
        })
        .unwrap();
        assert!(json.contains("\"type\":\"EnemyDestroyed\""));
        assert!(json.contains("\"fragments\":6"));
    }

    #[test]
    fn test_system_toggles() {
        let mut toggles = SystemToggles::default();
        for system in SystemKind::ALL {
            assert!(toggles.is_enabled(system));
        }
        toggles.set(SystemKind::Collision, false);
        assert!(!toggles.collision);
        assert!(!toggles.is_enabled(SystemKind::Collision));
        assert!(toggles.is_enabled(SystemKind::Movement));
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let json = serde_json::to_string(&FrameSnapshot::default()).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frame, 0);
        assert!(back.entities.is_empty());
    }

    // ---- Config ----

    #[test]
    fn test_config_parses_sample() {
        let config = GameConfig::from_toml_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.enemy.vertices_max, 8);
        assert_eq!(config.bullet.speed, 600.0);
        assert_eq!(config.playfield(), Playfield::new(1280.0, 720.0));
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_config_missing_section_is_parse_error() {
        let without_bullet = SAMPLE_CONFIG
            .split("[bullet]")
            .next()
            .unwrap()
            .to_string();
        let err = GameConfig::from_toml_str(&without_bullet).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
    }

    #[test]
    fn test_config_malformed_value_is_parse_error() {
        let broken = SAMPLE_CONFIG.replace("vertices_min = 3", "vertices_min = \"three\"");
        let err = GameConfig::from_toml_str(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_missing_fps_uses_default() {
        let no_fps = SAMPLE_CONFIG.replace("fps = 60", "");
        let config = GameConfig::from_toml_str(&no_fps).unwrap();
        assert_eq!(config.window.fps, 60);
    }

    #[test]
    fn test_config_rejects_inverted_vertex_range() {
        let mut config = GameConfig::default();
        config.enemy.vertices_min = 9;
        config.enemy.vertices_max = 4;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { section: "enemy", .. }),
            "got {err}"
        );
    }

    #[test]
    fn test_config_rejects_inverted_speed_band() {
        let mut config = GameConfig::default();
        config.enemy.speed_min = 5.0;
        config.enemy.speed_max = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_spawn_interval() {
        let mut config = GameConfig::default();
        config.enemy.spawn_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_degenerate_shapes() {
        let mut config = GameConfig::default();
        config.bullet.vertices = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "bullet",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.player.collision_radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "player",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.player.speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_enemy_wider_than_playfield() {
        let mut config = GameConfig::default();
        config.enemy.shape_radius = 400.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "enemy",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_infinite_values() {
        let mut config = GameConfig::default();
        config.player.speed = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "player",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.bullet.speed = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "bullet",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.enemy.collision_radius = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "enemy",
                ..
            })
        ));

        // TOML spells infinity as a bare `inf` literal.
        let toml = SAMPLE_CONFIG.replace("speed = 300.0", "speed = inf");
        assert!(matches!(
            GameConfig::from_toml_str(&toml),
            Err(ConfigError::Invalid {
                section: "player",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_hitbox_wider_than_playfield() {
        let mut config = GameConfig::default();
        config.player.collision_radius = 360.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "player",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.bullet.collision_radius = 500.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                section: "bullet",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.player.collision_radius = 359.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/geowars.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
