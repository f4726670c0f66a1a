#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, MatchConfig, TerrainProfile};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::MatchEvent;
    use crate::state::MatchSnapshot;
    use crate::types::{launch_velocity, Bounds, DVec2, SimTime};

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::AdjustAngle { delta: -ANGLE_STEP },
            PlayerCommand::AdjustPower { delta: POWER_STEP },
            PlayerCommand::Fire,
            PlayerCommand::Move {
                direction: MoveDirection::Left,
            },
            PlayerCommand::NewMatch,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_player_command_tagged_format() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::Fire);

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Move","direction":"Right"}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::Move {
                direction: MoveDirection::Right
            }
        );
    }

    #[test]
    fn test_match_event_serde() {
        let events = vec![
            MatchEvent::MatchStarted,
            MatchEvent::Impact {
                point: DVec2::new(200.0, 400.0),
                blast_radius: BLAST_RADIUS,
                cause: ImpactCause::Terrain,
            },
            MatchEvent::TurnChanged { player: 1 },
            MatchEvent::MatchOver {
                outcome: MatchOutcome::Won { winner: 0 },
            },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: MatchEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_move_direction_sign() {
        assert_eq!(MoveDirection::Left.sign(), -1.0);
        assert_eq!(MoveDirection::Right.sign(), 1.0);
        assert_eq!(MoveDirection::None.sign(), 0.0);
    }

    #[test]
    fn test_outcome_is_over() {
        assert!(!MatchOutcome::InProgress.is_over());
        assert!(MatchOutcome::Won { winner: 1 }.is_over());
        assert!(MatchOutcome::Draw.is_over());
    }

    #[test]
    fn test_launch_velocity_quadrants() {
        let right = launch_velocity(0.0, 50.0);
        assert!((right.x - 50.0).abs() < 1e-9);
        assert!(right.y.abs() < 1e-9);

        let up = launch_velocity(90.0, 50.0);
        assert!(up.x.abs() < 1e-9);
        assert!((up.y + 50.0).abs() < 1e-9, "Up is negative y, got {}", up.y);

        let left = launch_velocity(180.0, 20.0);
        assert!((left.x + 20.0).abs() < 1e-9);

        let diag = launch_velocity(45.0, 50.0);
        let expected = 50.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((diag.x - expected).abs() < 1e-9);
        assert!((diag.y + expected).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::default();
        assert!(b.contains(DVec2::new(0.0, 0.0)));
        assert!(b.contains(DVec2::new(799.9, 599.9)));
        assert!(!b.contains(DVec2::new(800.0, 10.0)));
        assert!(!b.contains(DVec2::new(10.0, -0.1)));
        assert!(!b.contains(DVec2::new(-1.0, 300.0)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance(DT);
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_turn_label_is_one_based() {
        let snap = MatchSnapshot {
            current_player: 1,
            ..Default::default()
        };
        assert_eq!(snap.turn_label(), "Player 2");
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        config.validate().unwrap();
        assert_eq!(config.player_count(), 2);
        assert_eq!(config.spawn_points[0], DVec2::new(150.0, 300.0));
        assert_eq!(config.spawn_points[1], DVec2::new(650.0, 300.0));
    }

    #[test]
    fn test_turn_delay_ticks() {
        let mut config = MatchConfig::default();
        assert_eq!(config.turn_delay_ticks(), 60);

        config.tick_rate = 30;
        config.turn_delay_ms = 1010;
        assert_eq!(config.turn_delay_ticks(), 31, "Partial ticks round up");

        config.turn_delay_ms = 0;
        assert_eq!(config.turn_delay_ticks(), 1, "Never fires in the same tick");
    }

    #[test]
    fn test_config_from_empty_json_uses_defaults() {
        let config = MatchConfig::from_json("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_config_partial_override() {
        let json = r#"{
            "gravity": 150.0,
            "terrain": {
                "kind": "Rolling",
                "seed": 7,
                "base_y": 420.0,
                "amplitude": 30.0,
                "wavelength": 200.0
            }
        }"#;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.gravity, 150.0);
        assert_eq!(config.blast_radius, BLAST_RADIUS);
        assert!(matches!(
            config.terrain,
            TerrainProfile::Rolling { seed: 7, .. }
        ));
    }

    #[test]
    fn test_config_parse_error() {
        let err = MatchConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_rejects_inverted_power_range() {
        let json = r#"{ "power_min": 80.0, "power_max": 20.0 }"#;
        let err = MatchConfig::from_json(json).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "power_min/power_max"),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_huge_turn_delay() {
        let json = r#"{ "turn_delay_ms": 18446744073709551615 }"#;
        match MatchConfig::from_json(json).unwrap_err() {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "turn_delay_ms"),
            other => panic!("Expected Invalid, got {other:?}"),
        }

        let config = MatchConfig {
            turn_delay_ms: MAX_TURN_DELAY_MS,
            ..Default::default()
        };
        config.validate().unwrap();
        assert_eq!(config.turn_delay_ticks(), 3_600);
    }

    #[test]
    fn test_turn_delay_ticks_saturates_unvalidated() {
        let config = MatchConfig {
            turn_delay_ms: u64::MAX,
            ..Default::default()
        };
        assert_eq!(config.turn_delay_ticks(), u64::MAX / 1000 + 1);
    }

    #[test]
    fn test_config_rejects_single_combatant() {
        let config = MatchConfig {
            spawn_points: vec![DVec2::new(100.0, 300.0)],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "spawn_points",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_spawn_outside_world() {
        let config = MatchConfig {
            spawn_points: vec![DVec2::new(100.0, 300.0), DVec2::new(900.0, 300.0)],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("outside the world"), "{err}");
    }

    #[test]
    fn test_config_rejects_bad_slab() {
        let config = MatchConfig {
            terrain: TerrainProfile::Slab {
                top: 500.0,
                bottom: 300.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
