// Host-side tests for profile validation, the registry and color parsing.

use matrix_core::*;

#[test]
fn builtin_profiles_are_valid() {
    let registry = ProfileRegistry::builtin();
    let mut ids: Vec<_> = registry.ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["desktop", "mobile", "rain"]);
    for id in ids {
        registry.get(id).unwrap().validate().unwrap();
    }
}

#[test]
fn device_profiles_match_their_budgets() {
    let desktop = Profile::desktop();
    assert_eq!(desktop.capacity, Capacity::Limited(4000));
    assert_eq!(desktop.glyph_size, 16.0);
    assert_eq!(desktop.trail_max, 1);
    assert_eq!(
        desktop.hold,
        HoldSpawn {
            interval_ms: 60,
            batch: 15
        }
    );

    let mobile = Profile::mobile();
    assert_eq!(mobile.capacity, Capacity::Limited(800));
    assert_eq!(mobile.glyph_size, 14.0);
    assert_eq!(mobile.trail_max, 0);
    assert_eq!(
        mobile.hold,
        HoldSpawn {
            interval_ms: 120,
            batch: 5
        }
    );
    assert!(mobile.velocity.end < desktop.velocity.end);
    assert_eq!(mobile.removal, desktop.removal);
}

#[test]
fn rain_never_runs_dry_or_unbounded() {
    let rain = Profile::rain();
    assert_eq!(rain.removal, RemovalRule::WrapForever);
    assert_eq!(rain.capacity, Capacity::Unbounded);
    assert!(rain.high_water.is_some());
    assert!(rain.replenish.is_some());
    assert!(matches!(rain.batching, SpawnBatching::Spread { .. }));
}

#[test]
fn registry_lookup_and_insert() {
    let mut registry = ProfileRegistry::empty();
    assert!(!registry.contains("desktop"));
    assert_eq!(
        registry.get("desktop"),
        Err(ConfigError::UnknownProfile("desktop".into()))
    );
    registry
        .insert(Profile {
            id: "kiosk".into(),
            ..Profile::mobile()
        })
        .unwrap();
    assert!(registry.contains("kiosk"));
    assert_eq!(registry.get("kiosk").unwrap().glyph_size, 14.0);
}

#[test]
fn registry_rejects_invalid_profiles() {
    let mut registry = ProfileRegistry::empty();
    let bad = Profile {
        id: "slow".into(),
        velocity: 2.0..1.0,
        ..Profile::desktop()
    };
    assert!(matches!(
        registry.insert(bad),
        Err(ConfigError::InvalidVelocity { .. })
    ));
    assert!(!registry.contains("slow"));
}

fn rejected(profile: Profile) -> ConfigError {
    profile.validate().unwrap_err()
}

#[test]
fn validation_catches_each_field() {
    let base = Profile::desktop;
    assert!(matches!(
        rejected(Profile {
            alphabet: vec![],
            ..base()
        }),
        ConfigError::EmptyAlphabet(_)
    ));
    assert!(matches!(
        rejected(Profile {
            velocity: 0.0..1.0,
            ..base()
        }),
        ConfigError::InvalidVelocity { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            glyph_size: 0.0,
            ..base()
        }),
        ConfigError::InvalidGlyphSize { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            trail_decay: Some(1.5),
            ..base()
        }),
        ConfigError::InvalidDecay { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            removal: RemovalRule::Finite {
                min_ms: 500.0,
                max_ms: 100.0,
            },
            ..base()
        }),
        ConfigError::InvalidLifetime { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            batching: SpawnBatching::Spread { per_tick: 0 },
            ..base()
        }),
        ConfigError::InvalidInterval { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            hold: HoldSpawn {
                interval_ms: 0,
                batch: 1,
            },
            ..base()
        }),
        ConfigError::InvalidInterval { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            fps_window_ms: 0.0,
            ..base()
        }),
        ConfigError::InvalidInterval { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            compact_fraction: 1.5,
            ..base()
        }),
        ConfigError::InvalidFraction { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            replenish: Some(Replenish {
                floor: 1,
                chance: -0.1,
            }),
            ..base()
        }),
        ConfigError::InvalidFraction { .. }
    ));
    assert!(matches!(
        rejected(Profile {
            backdrop: Backdrop::Fade { alpha: 2.0 },
            ..base()
        }),
        ConfigError::InvalidFraction { .. }
    ));
}

#[test]
fn errors_name_the_profile() {
    let err = Profile {
        id: "broken".into(),
        glyph_size: -1.0,
        ..Profile::desktop()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("broken"));
}

#[test]
fn empty_palette_is_rejected() {
    assert_eq!(Palette::new(vec![]), Err(ConfigError::EmptyPalette));
    assert_eq!(Palette::from_hex(&[]), Err(ConfigError::EmptyPalette));
}

#[test]
fn palette_from_hex_keeps_order() {
    let p = Palette::from_hex(&["#0F0", "#00ff66"]).unwrap();
    assert_eq!(p.colors(), &[Color::rgb(0, 255, 0), Color::rgb(0, 255, 102)]);
    assert_eq!(
        Palette::from_hex(&["#0F0", "nope"]),
        Err(ConfigError::InvalidColor("nope".into()))
    );
}

#[test]
fn colors_render_as_css() {
    let c: Color = "#3F3".parse().unwrap();
    assert_eq!(c.css(), "rgb(51, 255, 51)");
    assert_eq!(c.to_string(), "#33ff33");
}

#[test]
fn capacity_ceiling() {
    assert!(Capacity::Limited(2).allows(1));
    assert!(!Capacity::Limited(2).allows(2));
    assert!(!Capacity::Limited(0).allows(0));
    assert!(Capacity::Unbounded.allows(usize::MAX));
}
