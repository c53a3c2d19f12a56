// Host-side tests for constants and their relationships.

use matrix_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Spawns start above the visible area
    assert!(SPAWN_Y < 0.0);
    assert!(BOTTOM_MARGIN > 0.0);
    assert!(SIDE_MARGIN > 0.0);

    // Brightness stays in a visible, non-saturating range
    assert!(BRIGHTNESS_MIN > 0.0);
    assert!(BRIGHTNESS_MIN + BRIGHTNESS_SPAN <= 1.0);

    // Trail entries start faint and shrink
    assert!(TRAIL_BASE_OPACITY > TRAIL_MIN_OPACITY);
    assert!(TRAIL_BASE_OPACITY <= 1.0);
    assert!(TRAIL_SIZE_FACTOR > 0.0 && TRAIL_SIZE_FACTOR < 1.0);

    assert!(DRIFT_AMPLITUDE > 0.0);
    assert!(DRIFT_FREQUENCY > 0.0);
    assert!(FPS_SAMPLE_WINDOW_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn load_thresholds_ascend() {
    assert!(LOAD_MEDIUM_AT < LOAD_HEAVY_AT);
    assert!(LOAD_HEAVY_AT < LOAD_EXTREME_AT);
}

#[test]
fn demo_spawns_are_staggered() {
    assert_eq!(DEMO_SPAWN_COUNT, 2);
    let last = DEMO_SPAWN_DELAY_MS + (DEMO_SPAWN_COUNT - 1) as f64 * DEMO_SPAWN_STAGGER_MS;
    assert_eq!(last, 500.0);
}

#[test]
fn theme_steps_lighten_monotonically() {
    assert_eq!(THEME_LIGHTEN_STEPS[0], 0);
    assert!(THEME_LIGHTEN_STEPS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn glyph_set_and_default_colors() {
    assert!(GLYPHS.chars().count() > 40);
    assert!(GLYPHS.chars().all(|c| !c.is_whitespace()));
    for hex in DEFAULT_COLORS {
        assert!(matrix_core::Color::parse_hex(hex).is_ok(), "{hex}");
    }
}
