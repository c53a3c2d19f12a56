// Shared helpers for the host-side integration tests.

#![allow(dead_code)]
use glam::Vec2;
use matrix_core::*;

/// Surface double that records every paint call.
#[derive(Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub backdrops: Vec<(Color, f32)>,
    pub glyphs: Vec<(char, Vec2, GlyphPaint)>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn paint_calls(&self) -> usize {
        self.backdrops.len() + self.glyphs.len()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_backdrop(&mut self, color: Color, alpha: f32) {
        self.backdrops.push((color, alpha));
    }

    fn draw_glyph(&mut self, glyph: char, position: Vec2, paint: &GlyphPaint) {
        self.glyphs.push((glyph, position, *paint));
    }
}

/// Bare profile: no trail, no drift, no lifetime, fixed-ish fast speed.
pub fn plain_profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        velocity: 10.0..12.0,
        trail_max: 0,
        capacity: Capacity::Unbounded,
        removal: RemovalRule::UntilOffscreen,
        drift: Drift::None,
        replenish: None,
        high_water: None,
        ..Profile::desktop()
    }
}

pub fn loop_with(profile: Profile) -> RenderLoop {
    let id = profile.id.clone();
    let mut registry = ProfileRegistry::builtin();
    registry.insert(profile).expect("valid test profile");
    RenderLoop::new(registry, &id, 7).expect("loop")
}

pub fn store_with(profile: Profile) -> ParticleStore {
    let mut store = ParticleStore::new(profile, 7).expect("store");
    store.set_bounds(Bounds::new(200.0, 100.0));
    store
}

/// Tick at a steady 60 Hz-ish cadence starting from `*clock`.
pub fn run_ticks(lp: &mut RenderLoop, surface: &mut RecordingSurface, clock: &mut f64, n: usize) {
    for _ in 0..n {
        *clock += 16.0;
        lp.tick(*clock, surface);
    }
}
