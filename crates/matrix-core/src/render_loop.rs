//! Per-refresh update/paint cycle.
//!
//! The host calls [`RenderLoop::tick`] once per display refresh and schedules
//! the next call itself after this one returns, so exactly one tick is ever
//! in flight. Spawns issued between ticks are plain appends to the store and
//! become part of the next tick's `advance_and_cull`.

use crate::color::Color;
use crate::config::{Backdrop, ConfigError, Profile, ProfileRegistry, TrailOrder};
use crate::constants::{DEMO_SPAWN_COUNT, DEMO_SPAWN_DELAY_MS, DEMO_SPAWN_STAGGER_MS};
use crate::fps::{FpsMeter, LoadLevel};
use crate::particle::{Bounds, Particle, ParticleId};
use crate::store::ParticleStore;
use crate::surface::{GlyphPaint, Surface};
use crate::theme::{Theme, THEMES};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

type FpsObserver = Box<dyn FnMut(f64)>;

pub struct RenderLoop {
    store: ParticleStore,
    registry: ProfileRegistry,
    meter: FpsMeter,
    state: LoopState,
    theme_index: usize,
    background: Color,
    /// Demo spawn offsets waiting for the next tick's timestamp.
    demo_requested: Vec<f64>,
    demo_due: Vec<f64>,
    now_ms: Option<f64>,
    reset_at_ms: Option<f64>,
    rng: StdRng,
    observers: Vec<FpsObserver>,
}

impl RenderLoop {
    pub fn new(registry: ProfileRegistry, profile_id: &str, seed: u64) -> Result<Self, ConfigError> {
        let profile = registry.get(profile_id)?.clone();
        let meter = FpsMeter::new(profile.fps_window_ms);
        let store = ParticleStore::new(profile, seed)?;
        log::info!("[loop] created with profile `{}`", profile_id);
        Ok(Self {
            store,
            registry,
            meter,
            state: LoopState::Running,
            theme_index: 0,
            background: THEMES[0].background,
            demo_requested: Vec::new(),
            demo_due: Vec::new(),
            now_ms: None,
            reset_at_ms: None,
            rng: StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
            observers: Vec::new(),
        })
    }

    pub fn with_builtin_profiles(profile_id: &str, seed: u64) -> Result<Self, ConfigError> {
        Self::new(ProfileRegistry::builtin(), profile_id, seed)
    }

    pub fn tick(&mut self, timestamp_ms: f64, surface: &mut dyn Surface) {
        self.now_ms = Some(timestamp_ms);
        self.store.set_clock(timestamp_ms);
        self.reset_at_ms.get_or_insert(timestamp_ms);
        for offset in self.demo_requested.drain(..) {
            self.demo_due.push(timestamp_ms + offset);
        }

        if let Some(fps) = self.meter.frame(timestamp_ms) {
            log::debug!("[fps] {:.1} with {} particles", fps, self.store.len());
            for observer in self.observers.iter_mut() {
                observer(fps);
            }
        }

        if self.state == LoopState::Paused {
            return;
        }

        let (width, height) = surface.size();
        self.store.set_bounds(Bounds::new(width, height));
        let profile = Rc::clone(self.store.profile());
        match profile.backdrop {
            Backdrop::Fade { alpha } => surface.fill_backdrop(self.background, alpha),
            Backdrop::Clear => surface.fill_backdrop(self.background, 1.0),
        }

        for particle in self.store.advance_and_cull(timestamp_ms) {
            paint_particle(surface, particle);
        }
        let report = self.store.last_report();
        log::trace!(
            "[tick] survivors={} wrapped={} removed={}",
            report.survivors,
            report.wrapped,
            report.removed()
        );

        self.maintain(timestamp_ms, &profile);
    }

    fn maintain(&mut self, now_ms: f64, profile: &Profile) {
        if let Some(high_water) = profile.high_water {
            if self.store.len() > high_water {
                self.store.compact(profile.compact_fraction);
            }
        }

        self.store.release_pending();

        let before = self.demo_due.len();
        self.demo_due.retain(|&due| due > now_ms);
        for _ in self.demo_due.len()..before {
            self.store.spawn(None);
        }

        if let Some(replenish) = profile.replenish {
            if self.store.len() < replenish.floor && self.rng.gen::<f64>() < replenish.chance {
                self.store.spawn(None);
            }
        }
    }

    pub fn spawn_one(&mut self, origin: Option<Vec2>) -> Option<ParticleId> {
        self.store.spawn(origin)
    }

    pub fn spawn_many(&mut self, count: usize) -> usize {
        self.store.spawn_many(count)
    }

    /// Queue the two staggered spawns the "start test" and "restart" flows
    /// begin with.
    pub fn schedule_demo(&mut self) {
        for i in 0..DEMO_SPAWN_COUNT {
            self.demo_requested
                .push(DEMO_SPAWN_DELAY_MS + i as f64 * DEMO_SPAWN_STAGGER_MS);
        }
    }

    /// Drop every particle and restart the FPS and elapsed clocks.
    pub fn reset(&mut self) {
        self.store.reset();
        self.meter.reset();
        self.demo_requested.clear();
        self.demo_due.clear();
        self.reset_at_ms = self.now_ms;
    }

    pub fn pause(&mut self) {
        self.set_state(LoopState::Paused);
    }

    pub fn resume(&mut self) {
        self.set_state(LoopState::Running);
    }

    pub fn toggle(&mut self) -> LoopState {
        match self.state {
            LoopState::Running => self.pause(),
            LoopState::Paused => self.resume(),
        }
        self.state
    }

    fn set_state(&mut self, state: LoopState) {
        self.state = state;
        self.store.set_paused(state == LoopState::Paused);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == LoopState::Paused
    }

    /// Switch to a registered profile. Only particles spawned afterwards use
    /// it. On error the current profile stays.
    pub fn set_profile(&mut self, id: &str) -> Result<(), ConfigError> {
        let profile = self.registry.get(id)?.clone();
        let window = profile.fps_window_ms;
        self.store.set_profile(profile)?;
        self.meter.set_window(window);
        log::info!("[loop] profile -> `{}`", id);
        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        self.store.profile()
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ProfileRegistry {
        &mut self.registry
    }

    /// Cycle to the next theme; new glyphs take its palette.
    pub fn next_theme(&mut self) -> &Theme {
        self.theme_index = (self.theme_index + 1) % THEMES.len();
        let theme = &THEMES[self.theme_index];
        self.store.set_palette(Some(theme.palette()));
        self.background = theme.background;
        log::info!("[loop] theme -> {}", theme.name);
        theme
    }

    pub fn theme(&self) -> &Theme {
        &THEMES[self.theme_index]
    }

    pub fn subscribe_fps(&mut self, observer: impl FnMut(f64) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn current_fps(&self) -> f64 {
        self.meter.fps()
    }

    pub fn population(&self) -> usize {
        self.store.len()
    }

    pub fn load_level(&self) -> LoadLevel {
        LoadLevel::for_population(self.store.len())
    }

    pub fn elapsed_since_reset(&self) -> f64 {
        match (self.now_ms, self.reset_at_ms) {
            (Some(now), Some(reset_at)) => (now - reset_at).max(0.0),
            _ => 0.0,
        }
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn meter(&self) -> &FpsMeter {
        &self.meter
    }
}

fn paint_particle(surface: &mut dyn Surface, p: &Particle) {
    surface.draw_glyph(
        p.glyph,
        p.position,
        &GlyphPaint {
            color: p.style.color,
            size: p.style.size,
            alpha: p.style.brightness,
            bold: true,
        },
    );
    let len = p.trail.len();
    let mut paint_entry = |i: usize| {
        let point = &p.trail[i];
        let fade = 1.0 - i as f32 / len as f32;
        surface.draw_glyph(
            p.glyph,
            point.position,
            &GlyphPaint {
                color: p.style.color,
                size: p.style.size * point.scale,
                alpha: point.opacity * fade * p.style.brightness,
                bold: false,
            },
        );
    };
    match p.rules.trail_order {
        TrailOrder::NewestFirst => (0..len).for_each(&mut paint_entry),
        TrailOrder::OldestFirst => (0..len).rev().for_each(&mut paint_entry),
    }
}
