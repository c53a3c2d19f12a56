//! Authoritative set of live particles and the population policy around it.
//!
//! Particles live in a `Vec` in creation order: spawns only append and culling
//! uses `retain_mut`, so the front of the vector is always the oldest. That
//! ordering is what makes [`ParticleStore::compact`] deterministic.

use crate::color::Palette;
use crate::config::{ConfigError, OverflowPolicy, Profile, SpawnBatching};
use crate::constants::{BRIGHTNESS_MIN, BRIGHTNESS_SPAN, SPAWN_Y};
use crate::particle::{Bounds, GlyphStyle, Particle, ParticleId, Removal, Step, Trail};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::rc::Rc;

/// What the last `advance_and_cull` did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CullReport {
    pub survivors: usize,
    pub wrapped: usize,
    pub expired: usize,
    pub exited: usize,
}

impl CullReport {
    pub fn removed(&self) -> usize {
        self.expired + self.exited
    }
}

pub struct ParticleStore {
    particles: Vec<Particle>,
    /// Deferred spawn requests (spread batching or queued overflow).
    pending: VecDeque<Option<Vec2>>,
    profile: Rc<Profile>,
    palette_override: Option<Palette>,
    bounds: Bounds,
    paused: bool,
    /// Latest tick timestamp; `None` until the host has reported one.
    clock_ms: Option<f64>,
    next_id: ParticleId,
    rng: StdRng,
    last_report: CullReport,
}

impl ParticleStore {
    pub fn new(profile: Profile, seed: u64) -> Result<Self, ConfigError> {
        profile.validate()?;
        Ok(Self {
            particles: Vec::new(),
            pending: VecDeque::new(),
            profile: Rc::new(profile),
            palette_override: None,
            bounds: Bounds::default(),
            paused: false,
            clock_ms: None,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
            last_report: CullReport::default(),
        })
    }

    pub fn profile(&self) -> &Rc<Profile> {
        &self.profile
    }

    /// Applies to particles spawned from now on; alive ones keep their rules.
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), ConfigError> {
        profile.validate()?;
        self.profile = Rc::new(profile);
        Ok(())
    }

    /// Overrides the profile palette for future spawns (`None` restores it).
    pub fn set_palette(&mut self, palette: Option<Palette>) {
        self.palette_override = palette;
    }

    pub fn palette(&self) -> &Palette {
        self.palette_override
            .as_ref()
            .unwrap_or(&self.profile.palette)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Record the host's current timestamp so spawns between ticks are born
    /// at the latest known time.
    pub fn set_clock(&mut self, now_ms: f64) {
        self.clock_ms = Some(now_ms);
    }

    pub fn clock(&self) -> Option<f64> {
        self.clock_ms
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn last_report(&self) -> CullReport {
        self.last_report
    }

    #[inline]
    fn has_room(&self) -> bool {
        self.profile.capacity.allows(self.particles.len())
    }

    /// Spawn one particle at `origin`, or at a random column on the top edge.
    ///
    /// Returns `None` when paused or at capacity; under
    /// [`OverflowPolicy::Queue`] a capacity rejection is queued instead.
    pub fn spawn(&mut self, origin: Option<Vec2>) -> Option<ParticleId> {
        if self.paused {
            return None;
        }
        if !self.has_room() {
            if self.profile.overflow == OverflowPolicy::Queue {
                self.enqueue(origin);
            }
            return None;
        }
        Some(self.push_new(origin))
    }

    /// Spawn up to `count` particles from the top edge. Returns how many were
    /// created right now; deferred ones show up through `release_pending`.
    pub fn spawn_many(&mut self, count: usize) -> usize {
        if self.paused || count == 0 {
            return 0;
        }
        if let SpawnBatching::Spread { .. } = self.profile.batching {
            for _ in 0..count {
                if !self.enqueue(None) {
                    break;
                }
            }
            return 0;
        }
        let mut created = 0;
        while created < count {
            if !self.has_room() {
                if self.profile.overflow == OverflowPolicy::Queue {
                    for _ in created..count {
                        if !self.enqueue(None) {
                            break;
                        }
                    }
                }
                break;
            }
            self.push_new(None);
            created += 1;
        }
        created
    }

    /// Move up to one batch of deferred requests into the live set.
    pub fn release_pending(&mut self) -> usize {
        if self.paused || self.pending.is_empty() {
            return 0;
        }
        let budget = match self.profile.batching {
            SpawnBatching::Immediate => usize::MAX,
            SpawnBatching::Spread { per_tick } => per_tick,
        };
        let mut released = 0;
        while released < budget {
            if !self.has_room() {
                if self.profile.overflow == OverflowPolicy::Drop {
                    self.pending.clear();
                }
                break;
            }
            let Some(origin) = self.pending.pop_front() else {
                break;
            };
            self.push_new(origin);
            released += 1;
        }
        released
    }

    /// Step every particle once and drop the dead. The returned slice is the
    /// new authoritative set, still in creation order.
    pub fn advance_and_cull(&mut self, now_ms: f64) -> &[Particle] {
        self.clock_ms = Some(now_ms);
        let bounds = self.bounds;
        let rng = &mut self.rng;
        let mut report = CullReport::default();
        self.particles.retain_mut(|p| {
            let step = p.step(now_ms, bounds, rng);
            match step {
                Step::Alive => {}
                Step::Wrapped => report.wrapped += 1,
                Step::Expired => report.expired += 1,
                Step::Exited => report.exited += 1,
            }
            step.survives()
        });
        report.survivors = self.particles.len();
        self.last_report = report;
        &self.particles
    }

    /// Forget every particle and queued request.
    pub fn reset(&mut self) {
        log::info!(
            "[store] reset: dropping {} particles, {} pending",
            self.particles.len(),
            self.pending.len()
        );
        self.particles.clear();
        self.pending.clear();
        self.last_report = CullReport::default();
    }

    /// Remove the oldest `ceil(len * fraction)` particles.
    pub fn compact(&mut self, fraction: f32) -> usize {
        if !fraction.is_finite() || self.particles.is_empty() {
            return 0;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let n = ((self.particles.len() as f32 * fraction).ceil() as usize).min(self.particles.len());
        self.particles.drain(..n);
        log::debug!("[store] compacted {} oldest, {} remain", n, self.particles.len());
        n
    }

    fn enqueue(&mut self, origin: Option<Vec2>) -> bool {
        if self.pending.len() >= self.profile.queue_limit {
            return false;
        }
        self.pending.push_back(origin);
        true
    }

    fn push_new(&mut self, origin: Option<Vec2>) -> ParticleId {
        let rules = Rc::clone(&self.profile);
        let rng = &mut self.rng;
        let position = origin.unwrap_or_else(|| Vec2::new(self.bounds.random_x(rng), SPAWN_Y));
        let color = self
            .palette_override
            .as_ref()
            .unwrap_or(&rules.palette)
            .pick(rng);
        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            position,
            glyph: rules.pick_glyph(rng),
            velocity: rules.sample_velocity(rng),
            style: GlyphStyle {
                color,
                size: rules.glyph_size,
                brightness: BRIGHTNESS_MIN + rng.gen::<f32>() * BRIGHTNESS_SPAN,
            },
            trail: Trail::new(),
            removal: Removal::resolve(rules.removal, rng),
            born_at_ms: self.clock_ms,
            rules,
        });
        id
    }
}
