use crate::color::Color;
use crate::config::{Drift, Profile, RemovalRule};
use crate::constants::{
    BOTTOM_MARGIN, SIDE_MARGIN, SPAWN_Y, TRAIL_BASE_OPACITY, TRAIL_MIN_OPACITY, TRAIL_SIZE_FACTOR,
};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::rc::Rc;

/// Creation sequence number; strictly increasing, never reused.
pub type ParticleId = u64;

/// Drawing surface extent in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn random_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.width > 0.0 {
            rng.gen_range(0.0..self.width)
        } else {
            0.0
        }
    }
}

/// One remembered prior position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub opacity: f32,
    /// Multiplier on the head glyph size.
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub color: Color,
    pub size: f32,
    pub brightness: f32,
}

/// Removal policy resolved when the particle is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Removal {
    Finite { lifetime_ms: f64 },
    UntilOffscreen,
    WrapForever,
}

impl Removal {
    pub fn resolve<R: Rng + ?Sized>(rule: RemovalRule, rng: &mut R) -> Self {
        match rule {
            RemovalRule::Finite { min_ms, max_ms } => Removal::Finite {
                lifetime_ms: if max_ms > min_ms {
                    rng.gen_range(min_ms..max_ms)
                } else {
                    min_ms
                },
            },
            RemovalRule::UntilOffscreen => Removal::UntilOffscreen,
            RemovalRule::WrapForever => Removal::WrapForever,
        }
    }
}

/// Outcome of a single motion step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Alive,
    Wrapped,
    Expired,
    Exited,
}

impl Step {
    #[inline]
    pub fn survives(self) -> bool {
        matches!(self, Step::Alive | Step::Wrapped)
    }
}

pub type Trail = SmallVec<[TrailPoint; 4]>;

/// A falling glyph.
///
/// `rules` is the profile that was active at creation. Trail length, decay,
/// drift and the wrap-around re-roll all read from it, so switching profiles
/// later never changes an already-alive particle.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Vec2,
    pub glyph: char,
    pub velocity: f32,
    pub style: GlyphStyle,
    /// Newest entry first.
    pub trail: Trail,
    pub removal: Removal,
    /// Stamped by the first step when spawned before any clock was known.
    pub born_at_ms: Option<f64>,
    pub rules: Rc<Profile>,
}

impl Particle {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        self.born_at_ms.map_or(0.0, |born| now_ms - born)
    }

    /// Advance one tick: lifetime, trail, integration, boundary.
    pub fn step<R: Rng + ?Sized>(&mut self, now_ms: f64, bounds: Bounds, rng: &mut R) -> Step {
        self.born_at_ms.get_or_insert(now_ms);
        if let Removal::Finite { lifetime_ms } = self.removal {
            if self.age_ms(now_ms) > lifetime_ms {
                return Step::Expired;
            }
        }

        let rules = Rc::clone(&self.rules);
        if rules.trail_max > 0 {
            self.trail.insert(
                0,
                TrailPoint {
                    position: self.position,
                    opacity: TRAIL_BASE_OPACITY,
                    scale: TRAIL_SIZE_FACTOR,
                },
            );
            self.trail.truncate(rules.trail_max);
            if let Some(decay) = rules.trail_decay {
                for point in self.trail.iter_mut() {
                    point.opacity *= decay;
                    point.scale *= decay;
                }
                self.trail.retain(|p| p.opacity >= TRAIL_MIN_OPACITY);
            }
        }

        self.position.y += self.velocity;
        match rules.drift {
            Drift::None => {}
            Drift::Sine {
                amplitude,
                frequency,
            } => self.position.x += (self.position.y * frequency).sin() * amplitude,
            Drift::Jitter { amplitude } if amplitude > 0.0 => {
                self.position.x += rng.gen_range(-amplitude..=amplitude);
            }
            Drift::Jitter { .. } => {}
        }

        let below = self.position.y > bounds.height + BOTTOM_MARGIN;
        let beside = rules.drift != Drift::None
            && (self.position.x < -SIDE_MARGIN || self.position.x > bounds.width + SIDE_MARGIN);
        if !(below || beside) {
            return Step::Alive;
        }
        match self.removal {
            Removal::WrapForever => {
                self.wrap(bounds, rng);
                Step::Wrapped
            }
            Removal::Finite { .. } | Removal::UntilOffscreen => Step::Exited,
        }
    }

    /// Back to the top with a fresh column, glyph and speed. Same particle.
    fn wrap<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        self.position = Vec2::new(bounds.random_x(rng), SPAWN_Y);
        self.glyph = self.rules.pick_glyph(rng);
        self.velocity = self.rules.sample_velocity(rng);
        self.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Drift;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(rules: Profile, removal: Removal) -> Particle {
        Particle {
            id: 0,
            position: Vec2::new(50.0, 0.0),
            glyph: 'A',
            velocity: 10.0,
            style: GlyphStyle {
                color: Color::rgb(0, 255, 0),
                size: 16.0,
                brightness: 1.0,
            },
            trail: Trail::new(),
            removal,
            born_at_ms: Some(0.0),
            rules: Rc::new(rules),
        }
    }

    #[test]
    fn decayed_trail_entries_fall_away() {
        let rules = Profile {
            trail_max: 8,
            trail_decay: Some(0.5),
            drift: Drift::None,
            ..Profile::desktop()
        };
        let mut p = particle(rules, Removal::UntilOffscreen);
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::new(100.0, 10_000.0);
        for _ in 0..20 {
            p.step(0.0, bounds, &mut rng);
        }
        // 0.3 * 0.5^n >= 0.02 holds for n <= 3
        assert_eq!(p.trail.len(), 3);
        assert!(p.trail.iter().all(|t| t.opacity >= TRAIL_MIN_OPACITY));
    }

    #[test]
    fn expiry_wins_over_motion() {
        let mut p = particle(Profile::desktop(), Removal::Finite { lifetime_ms: 100.0 });
        let mut rng = StdRng::seed_from_u64(1);
        let before = p.position;
        assert_eq!(p.step(101.0, Bounds::new(100.0, 100.0), &mut rng), Step::Expired);
        assert_eq!(p.position, before);
    }
}
