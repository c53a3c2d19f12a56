//! Named configuration bundles ("profiles") and the policies they select.
//!
//! A profile is validated once, when it enters a [`ProfileRegistry`] or is
//! handed to a store, so nothing malformed reaches the per-tick code.

use crate::color::Palette;
use crate::constants::{
    DEFAULT_COLORS, DRIFT_AMPLITUDE, DRIFT_FREQUENCY, FPS_SAMPLE_WINDOW_MS, GLYPHS,
};
use fnv::FnvHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown profile `{0}`")]
    UnknownProfile(String),
    #[error("profile `{0}` has an empty glyph alphabet")]
    EmptyAlphabet(String),
    #[error("palette has no colors")]
    EmptyPalette,
    #[error("invalid color `{0}`, expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("profile `{profile}`: velocity range {min}..{max} must be positive and non-decreasing")]
    InvalidVelocity { profile: String, min: f32, max: f32 },
    #[error("profile `{profile}`: glyph size {size} must be positive")]
    InvalidGlyphSize { profile: String, size: f32 },
    #[error("profile `{profile}`: {what} = {value} must lie in 0..=1")]
    InvalidFraction {
        profile: String,
        what: &'static str,
        value: f64,
    },
    #[error("profile `{profile}`: trail decay {decay} must lie in (0, 1]")]
    InvalidDecay { profile: String, decay: f32 },
    #[error("profile `{profile}`: {what} must be non-zero")]
    InvalidInterval { profile: String, what: &'static str },
    #[error("profile `{profile}`: lifetime {min_ms}..{max_ms} ms must be positive and non-decreasing")]
    InvalidLifetime {
        profile: String,
        min_ms: f64,
        max_ms: f64,
    },
}

/// Population ceiling checked by every spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capacity {
    Limited(usize),
    Unbounded,
}

impl Capacity {
    #[inline]
    pub fn allows(self, population: usize) -> bool {
        match self {
            Capacity::Limited(max) => population < max,
            Capacity::Unbounded => true,
        }
    }
}

/// What happens to a spawn request that arrives at capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverflowPolicy {
    Drop,
    /// Hold it in the pending queue until room appears.
    Queue,
}

/// How a particle leaves the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RemovalRule {
    /// Lifetime drawn uniformly from `min_ms..max_ms`; also removed off-screen.
    Finite { min_ms: f64, max_ms: f64 },
    UntilOffscreen,
    WrapForever,
}

/// Cosmetic horizontal motion applied after the fall step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drift {
    None,
    Sine { amplitude: f32, frequency: f32 },
    Jitter { amplitude: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnBatching {
    /// `spawn_many` creates everything it can right away.
    Immediate,
    /// `spawn_many` queues the request and at most `per_tick` arrive per tick.
    Spread { per_tick: usize },
}

/// Hold-to-spawn timer parameters used by the input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoldSpawn {
    pub interval_ms: u32,
    pub batch: usize,
}

/// Per-tick background paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    /// Translucent fill, leaves fading ghosts of earlier frames.
    Fade { alpha: f32 },
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailOrder {
    NewestFirst,
    OldestFirst,
}

/// Keeps the animation from dying out: below `floor` alive particles, each
/// running tick spawns one with probability `chance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Replenish {
    pub floor: usize,
    pub chance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: String,
    pub alphabet: Vec<char>,
    pub velocity: Range<f32>,
    pub palette: Palette,
    pub glyph_size: f32,
    pub trail_max: usize,
    pub trail_decay: Option<f32>,
    pub trail_order: TrailOrder,
    pub capacity: Capacity,
    pub overflow: OverflowPolicy,
    pub queue_limit: usize,
    pub removal: RemovalRule,
    pub drift: Drift,
    pub batching: SpawnBatching,
    pub hold: HoldSpawn,
    pub backdrop: Backdrop,
    pub replenish: Option<Replenish>,
    pub high_water: Option<usize>,
    pub compact_fraction: f32,
    pub fps_window_ms: f64,
}

fn default_palette() -> Palette {
    Palette::from_hex(&DEFAULT_COLORS).unwrap_or_else(|_| Palette(vec![crate::Color::rgb(0, 255, 0)]))
}

impl Profile {
    pub fn desktop() -> Self {
        Self {
            id: "desktop".into(),
            alphabet: GLYPHS.chars().collect(),
            velocity: 0.96..1.44,
            palette: default_palette(),
            glyph_size: 16.0,
            trail_max: 1,
            trail_decay: None,
            trail_order: TrailOrder::NewestFirst,
            capacity: Capacity::Limited(4000),
            overflow: OverflowPolicy::Drop,
            queue_limit: 0,
            removal: RemovalRule::Finite {
                min_ms: 5000.0,
                max_ms: 10000.0,
            },
            drift: Drift::Sine {
                amplitude: DRIFT_AMPLITUDE,
                frequency: DRIFT_FREQUENCY,
            },
            batching: SpawnBatching::Immediate,
            hold: HoldSpawn {
                interval_ms: 60,
                batch: 15,
            },
            backdrop: Backdrop::Fade { alpha: 0.1 },
            replenish: None,
            high_water: None,
            compact_fraction: 0.25,
            fps_window_ms: FPS_SAMPLE_WINDOW_MS,
        }
    }

    pub fn mobile() -> Self {
        Self {
            id: "mobile".into(),
            velocity: 0.72..1.08,
            glyph_size: 14.0,
            trail_max: 0,
            capacity: Capacity::Limited(800),
            hold: HoldSpawn {
                interval_ms: 120,
                batch: 5,
            },
            ..Self::desktop()
        }
    }

    /// Endless rain: glyphs wrap to the top, growth is bounded by compaction.
    pub fn rain() -> Self {
        Self {
            id: "rain".into(),
            trail_max: 4,
            trail_decay: Some(0.85),
            trail_order: TrailOrder::OldestFirst,
            capacity: Capacity::Unbounded,
            queue_limit: 10_000,
            removal: RemovalRule::WrapForever,
            drift: Drift::None,
            batching: SpawnBatching::Spread { per_tick: 50 },
            replenish: Some(Replenish {
                floor: 20,
                chance: 0.05,
            }),
            high_water: Some(6000),
            ..Self::desktop()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let id = || self.id.clone();
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet(id()));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let Range { start, end } = self.velocity;
        if !(start.is_finite() && end.is_finite() && start > 0.0 && end >= start) {
            return Err(ConfigError::InvalidVelocity {
                profile: id(),
                min: start,
                max: end,
            });
        }
        if !(self.glyph_size.is_finite() && self.glyph_size > 0.0) {
            return Err(ConfigError::InvalidGlyphSize {
                profile: id(),
                size: self.glyph_size,
            });
        }
        if let Some(decay) = self.trail_decay {
            if !(decay > 0.0 && decay <= 1.0) {
                return Err(ConfigError::InvalidDecay { profile: id(), decay });
            }
        }
        if let RemovalRule::Finite { min_ms, max_ms } = self.removal {
            if !(min_ms.is_finite() && max_ms.is_finite() && min_ms > 0.0 && max_ms >= min_ms) {
                return Err(ConfigError::InvalidLifetime {
                    profile: id(),
                    min_ms,
                    max_ms,
                });
            }
        }
        if let SpawnBatching::Spread { per_tick: 0 } = self.batching {
            return Err(ConfigError::InvalidInterval {
                profile: id(),
                what: "spread batch size",
            });
        }
        if self.hold.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval {
                profile: id(),
                what: "hold interval",
            });
        }
        if !(self.fps_window_ms.is_finite() && self.fps_window_ms > 0.0) {
            return Err(ConfigError::InvalidInterval {
                profile: id(),
                what: "fps window",
            });
        }
        check_fraction(&self.id, "compact fraction", self.compact_fraction as f64)?;
        if let Some(r) = self.replenish {
            check_fraction(&self.id, "replenish chance", r.chance)?;
        }
        if let Backdrop::Fade { alpha } = self.backdrop {
            check_fraction(&self.id, "backdrop alpha", alpha as f64)?;
        }
        Ok(())
    }

    pub fn pick_glyph<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.alphabet.choose(rng).copied().unwrap_or(' ')
    }

    pub fn sample_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.velocity.end > self.velocity.start {
            rng.gen_range(self.velocity.clone())
        } else {
            self.velocity.start
        }
    }
}

fn check_fraction(profile: &str, what: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidFraction {
            profile: profile.to_string(),
            what,
            value,
        })
    }
}

/// Lookup table of validated profiles keyed by id.
#[derive(Clone, Debug, Default)]
pub struct ProfileRegistry {
    profiles: FnvHashMap<String, Profile>,
}

impl ProfileRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `desktop`, `mobile` and `rain`.
    pub fn builtin() -> Self {
        let mut profiles = FnvHashMap::default();
        for p in [Profile::desktop(), Profile::mobile(), Profile::rain()] {
            profiles.insert(p.id.clone(), p);
        }
        Self { profiles }
    }

    pub fn insert(&mut self, profile: Profile) -> Result<(), ConfigError> {
        profile.validate()?;
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(id)
            .ok_or_else(|| ConfigError::UnknownProfile(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
