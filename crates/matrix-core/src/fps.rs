use crate::constants::FPS_SAMPLE_WINDOW_MS;

/// Windowed frames-per-second estimate.
///
/// Frames are counted on every call to [`FpsMeter::frame`], but the rate is
/// only recomputed once a full sampling window has elapsed. In between, the
/// last published value stands.
#[derive(Clone, Debug)]
pub struct FpsMeter {
    window_ms: f64,
    frames: u32,
    window_start: Option<f64>,
    fps: f64,
    published: u64,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(FPS_SAMPLE_WINDOW_MS)
    }
}

impl FpsMeter {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            frames: 0,
            window_start: None,
            fps: 0.0,
            published: 0,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn set_window(&mut self, window_ms: f64) {
        self.window_ms = window_ms;
    }

    /// Count one frame at `timestamp_ms`; returns the new value when one is
    /// published.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<f64> {
        self.frames += 1;
        let start = *self.window_start.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - start;
        if elapsed < self.window_ms || elapsed <= 0.0 {
            return None;
        }
        self.fps = self.frames as f64 * 1000.0 / elapsed;
        self.frames = 0;
        self.window_start = Some(timestamp_ms);
        self.published += 1;
        Some(self.fps)
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// How many values have been published since the last reset.
    pub fn published(&self) -> u64 {
        self.published
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.window_ms);
    }
}

/// Coarse label for how much the current population is asking of the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadLevel {
    Light,
    Medium,
    Heavy,
    Extreme,
}

impl LoadLevel {
    pub fn for_population(population: usize) -> Self {
        use crate::constants::{LOAD_EXTREME_AT, LOAD_HEAVY_AT, LOAD_MEDIUM_AT};
        match population {
            n if n >= LOAD_EXTREME_AT => LoadLevel::Extreme,
            n if n >= LOAD_HEAVY_AT => LoadLevel::Heavy,
            n if n >= LOAD_MEDIUM_AT => LoadLevel::Medium,
            _ => LoadLevel::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoadLevel::Light => "LIGHT",
            LoadLevel::Medium => "MEDIUM",
            LoadLevel::Heavy => "HEAVY",
            LoadLevel::Extreme => "EXTREME",
        }
    }
}
