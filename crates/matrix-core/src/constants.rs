// Shared simulation and rendering tuning constants.

/// cmatrix-style glyph set: half-width katakana, digits and a few symbols.
pub const GLYPHS: &str = "ﾊﾐﾋｰｳｼﾅﾓﾆｻﾜﾂｵﾘｱﾎﾃﾏｹﾒｴｶｷﾑﾕﾗｾﾈｽﾀﾇﾍ012345789Z:.\"=*+-<>¦｜╌ç";

/// Default palette before any theme is applied.
pub const DEFAULT_COLORS: [&str; 4] = ["#0F0", "#0F6", "#0C0", "#3F3"];

// Spawn placement
pub const SPAWN_Y: f32 = -20.0; // top-edge spawns start just above the surface

// Boundaries
pub const BOTTOM_MARGIN: f32 = 30.0; // px below the surface before a glyph counts as gone
pub const SIDE_MARGIN: f32 = 30.0; // px past either side for drifting glyphs

// Per-glyph look
pub const BRIGHTNESS_MIN: f32 = 0.7;
pub const BRIGHTNESS_SPAN: f32 = 0.3;

// Trail rendering
pub const TRAIL_BASE_OPACITY: f32 = 0.3; // opacity of the freshest trail entry
pub const TRAIL_SIZE_FACTOR: f32 = 0.8; // trail glyphs are drawn smaller than the head
pub const TRAIL_MIN_OPACITY: f32 = 0.02; // decayed entries below this are dropped

// Horizontal sine drift
pub const DRIFT_FREQUENCY: f32 = 0.01; // radians per px of fall
pub const DRIFT_AMPLITUDE: f32 = 0.2; // px per tick

// FPS sampling window (ms); FPS is never recomputed more often than this
pub const FPS_SAMPLE_WINDOW_MS: f64 = 500.0;

// Demo spawns issued after "start test" and "restart"
pub const DEMO_SPAWN_COUNT: usize = 2;
pub const DEMO_SPAWN_DELAY_MS: f64 = 300.0;
pub const DEMO_SPAWN_STAGGER_MS: f64 = 200.0;

// Keyboard "add" batch
pub const KEY_ADD_BATCH: usize = 5;

// Load label thresholds (population)
pub const LOAD_MEDIUM_AT: usize = 500;
pub const LOAD_HEAVY_AT: usize = 1500;
pub const LOAD_EXTREME_AT: usize = 3000;

// Palette derivation from a theme accent
pub const THEME_LIGHTEN_STEPS: [i16; 4] = [0, 30, 60, 90];
