use crate::color::Color;
use glam::Vec2;

/// How a single glyph is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPaint {
    pub color: Color,
    pub size: f32,
    pub alpha: f32,
    pub bold: bool,
}

/// Immediate-mode 2D target the render loop paints onto.
///
/// The web front-end implements this over `CanvasRenderingContext2d`; tests
/// use a recorder.
pub trait Surface {
    /// Current size in px as `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Cover the whole surface with `color` at `alpha` (1.0 clears).
    fn fill_backdrop(&mut self, color: Color, alpha: f32);

    fn draw_glyph(&mut self, glyph: char, position: Vec2, paint: &GlyphPaint);
}
