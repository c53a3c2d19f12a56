use glam::Vec2;
use matrix_core::{Color, GlyphPaint, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

const FONT_FAMILY: &str = "'Courier New', monospace";

/// `Surface` over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // Reused buffer for the single-glyph fill_text argument
    glyph_buf: String,
}

impl CanvasSurface {
    /// Grab an opaque 2D context for `canvas`.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"alpha".into(), &false.into())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            glyph_buf: String::with_capacity(4),
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_backdrop(&mut self, color: Color, alpha: f32) {
        let (w, h) = self.size();
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        self.ctx.restore();
    }

    fn draw_glyph(&mut self, glyph: char, position: Vec2, paint: &GlyphPaint) {
        self.glyph_buf.clear();
        self.glyph_buf.push(glyph);
        let weight = if paint.bold { "bold " } else { "" };
        self.ctx.save();
        self.ctx.set_global_alpha(paint.alpha as f64);
        self.ctx.set_fill_style_str(&paint.color.css());
        self.ctx
            .set_font(&format!("{}{}px {}", weight, paint.size, FONT_FAMILY));
        _ = self
            .ctx
            .fill_text(&self.glyph_buf, position.x as f64, position.y as f64);
        self.ctx.restore();
    }
}
