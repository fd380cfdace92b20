use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::Vec2;

use super::{screen_rect, Projection, Style, Surface, SurfaceError};

/// Surface backed by an HTML canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    projection: Projection,
}

impl CanvasSurface {
    /// Look up `<canvas id="...">` in the current document
    pub fn from_id(id: &str) -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SurfaceError::NoWindow)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingCanvas(id.to_string()))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::NoContext(id.to_string()))?;

        Ok(Self {
            canvas,
            ctx,
            projection: Projection::default(),
        })
    }

    /// Match the backing store to the element's layout size; returns it.
    pub fn fit_to_client(&self) -> (f32, f32) {
        let w = self.canvas.client_width().max(0) as u32;
        let h = self.canvas.client_height().max(0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        (w as f32, h as f32)
    }

    #[inline]
    fn screen(&self, p: Vec2) -> (f64, f64) {
        let s = self.projection.to_screen(p);
        (s.x as f64, s.y as f64)
    }
}

impl Surface for CanvasSurface {
    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    fn projection(&self) -> Projection {
        self.projection
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn set_style(&mut self, style: Style) {
        self.ctx.set_fill_style_str(style.fill.css());
        self.ctx.set_stroke_style_str(style.stroke.css());
        self.ctx.set_line_width(style.line_width as f64);
        self.ctx.set_line_cap("round");
    }

    fn begin_shape(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        let (x, y) = self.screen(p);
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, p: Vec2) {
        let (x, y) = self.screen(p);
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, center: Vec2, radius: f32) {
        let (x, y) = self.screen(center);
        // Only fails for a negative radius.
        let _ = self.ctx.arc(x, y, radius.max(0.0) as f64, 0.0, std::f64::consts::TAU);
    }

    fn close_shape(&mut self) {
        self.ctx.close_path();
    }

    fn fill_shape(&mut self) {
        self.ctx.fill();
    }

    fn stroke_shape(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2) {
        let (top_left, size) = screen_rect(&self.projection, center, size);
        self.ctx
            .fill_rect(top_left.x as f64, top_left.y as f64, size.x as f64, size.y as f64);
    }
}
