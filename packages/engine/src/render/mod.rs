//! Rendering collaborator.
//!
//! Scenes draw in their own coordinates through the [`Surface`] trait; the
//! surface applies the current [`Projection`] to reach canvas pixels.

mod canvas;
mod recording;

pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::core::Vec2;
use crate::domain::style::Color;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no browser window available")]
    NoWindow,

    #[error("canvas element '{0}' not found")]
    MissingCanvas(String),

    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    #[error("canvas '{0}' has no 2d context")]
    NoContext(String),
}

/// Camera mapping from scene coordinates to canvas pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Scene coordinates are canvas pixels (origin top-left, y down)
    Canvas { width: f32, height: f32 },
    /// Orthographic camera centered on the canvas (y up)
    Centered { width: f32, height: f32 },
}

impl Projection {
    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        match *self {
            Projection::Canvas { .. } => p,
            Projection::Centered { width, height } => Vec2::new(p.x + width * 0.5, height * 0.5 - p.y),
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Canvas { width: 0.0, height: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f32,
}

impl Style {
    /// Black fill, white outline, as every scene starts its frame
    pub const OUTLINE: Style = Style {
        fill: Color::Black,
        stroke: Color::White,
        line_width: 2.0,
    };

    pub fn filled(fill: Color) -> Self {
        Self { fill, ..Self::OUTLINE }
    }
}

/// Minimal 2D drawing context. Points are in scene coordinates.
pub trait Surface {
    fn set_projection(&mut self, projection: Projection);

    fn projection(&self) -> Projection;

    /// Wipe the whole canvas
    fn clear(&mut self);

    fn set_style(&mut self, style: Style);

    fn begin_shape(&mut self);

    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    /// Full circle
    fn arc(&mut self, center: Vec2, radius: f32);

    fn close_shape(&mut self);

    fn fill_shape(&mut self);

    fn stroke_shape(&mut self);

    /// Axis-aligned rectangle filled with the current fill color
    fn fill_rect(&mut self, center: Vec2, size: Vec2);
}

/// Canvas-pixel rectangle `(top_left, size)` covering a scene-space box
pub(crate) fn screen_rect(projection: &Projection, center: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let half = size * 0.5;
    let a = projection.to_screen(center - half);
    let b = projection.to_screen(center + half);
    let top_left = Vec2::new(a.x.min(b.x), a.y.min(b.y));
    (top_left, Vec2::new((a.x - b.x).abs(), (a.y - b.y).abs()))
}
