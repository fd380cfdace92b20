use crate::core::Vec2;

use super::{screen_rect, Projection, Style, Surface};

/// One recorded draw call, with points already in canvas pixels
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Projection(Projection),
    Clear,
    Style(Style),
    Begin,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32 },
    Close,
    Fill,
    Stroke,
    FillRect { top_left: Vec2, size: Vec2 },
}

/// Surface that records instead of drawing; used off-browser and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    projection: Projection,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.commands.push(DrawCommand::Projection(projection));
    }

    fn projection(&self) -> Projection {
        self.projection
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_style(&mut self, style: Style) {
        self.commands.push(DrawCommand::Style(style));
    }

    fn begin_shape(&mut self) {
        self.commands.push(DrawCommand::Begin);
    }

    fn move_to(&mut self, p: Vec2) {
        let p = self.projection.to_screen(p);
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        let p = self.projection.to_screen(p);
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32) {
        let center = self.projection.to_screen(center);
        self.commands.push(DrawCommand::Arc { center, radius });
    }

    fn close_shape(&mut self) {
        self.commands.push(DrawCommand::Close);
    }

    fn fill_shape(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke_shape(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2) {
        let (top_left, size) = screen_rect(&self.projection, center, size);
        self.commands.push(DrawCommand::FillRect { top_left, size });
    }
}
