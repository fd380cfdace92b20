//! Bubble and triangle scenes: hand-rolled kinematics in canvas coordinates.

use tracing::{debug, warn};

use crate::core::{clamp_span, Rng, Vec2};
use crate::domain::body::{Body, Shape};
use crate::domain::config::{KinematicParams, SceneKind};
use crate::domain::orientation::{tilt_of, Orientation, GRAVITY_REDUCTION};
use crate::domain::style::{Color, ObjectStyle};
use crate::migration::Edge;
use crate::render::{Projection, Style, Surface};

use super::{Bounds, ObjectId, PortalState, Scene, SceneParam};

struct Entry {
    id: ObjectId,
    body: Body,
    color: Option<Color>,
}

pub struct KinematicScene {
    kind: SceneKind,
    params: KinematicParams,
    bounds: Bounds,
    entries: Vec<Entry>,
    next_id: u32,
    /// Last known device tilt, each axis in [-1, 1]
    tilt: Vec2,
    rng: Rng,
}

impl KinematicScene {
    /// Scene of `kind` with `params.count` random bodies.
    ///
    /// `kind` must be `Bubbles` or `Triangles`; anything else draws as bubbles.
    pub fn new(kind: SceneKind, params: KinematicParams, bounds: Bounds, seed: u32) -> Self {
        let mut scene = Self {
            kind,
            params,
            bounds,
            entries: Vec::new(),
            next_id: 1,
            tilt: Vec2::zero(),
            rng: Rng::new(seed),
        };
        scene.generate();
        scene
    }

    pub fn params(&self) -> &KinematicParams {
        &self.params
    }

    pub fn body(&self, id: ObjectId) -> Option<&Body> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.body)
    }

    /// Bias every body currently receives, px/s
    pub fn bias(&self) -> Vec2 {
        self.tilt * (self.params.g_strength * GRAVITY_REDUCTION)
    }

    fn shape(&self) -> Shape {
        match self.kind {
            SceneKind::Triangles => Shape::Triangle { size: self.params.size },
            _ => Shape::Circle { radius: self.params.size },
        }
    }

    fn alloc_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Replace the population with `count` random bodies inside the bounds
    pub fn generate(&mut self) {
        self.entries.clear();
        let Bounds { width, height } = self.bounds;
        let extent = self.params.size;
        for _ in 0..self.params.count {
            let x = clamp_span(self.rng.range(0.0, width), extent, width - extent);
            let y = clamp_span(self.rng.range(0.0, height), extent, height - extent);
            self.add_object(Vec2::new(x, y), ObjectStyle::default());
        }
        debug!(kind = ?self.kind, count = self.entries.len(), "population generated");
    }

    /// Time multiplier, clamped to [-1, 1]
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.params.speed = speed.clamp(-1.0, 1.0);
        }
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.params.threshold = threshold.max(0.0);
    }

    /// Resize every live body as well as future ones
    pub fn set_size(&mut self, size: f32) {
        let size = size.max(0.0);
        self.params.size = size;
        for entry in &mut self.entries {
            entry.body.shape = entry.body.shape.with_extent(size);
        }
    }

    pub fn set_count(&mut self, count: u32) {
        self.params.count = count;
        self.generate();
    }

    pub fn set_gravity_strength(&mut self, g_strength: f32) {
        self.params.g_strength = g_strength;
        self.refresh_bias();
    }

    fn refresh_bias(&mut self) {
        let bias = self.bias();
        for entry in &mut self.entries {
            entry.body.bias = bias;
        }
    }

    fn draw_links(&self, surface: &mut dyn Surface) {
        let threshold = self.params.threshold;
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                if a.body.position.distance(b.body.position) < threshold {
                    surface.begin_shape();
                    surface.move_to(a.body.position);
                    surface.line_to(b.body.position);
                    surface.stroke_shape();
                }
            }
        }
    }

    fn draw_body(surface: &mut dyn Surface, body: &Body) {
        let p = body.position;
        surface.begin_shape();
        match body.shape {
            Shape::Circle { radius } => surface.arc(p, radius),
            Shape::Triangle { size } => {
                surface.move_to(Vec2::new(p.x, p.y - size));
                surface.line_to(Vec2::new(p.x + size, p.y + size));
                surface.line_to(Vec2::new(p.x - size, p.y + size));
                surface.close_shape();
            }
        }
        surface.fill_shape();
        surface.stroke_shape();
    }
}

impl Scene for KinematicScene {
    fn kind(&self) -> SceneKind {
        self.kind
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, id: ObjectId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    fn ids(&self) -> Vec<ObjectId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    fn step(&mut self, dt_ms: f64) {
        let dt = (dt_ms / 1000.0) as f32;
        let speed = self.params.speed;
        let width = self.bounds.width;
        for entry in &mut self.entries {
            entry.body.advance(dt, speed, width);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_projection(self.projection());
        surface.clear();
        surface.set_style(Style::OUTLINE);

        if self.params.links {
            self.draw_links(surface);
        }

        let mut current = None;
        for entry in &self.entries {
            if entry.color != current {
                let fill = entry.color.unwrap_or(Color::Black);
                surface.set_style(Style::filled(fill));
                current = entry.color;
            }
            Self::draw_body(surface, &entry.body);
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        let old_height = self.bounds.height;
        self.bounds = bounds;
        for entry in &mut self.entries {
            entry.body.reclamp(old_height, bounds.width, bounds.height);
        }
    }

    fn projection(&self) -> Projection {
        Projection::Canvas {
            width: self.bounds.width,
            height: self.bounds.height,
        }
    }

    fn add_object(&mut self, position: Vec2, style: ObjectStyle) -> ObjectId {
        let id = self.alloc_id();
        let shape = self.shape();
        let spread = self.params.spread;
        let mut body = Body::random(&mut self.rng, position, shape, spread);
        body.bias = self.bias();
        self.entries.push(Entry {
            id,
            body,
            color: style.color,
        });
        id
    }

    fn remove_object(&mut self, id: ObjectId) -> Option<PortalState> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            warn!(kind = ?self.kind, id = id.0, "remove_object: object not found");
            return None;
        };
        let entry = self.entries.remove(index);
        Some(PortalState {
            position: entry.body.position,
            velocity: entry.body.velocity,
        })
    }

    fn exiting(&self, edge: Edge) -> Vec<ObjectId> {
        let height = self.bounds.height;
        self.entries
            .iter()
            .filter(|e| edge.is_past(e.body.position.y, height))
            .map(|e| e.id)
            .collect()
    }

    fn portal_state(&self, id: ObjectId) -> Option<PortalState> {
        self.body(id).map(|b| PortalState {
            position: b.position,
            velocity: b.velocity,
        })
    }

    fn admit(&mut self, portal: PortalState, style: ObjectStyle) -> ObjectId {
        let id = self.add_object(portal.position, style);
        if let Some(entry) = self.entries.last_mut() {
            entry.body.velocity = portal.velocity;
        }
        id
    }

    fn set_orientation(&mut self, orientation: Option<Orientation>) {
        self.tilt = tilt_of(orientation);
        self.refresh_bias();
    }

    fn apply_param(&mut self, param: SceneParam) -> bool {
        match param {
            SceneParam::Speed(v) => self.set_speed(v),
            SceneParam::Threshold(v) => self.set_threshold(v),
            SceneParam::Size(v) => self.set_size(v),
            SceneParam::Count(n) => self.set_count(n),
            SceneParam::GravityStrength(v) => self.set_gravity_strength(v),
            SceneParam::GravityScale(_) => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    fn bubbles(count: u32) -> KinematicScene {
        let params = KinematicParams {
            count,
            ..KinematicParams::bubbles()
        };
        KinematicScene::new(SceneKind::Bubbles, params, Bounds::new(400.0, 500.0), 7)
    }

    #[test]
    fn generates_in_bounds_population() {
        let scene = bubbles(20);
        assert_eq!(scene.len(), 20);
        for id in scene.ids() {
            let p = scene.body(id).unwrap().position;
            assert!(p.x >= 5.0 && p.x <= 395.0);
            assert!(p.y >= 5.0 && p.y <= 495.0);
        }
    }

    #[test]
    fn ids_are_not_reused() {
        let mut scene = bubbles(0);
        let a = scene.add_object(Vec2::new(10.0, 10.0), ObjectStyle::default());
        scene.remove_object(a).unwrap();
        let b = scene.add_object(Vec2::new(10.0, 10.0), ObjectStyle::default());
        assert_ne!(a, b);
    }

    #[test]
    fn removing_unknown_object_is_a_noop() {
        let mut scene = bubbles(2);
        assert_eq!(scene.remove_object(ObjectId(999)), None);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn admitted_object_keeps_portal_velocity() {
        let mut scene = bubbles(0);
        let portal = PortalState {
            position: Vec2::new(120.0, 0.0),
            velocity: Vec2::new(-30.0, 80.0),
        };
        let id = scene.admit(portal, ObjectStyle::default());
        assert_eq!(scene.portal_state(id), Some(portal));
    }

    #[test]
    fn exiting_reports_both_edges() {
        let mut scene = bubbles(0);
        let low = scene.add_object(Vec2::new(50.0, 501.0), ObjectStyle::default());
        let high = scene.add_object(Vec2::new(50.0, -1.0), ObjectStyle::default());
        scene.add_object(Vec2::new(50.0, 250.0), ObjectStyle::default());

        assert_eq!(scene.exiting(Edge::Bottom), vec![low]);
        assert_eq!(scene.exiting(Edge::Top), vec![high]);
    }

    #[test]
    fn orientation_sets_bias_for_old_and_new_bodies() {
        let mut scene = bubbles(3);
        scene.set_orientation(Some(Orientation::new(0.0, 45.0, 90.0)));
        let expected = Vec2::new(150.0, 75.0);
        assert_eq!(scene.bias(), expected);
        for id in scene.ids() {
            assert_eq!(scene.body(id).unwrap().bias, expected);
        }

        let fresh = scene.add_object(Vec2::new(10.0, 10.0), ObjectStyle::default());
        assert_eq!(scene.body(fresh).unwrap().bias, expected);

        scene.set_orientation(None);
        assert_eq!(scene.body(fresh).unwrap().bias, Vec2::zero());
    }

    #[test]
    fn speed_setter_clamps() {
        let mut scene = bubbles(0);
        scene.set_speed(4.0);
        assert_eq!(scene.params().speed, 1.0);
        assert!(scene.apply_param(SceneParam::Speed(-3.0)));
        assert_eq!(scene.params().speed, -1.0);
        assert!(!scene.apply_param(SceneParam::GravityScale(2.0)));
    }

    #[test]
    fn set_size_applies_to_live_bodies() {
        let mut scene = bubbles(4);
        scene.set_size(12.0);
        for id in scene.ids() {
            assert_eq!(scene.body(id).unwrap().shape, Shape::Circle { radius: 12.0 });
        }
    }

    #[test]
    fn set_count_regenerates() {
        let mut scene = bubbles(3);
        let before = scene.ids();
        scene.set_count(5);
        assert_eq!(scene.len(), 5);
        assert!(before.iter().all(|id| !scene.contains(*id)));
    }

    #[test]
    fn draws_links_before_bodies() {
        let mut scene = bubbles(0);
        scene.add_object(Vec2::new(100.0, 100.0), ObjectStyle::default());
        scene.add_object(Vec2::new(120.0, 100.0), ObjectStyle::default());
        scene.add_object(Vec2::new(300.0, 300.0), ObjectStyle::default());

        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface);

        let commands = surface.commands();
        let first_line = commands.iter().position(|c| matches!(c, DrawCommand::LineTo(_))).unwrap();
        let first_arc = commands.iter().position(|c| matches!(c, DrawCommand::Arc { .. })).unwrap();
        assert!(first_line < first_arc);
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::LineTo(_))), 1);
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::Arc { .. })), 3);
    }

    #[test]
    fn triangles_draw_without_links() {
        let params = KinematicParams {
            count: 0,
            ..KinematicParams::triangles()
        };
        let mut scene = KinematicScene::new(SceneKind::Triangles, params, Bounds::new(300.0, 300.0), 1);
        scene.add_object(Vec2::new(50.0, 50.0), ObjectStyle::default());
        scene.add_object(Vec2::new(55.0, 50.0), ObjectStyle::default());

        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface);

        assert_eq!(surface.count(|c| matches!(c, DrawCommand::Close)), 2);
        assert!(surface.commands().contains(&DrawCommand::MoveTo(Vec2::new(50.0, 40.0))));
        assert!(surface.commands().contains(&DrawCommand::LineTo(Vec2::new(60.0, 60.0))));
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::LineTo(_))), 4);
    }

    #[test]
    fn resize_clamps_in_bounds_bodies_only() {
        let mut scene = bubbles(0);
        let inside = scene.add_object(Vec2::new(380.0, 450.0), ObjectStyle::default());
        let leaving = scene.add_object(Vec2::new(380.0, 520.0), ObjectStyle::default());

        scene.resize(Bounds::new(200.0, 100.0));

        assert_eq!(scene.body(inside).unwrap().position, Vec2::new(195.0, 95.0));
        assert_eq!(scene.body(leaving).unwrap().position, Vec2::new(195.0, 520.0));
    }
}
