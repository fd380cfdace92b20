//! Gravity cubes: a physics-backed scene in a centered, y-up frame.
//!
//! The world measures velocity per fixed step. Portal states are px/s in
//! canvas convention, so crossing the boundary scales by `STEPS_PER_SECOND`
//! and flips `y`.

use tracing::{debug, warn};

use crate::core::{Rng, Vec2};
use crate::domain::config::{CubeParams, SceneKind, G_SCALE_MAX, G_SCALE_MIN};
use crate::domain::orientation::Orientation;
use crate::domain::style::{Color, ObjectStyle};
use crate::migration::Edge;
use crate::render::{Projection, Style, Surface};
use crate::systems::{BodyHandle, BodyKind, BoxShape, PhysicsWorld, RigidBodyWorld, Runner, STEPS_PER_SECOND};
use crate::systems::rigid_body_system::GRAVITY;

use super::{Bounds, ObjectId, PortalState, Scene, SceneParam};

/// Color of cubes added without one
const DEFAULT_CUBE_COLOR: Color = Color::Green;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WallSlot {
    Right,
    Left,
    Middle,
}

impl WallSlot {
    const ALL: [WallSlot; 3] = [WallSlot::Right, WallSlot::Left, WallSlot::Middle];

    fn color(&self) -> Color {
        match self {
            WallSlot::Right => Color::Blue,
            WallSlot::Left => Color::Green,
            WallSlot::Middle => Color::Purple,
        }
    }

    /// Center and extents for a scene of `bounds`
    fn layout(&self, bounds: Bounds, thickness: f32) -> (Vec2, BoxShape) {
        let Bounds { width, height } = bounds;
        match self {
            WallSlot::Right => (Vec2::new(width * 0.5, 0.0), BoxShape::new(thickness, height)),
            WallSlot::Left => (Vec2::new(-width * 0.5, 0.0), BoxShape::new(thickness, height)),
            WallSlot::Middle => (Vec2::zero(), BoxShape::new(width * 0.5, thickness)),
        }
    }
}

struct Wall {
    slot: WallSlot,
    handle: BodyHandle,
}

struct Cube {
    id: ObjectId,
    handle: BodyHandle,
    color: Color,
}

pub struct CubeScene<W: PhysicsWorld = RigidBodyWorld> {
    params: CubeParams,
    bounds: Bounds,
    world: W,
    runner: Runner,
    walls: Vec<Wall>,
    cubes: Vec<Cube>,
    next_id: u32,
    /// `None` until orientation data arrives
    tilt: Option<Vec2>,
    rng: Rng,
}

impl CubeScene<RigidBodyWorld> {
    pub fn new(params: CubeParams, bounds: Bounds, seed: u32) -> Self {
        Self::with_world(RigidBodyWorld::new(), params, bounds, seed)
    }
}

impl<W: PhysicsWorld> CubeScene<W> {
    /// Scene over an existing (normally empty) world; adds the walls and the
    /// initial cubes.
    pub fn with_world(world: W, params: CubeParams, bounds: Bounds, seed: u32) -> Self {
        let mut scene = Self {
            params,
            bounds,
            world,
            runner: Runner::new(),
            walls: Vec::with_capacity(WallSlot::ALL.len()),
            cubes: Vec::new(),
            next_id: 1,
            tilt: None,
            rng: Rng::new(seed),
        };

        for slot in WallSlot::ALL {
            let (position, shape) = slot.layout(bounds, params.wall_thickness);
            let handle = scene.world.add_body(shape, position, BodyKind::Static);
            scene.walls.push(Wall { slot, handle });
        }
        scene.spawn(params.count);
        scene.apply_gravity();
        scene
    }

    pub fn params(&self) -> &CubeParams {
        &self.params
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Native-frame center of a cube
    pub fn position(&self, id: ObjectId) -> Option<Vec2> {
        self.handle(id).and_then(|h| self.world.position(h))
    }

    /// Native-frame velocity of a cube, px per step
    pub fn velocity(&self, id: ObjectId) -> Option<Vec2> {
        self.handle(id).and_then(|h| self.world.velocity(h))
    }

    pub fn color(&self, id: ObjectId) -> Option<Color> {
        self.cubes.iter().find(|c| c.id == id).map(|c| c.color)
    }

    fn handle(&self, id: ObjectId) -> Option<BodyHandle> {
        self.cubes.iter().find(|c| c.id == id).map(|c| c.handle)
    }

    fn spawn(&mut self, count: u32) {
        let half_w = self.bounds.width * 0.5;
        let half_h = self.bounds.height * 0.5;
        for i in 0..count as usize {
            let x = self.rng.range(-half_w, half_w);
            let y = self.rng.range(-half_h, half_h);
            let color = Color::CUBE_CYCLE[i % Color::CUBE_CYCLE.len()];
            self.add_object(Vec2::new(x, y), ObjectStyle::colored(color));
        }
        debug!(count, "cubes spawned");
    }

    /// Gravity the world should currently use, per step²
    pub fn gravity(&self) -> Vec2 {
        let base = match self.tilt {
            None => Vec2::new(0.0, -1.0),
            Some(t) => Vec2::new(t.x, -t.y),
        };
        base * (GRAVITY * self.params.g_scale)
    }

    fn apply_gravity(&mut self) {
        let gravity = self.gravity();
        self.world.set_gravity(gravity);
    }

    /// Gravity multiplier, clamped to [`G_SCALE_MIN`, `G_SCALE_MAX`]
    pub fn set_gravity_scale(&mut self, g_scale: f32) {
        if !g_scale.is_finite() {
            return;
        }
        self.params.g_scale = g_scale.clamp(G_SCALE_MIN, G_SCALE_MAX);
        self.apply_gravity();
    }

    /// Resize every cube, present and future
    pub fn set_cube_size(&mut self, size: f32) {
        let size = size.max(0.0);
        self.params.cube_size = size;
        for cube in &self.cubes {
            self.world.set_size(cube.handle, BoxShape::square(size));
        }
    }

    /// Replace all cubes with `count` fresh ones
    pub fn set_count(&mut self, count: u32) {
        for cube in self.cubes.drain(..) {
            self.world.remove_body(cube.handle);
        }
        self.params.count = count;
        self.spawn(count);
    }

    fn place_walls(&mut self) {
        for wall in &self.walls {
            let (position, shape) = wall.slot.layout(self.bounds, self.params.wall_thickness);
            self.world.set_position(wall.handle, position);
            self.world.set_size(wall.handle, shape);
        }
    }

    #[inline]
    fn to_canvas(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x + self.bounds.width * 0.5, self.bounds.height * 0.5 - p.y)
    }

    #[inline]
    fn from_canvas(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.bounds.width * 0.5, self.bounds.height * 0.5 - p.y)
    }
}

impl<W: PhysicsWorld> Scene for CubeScene<W> {
    fn kind(&self) -> SceneKind {
        SceneKind::Cubes
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn len(&self) -> usize {
        self.cubes.len()
    }

    fn contains(&self, id: ObjectId) -> bool {
        self.cubes.iter().any(|c| c.id == id)
    }

    fn ids(&self) -> Vec<ObjectId> {
        self.cubes.iter().map(|c| c.id).collect()
    }

    fn step(&mut self, dt_ms: f64) {
        self.runner.advance(&mut self.world, dt_ms);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_projection(self.projection());
        surface.clear();

        for wall in &self.walls {
            let (position, shape) = wall.slot.layout(self.bounds, self.params.wall_thickness);
            surface.set_style(Style::filled(wall.slot.color()));
            surface.fill_rect(position, Vec2::new(shape.width, shape.height));
        }

        let size = self.params.cube_size;
        let half = size * 0.5;
        for cube in &self.cubes {
            let Some(p) = self.world.position(cube.handle) else {
                continue;
            };
            surface.set_style(Style::filled(cube.color));
            surface.fill_rect(p, Vec2::new(size, size));

            surface.begin_shape();
            surface.move_to(Vec2::new(p.x - half, p.y - half));
            surface.line_to(Vec2::new(p.x + half, p.y - half));
            surface.line_to(Vec2::new(p.x + half, p.y + half));
            surface.line_to(Vec2::new(p.x - half, p.y + half));
            surface.close_shape();
            surface.stroke_shape();
        }
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.place_walls();
    }

    fn projection(&self) -> Projection {
        Projection::Centered {
            width: self.bounds.width,
            height: self.bounds.height,
        }
    }

    fn add_object(&mut self, position: Vec2, style: ObjectStyle) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let shape = BoxShape::square(self.params.cube_size);
        let handle = self.world.add_body(shape, position, BodyKind::Dynamic);
        self.cubes.push(Cube {
            id,
            handle,
            color: style.color.unwrap_or(DEFAULT_CUBE_COLOR),
        });
        id
    }

    fn remove_object(&mut self, id: ObjectId) -> Option<PortalState> {
        let Some(index) = self.cubes.iter().position(|c| c.id == id) else {
            warn!(id = id.0, "remove_object: cube not found");
            return None;
        };
        let portal = self.portal_state(id);
        let cube = self.cubes.remove(index);
        self.world.remove_body(cube.handle);
        portal
    }

    fn exiting(&self, edge: Edge) -> Vec<ObjectId> {
        let height = self.bounds.height;
        self.cubes
            .iter()
            .filter(|c| {
                self.world
                    .position(c.handle)
                    .is_some_and(|p| edge.is_past(self.to_canvas(p).y, height))
            })
            .map(|c| c.id)
            .collect()
    }

    fn portal_state(&self, id: ObjectId) -> Option<PortalState> {
        let handle = self.handle(id)?;
        let position = self.world.position(handle)?;
        let velocity = self.world.velocity(handle)?;
        Some(PortalState {
            position: self.to_canvas(position),
            velocity: Vec2::new(velocity.x, -velocity.y) * STEPS_PER_SECOND,
        })
    }

    fn admit(&mut self, portal: PortalState, style: ObjectStyle) -> ObjectId {
        let position = self.from_canvas(portal.position);
        let id = self.add_object(position, style);
        let velocity = Vec2::new(portal.velocity.x / STEPS_PER_SECOND, -portal.velocity.y / STEPS_PER_SECOND);
        if let Some(handle) = self.handle(id) {
            self.world.set_velocity(handle, velocity);
        }
        id
    }

    fn set_orientation(&mut self, orientation: Option<Orientation>) {
        self.tilt = orientation.map(|o| o.tilt());
        self.apply_gravity();
    }

    fn apply_param(&mut self, param: SceneParam) -> bool {
        match param {
            SceneParam::GravityScale(v) => self.set_gravity_scale(v),
            SceneParam::Size(v) => self.set_cube_size(v),
            SceneParam::Count(n) => self.set_count(n),
            _ => return false,
        }
        true
    }
}
