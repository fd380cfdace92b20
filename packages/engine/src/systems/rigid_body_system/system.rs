use crate::core::Vec2;
use crate::rigid_body::RigidBody;
use crate::systems::physics_world::{BodyHandle, BodyKind, BoxShape, PhysicsWorld};

use super::collision::{sweep_axis, Axis};

/// Downward acceleration at unit scale, world units per step²
pub const GRAVITY: f32 = 0.28;

/// Per-axis speed limit, world units per step
pub const MAX_SPEED: f32 = 40.0;

/// Rebounds slower than this come to rest
const REST_SPEED: f32 = 0.5;

/// Manages all rigid bodies of one cube scene
pub struct RigidBodyWorld {
    bodies: Vec<RigidBody>,
    next_id: u32,
    gravity: Vec2,
}

impl RigidBodyWorld {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity: Vec2::new(0.0, -GRAVITY),
        }
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == handle.0)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == handle.0)
    }
}

impl Default for RigidBodyWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn bounce(v: f32, restitution: f32) -> f32 {
    let out = -v * restitution;
    if out.abs() < REST_SPEED {
        0.0
    } else {
        out
    }
}

impl PhysicsWorld for RigidBodyWorld {
    fn add_body(&mut self, shape: BoxShape, position: Vec2, kind: BodyKind) -> BodyHandle {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(RigidBody::new_box(position, shape, kind, id));
        BodyHandle(id)
    }

    fn remove_body(&mut self, handle: BodyHandle) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == handle.0) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(body) = self.body_mut(handle) {
            body.velocity = velocity;
        }
    }

    fn velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.velocity)
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.pos)
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vec2) {
        if let Some(body) = self.body_mut(handle) {
            body.pos = position;
        }
    }

    fn set_size(&mut self, handle: BodyHandle, shape: BoxShape) {
        if let Some(body) = self.body_mut(handle) {
            body.set_shape(shape);
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn step(&mut self) {
        for i in 0..self.bodies.len() {
            if self.bodies[i].is_static() {
                continue;
            }
            let mut body = self.bodies[i];

            // Integrate velocity (very simple).
            body.velocity = (body.velocity + self.gravity) * (1.0 - body.friction_air);

            // Clamp to keep one step's sweep bounded.
            body.velocity.x = body.velocity.x.clamp(-MAX_SPEED, MAX_SPEED);
            body.velocity.y = body.velocity.y.clamp(-MAX_SPEED, MAX_SPEED);

            // Resolve per-axis (cheap + deterministic).
            let (dx, hit_x) = sweep_axis(&self.bodies, i, &body, Axis::X, body.velocity.x);
            body.pos.x += dx;
            if hit_x {
                body.velocity.x = bounce(body.velocity.x, body.restitution);
            }

            let (dy, hit_y) = sweep_axis(&self.bodies, i, &body, Axis::Y, body.velocity.y);
            body.pos.y += dy;
            if hit_y {
                body.velocity.y = bounce(body.velocity.y, body.restitution);
                body.velocity.x *= 1.0 - body.friction;
            }

            self.bodies[i] = body;
        }
    }
}
