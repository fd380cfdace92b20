use crate::core::Vec2;
use crate::systems::physics_world::{BodyKind, BoxShape};

/// Rigid Body - moves as a single unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (box center, y up)
    pub pos: Vec2,
    /// Velocity vector (units per step)
    pub velocity: Vec2,
    /// Unique ID for this body
    pub id: u32,
    pub kind: BodyKind,

    // === Bounding Box (AABB) ===
    pub half_width: f32,
    pub half_height: f32,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Fraction of tangential velocity lost per contact step
    pub friction: f32,
    /// Fraction of velocity lost per step to drag
    pub friction_air: f32,
}

impl RigidBody {
    pub fn new_box(pos: Vec2, shape: BoxShape, kind: BodyKind, id: u32) -> Self {
        Self {
            pos,
            velocity: Vec2::zero(),
            id,
            kind,
            half_width: shape.width * 0.5,
            half_height: shape.height * 0.5,
            restitution: 0.3, // Default: slight bounce
            friction: 0.1,
            friction_air: 0.01,
        }
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    pub fn shape(&self) -> BoxShape {
        BoxShape::new(self.half_width * 2.0, self.half_height * 2.0)
    }

    pub fn set_shape(&mut self, shape: BoxShape) {
        self.half_width = shape.width * 0.5;
        self.half_height = shape.height * 0.5;
    }

    /// (min, max) corners at the current position
    #[inline]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.bounds_at(self.pos)
    }

    #[inline]
    pub fn bounds_at(&self, pos: Vec2) -> (Vec2, Vec2) {
        let half = Vec2::new(self.half_width, self.half_height);
        (pos - half, pos + half)
    }
}
