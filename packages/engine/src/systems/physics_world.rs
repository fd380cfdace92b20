use crate::core::Vec2;

/// Opaque reference to a body inside a [`PhysicsWorld`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Integrated every step
    Dynamic,
    /// Never moves on its own; only `set_position` / `set_size` change it
    Static,
}

/// Axis-aligned box, full extents
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShape {
    pub width: f32,
    pub height: f32,
}

impl BoxShape {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }
}

/// Capabilities the cube scene needs from a rigid-body world.
///
/// Positions are box centers in the world's frame (y up); velocities are in
/// units per step. Operations on an unknown handle are no-ops.
pub trait PhysicsWorld {
    fn add_body(&mut self, shape: BoxShape, position: Vec2, kind: BodyKind) -> BodyHandle;

    /// Returns `false` if the handle was not present
    fn remove_body(&mut self, handle: BodyHandle) -> bool;

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2);

    fn velocity(&self, handle: BodyHandle) -> Option<Vec2>;

    fn position(&self, handle: BodyHandle) -> Option<Vec2>;

    fn set_position(&mut self, handle: BodyHandle, position: Vec2);

    fn set_size(&mut self, handle: BodyHandle, shape: BoxShape);

    fn set_gravity(&mut self, gravity: Vec2);

    fn gravity(&self) -> Vec2;

    fn body_count(&self) -> usize;

    /// Advance every dynamic body by one fixed step
    fn step(&mut self);
}
