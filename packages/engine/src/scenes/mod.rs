//! Scenes: independent simulations, each drawing into its own surface.
//!
//! Every scene speaks the same [`Scene`] interface so the migration
//! coordinator can move objects between a kinematic scene and a
//! physics-backed one without knowing which is which.

mod cubes;
mod kinematic;

pub use cubes::CubeScene;
pub use kinematic::KinematicScene;

pub use crate::domain::config::SceneKind;

use crate::core::Vec2;
use crate::domain::orientation::Orientation;
use crate::domain::style::ObjectStyle;
use crate::migration::Edge;
use crate::render::{Projection, Surface};

/// Index of a scene within the stage, in declaration order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub usize);

/// Per-scene object id; never reused within a scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Scene size in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Scene-independent state of an object crossing between scenes.
///
/// Canvas convention: origin top-left, y down, velocity in px/s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PortalState {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Runtime tuning command; scenes ignore the ones they do not have.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneParam {
    Speed(f32),
    Threshold(f32),
    Size(f32),
    Count(u32),
    GravityStrength(f32),
    GravityScale(f32),
}

pub trait Scene {
    fn kind(&self) -> SceneKind;

    fn bounds(&self) -> Bounds;

    /// Number of migratable objects (walls excluded)
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: ObjectId) -> bool;

    /// Object ids in collection order
    fn ids(&self) -> Vec<ObjectId>;

    /// Advance the simulation by `dt_ms` without drawing
    fn step(&mut self, dt_ms: f64);

    fn draw(&self, surface: &mut dyn Surface);

    /// Advance, then redraw
    fn tick(&mut self, dt_ms: f64, surface: &mut dyn Surface) {
        self.step(dt_ms);
        self.draw(surface);
    }

    fn resize(&mut self, bounds: Bounds);

    /// Camera the scene draws through
    fn projection(&self) -> Projection;

    /// Create an object at `position` in the scene's own frame
    fn add_object(&mut self, position: Vec2, style: ObjectStyle) -> ObjectId;

    /// Remove an object, returning where it was headed.
    ///
    /// Unknown ids are a logged no-op.
    fn remove_object(&mut self, id: ObjectId) -> Option<PortalState>;

    /// Objects that have left through `edge`
    fn exiting(&self, edge: Edge) -> Vec<ObjectId>;

    fn portal_state(&self, id: ObjectId) -> Option<PortalState>;

    /// Take in an object arriving from another scene
    fn admit(&mut self, portal: PortalState, style: ObjectStyle) -> ObjectId;

    /// Update gravity from device orientation; `None` means level.
    fn set_orientation(&mut self, orientation: Option<Orientation>);

    /// Returns false if the scene has no such parameter.
    fn apply_param(&mut self, param: SceneParam) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_garbage() {
        assert_eq!(Bounds::new(-3.0, f32::NAN), Bounds::default());
        assert_eq!(Bounds::new(640.0, 480.0).width, 640.0);
    }
}
