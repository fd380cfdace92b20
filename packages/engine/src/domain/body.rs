//! Kinematic bodies for the bubble and triangle scenes.
//!
//! Integration is plain Euler with a per-body bias. Only the side edges
//! reflect; leaving through the top or bottom is how a body migrates.

use serde::{Deserialize, Serialize};

use crate::core::{clamp_span, Rng, Vec2};

/// Outline of a kinematic body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f32 },
    /// Isoceles triangle, apex `size` above the center, base `size` below
    Triangle { size: f32 },
}

impl Shape {
    /// Half-width used for side-edge contact
    #[inline]
    pub fn extent(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Triangle { size } => size,
        }
    }

    /// Same outline kind, new extent
    pub fn with_extent(self, extent: f32) -> Self {
        match self {
            Shape::Circle { .. } => Shape::Circle { radius: extent },
            Shape::Triangle { .. } => Shape::Triangle { size: extent },
        }
    }
}

/// Symmetric ranges for freshly rolled velocities (px/s)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VelocitySpread {
    pub vx: f32,
    pub vy: f32,
}

impl VelocitySpread {
    pub const BUBBLES: VelocitySpread = VelocitySpread { vx: 200.0, vy: 100.0 };
    pub const TRIANGLES: VelocitySpread = VelocitySpread { vx: 200.0, vy: 200.0 };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Canvas coordinates, y down
    pub position: Vec2,
    /// px/s
    pub velocity: Vec2,
    /// Orientation-driven drift added to velocity, px/s
    pub bias: Vec2,
    pub shape: Shape,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, shape: Shape) -> Self {
        Self {
            position,
            velocity,
            bias: Vec2::zero(),
            shape,
        }
    }

    /// Body at `position` with a velocity drawn uniformly from `spread`
    pub fn random(rng: &mut Rng, position: Vec2, shape: Shape, spread: VelocitySpread) -> Self {
        let velocity = Vec2::new(rng.range(-spread.vx, spread.vx), rng.range(-spread.vy, spread.vy));
        Self::new(position, velocity, shape)
    }

    /// Advance by `dt` seconds scaled by `speed`, reflecting off the side edges
    /// of a scene `width` pixels wide.
    ///
    /// Horizontal bias is dropped for a step that starts with the body resting
    /// against the edge the bias pushes toward. A negative `speed` runs the
    /// body backwards, so walls reflect the effective direction of travel.
    pub fn advance(&mut self, dt: f32, speed: f32, width: f32) {
        let extent = self.shape.extent();
        let lo = extent;
        let hi = width - extent;

        // Reversed scenes move against their velocity.
        let dir = if speed < 0.0 { -1.0 } else { 1.0 };

        let push = self.bias.x * dir;
        let pinned = (self.position.x <= lo && push < 0.0) || (self.position.x >= hi && push > 0.0);
        let bias_x = if pinned { 0.0 } else { self.bias.x };

        let step = speed * dt;
        self.position.x += (self.velocity.x + bias_x) * step;
        self.position.y += (self.velocity.y + self.bias.y) * step;

        if self.position.x < lo {
            self.velocity.x = self.velocity.x.abs() * dir;
        } else if self.position.x > hi {
            self.velocity.x = -self.velocity.x.abs() * dir;
        }
        self.position.x = clamp_span(self.position.x, lo, hi);
    }

    /// Keep the body inside a scene resized from `old_height` to
    /// `width` x `height`.
    ///
    /// Bodies that were already beyond the top or bottom edge are waiting to
    /// migrate and keep their `y`.
    pub fn reclamp(&mut self, old_height: f32, width: f32, height: f32) {
        let extent = self.shape.extent();
        self.position.x = clamp_span(self.position.x, extent, width - extent);
        if self.position.y >= 0.0 && self.position.y <= old_height {
            self.position.y = clamp_span(self.position.y, extent, height - extent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bubble(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), Shape::Circle { radius: 5.0 })
    }

    #[test]
    fn free_flight_is_linear() {
        let mut b = bubble(100.0, 100.0, 30.0, -20.0);
        b.advance(0.5, 1.0, 400.0);
        assert_eq!(b.position, Vec2::new(115.0, 90.0));
        assert_eq!(b.velocity, Vec2::new(30.0, -20.0));
    }

    #[test]
    fn left_edge_reflects_and_clamps() {
        let mut b = bubble(3.0, 50.0, -40.0, 0.0);
        b.advance(0.1, 1.0, 400.0);
        assert!(b.velocity.x >= 0.0);
        assert!(b.position.x >= 5.0);
    }

    #[test]
    fn right_edge_reflects_and_clamps() {
        let mut b = bubble(398.0, 50.0, 120.0, 0.0);
        b.advance(0.1, 1.0, 400.0);
        assert!(b.velocity.x <= 0.0);
        assert!(b.position.x <= 395.0);
    }

    #[test]
    fn vertical_exit_is_not_clamped() {
        let mut b = bubble(100.0, 498.0, 0.0, 100.0);
        b.advance(0.1, 1.0, 400.0);
        assert_eq!(b.position.y, 508.0);
        assert_eq!(b.velocity.y, 100.0);
    }

    #[test]
    fn speed_factor_scales_and_reverses() {
        let mut b = bubble(100.0, 100.0, 10.0, 10.0);
        b.advance(1.0, -0.5, 400.0);
        assert_eq!(b.position, Vec2::new(95.0, 95.0));
    }

    #[test]
    fn reversed_scene_leaves_the_wall_after_reflecting() {
        let mut b = bubble(8.0, 100.0, 40.0, 0.0);
        b.advance(0.1, -1.0, 400.0);
        assert_eq!(b.position.x, 5.0);
        assert_eq!(b.velocity.x, -40.0);

        let mut last = b.position.x;
        for _ in 0..19 {
            b.advance(0.1, -1.0, 400.0);
            assert!(b.position.x > last);
            last = b.position.x;
        }
        assert_eq!(b.velocity.x, -40.0);
    }

    #[test]
    fn reversed_bias_into_wall_is_dropped_while_pinned() {
        let mut b = bubble(5.0, 100.0, 0.0, 0.0);
        b.bias = Vec2::new(50.0, 0.0);
        b.advance(0.1, -1.0, 400.0);
        assert_eq!(b.position.x, 5.0);
    }

    #[test]
    fn bias_is_added_to_velocity() {
        let mut b = bubble(100.0, 100.0, 0.0, 0.0);
        b.bias = Vec2::new(20.0, 40.0);
        b.advance(0.5, 1.0, 400.0);
        assert_eq!(b.position, Vec2::new(110.0, 120.0));
    }

    #[test]
    fn bias_into_wall_is_dropped_while_pinned() {
        let mut b = bubble(5.0, 100.0, 0.0, 0.0);
        b.bias = Vec2::new(-50.0, 0.0);
        b.advance(0.1, 1.0, 400.0);
        assert_eq!(b.position.x, 5.0);

        b.bias = Vec2::new(50.0, 0.0);
        b.advance(0.1, 1.0, 400.0);
        assert_eq!(b.position.x, 10.0);
    }

    #[test]
    fn triangles_use_size_as_extent() {
        let mut t = Body::new(Vec2::new(12.0, 0.0), Vec2::new(-100.0, 0.0), Shape::Triangle { size: 10.0 });
        t.advance(0.1, 1.0, 300.0);
        assert_eq!(t.position.x, 10.0);
        assert_eq!(t.velocity.x, 100.0);
    }

    #[test]
    fn narrow_scene_centers_body() {
        let mut b = bubble(2.0, 10.0, -10.0, 0.0);
        b.advance(0.1, 1.0, 6.0);
        assert_eq!(b.position.x, 3.0);
    }

    #[test]
    fn reclamp_keeps_pending_exits() {
        let mut inside = bubble(380.0, 290.0, 0.0, 0.0);
        inside.reclamp(500.0, 200.0, 100.0);
        assert_eq!(inside.position, Vec2::new(195.0, 95.0));

        let mut leaving = bubble(50.0, 501.0, 0.0, 0.0);
        leaving.reclamp(500.0, 200.0, 100.0);
        assert_eq!(leaving.position.y, 501.0);
    }
}
