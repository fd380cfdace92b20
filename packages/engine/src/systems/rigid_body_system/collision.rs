use crate::rigid_body::RigidBody;

/// Contact tolerance in world units
pub(super) const EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Axis {
    X,
    Y,
}

/// How far `body` may travel along `axis` toward `delta` before touching
/// another body, and whether anything was touched.
///
/// Only bodies sharing the perpendicular span can block. Bodies `body` already
/// overlaps are skipped so interpenetrating pairs can drift apart.
pub(super) fn sweep_axis(
    bodies: &[RigidBody],
    index: usize,
    body: &RigidBody,
    axis: Axis,
    delta: f32,
) -> (f32, bool) {
    if delta == 0.0 {
        return (0.0, false);
    }

    let (min, max) = body.bounds();
    let mut allowed = delta.abs();
    let mut hit = false;

    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        let (omin, omax) = other.bounds();

        let (lo, hi, other_lo, other_hi, span_lo, span_hi, other_span_lo, other_span_hi) = match axis {
            Axis::X => (min.x, max.x, omin.x, omax.x, min.y, max.y, omin.y, omax.y),
            Axis::Y => (min.y, max.y, omin.y, omax.y, min.x, max.x, omin.x, omax.x),
        };

        if span_hi <= other_span_lo + EPSILON || span_lo >= other_span_hi - EPSILON {
            continue;
        }

        let gap = if delta > 0.0 { other_lo - hi } else { lo - other_hi };
        if gap < -EPSILON {
            continue;
        }

        let gap = gap.max(0.0);
        if gap < allowed {
            allowed = gap;
            hit = true;
        }
    }

    if delta > 0.0 {
        (allowed, hit)
    } else {
        (-allowed, hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::systems::physics_world::{BodyKind, BoxShape};

    fn boxed(x: f32, y: f32, w: f32, h: f32, id: u32) -> RigidBody {
        RigidBody::new_box(Vec2::new(x, y), BoxShape::new(w, h), BodyKind::Dynamic, id)
    }

    #[test]
    fn stops_at_first_contact() {
        let bodies = [boxed(0.0, 20.0, 10.0, 10.0, 1), boxed(0.0, 0.0, 100.0, 4.0, 2)];
        // Bottom at 15, floor top at 2: 13 units of room.
        let (moved, hit) = sweep_axis(&bodies, 0, &bodies[0], Axis::Y, -30.0);
        assert!(hit);
        assert!((moved + 13.0).abs() < 1e-4);
    }

    #[test]
    fn unobstructed_move_is_full_length() {
        let bodies = [boxed(0.0, 20.0, 10.0, 10.0, 1), boxed(0.0, 0.0, 100.0, 4.0, 2)];
        let (moved, hit) = sweep_axis(&bodies, 0, &bodies[0], Axis::X, 25.0);
        assert!(!hit);
        assert_eq!(moved, 25.0);
    }

    #[test]
    fn bodies_outside_the_lane_do_not_block() {
        let bodies = [boxed(0.0, 20.0, 10.0, 10.0, 1), boxed(50.0, 0.0, 10.0, 4.0, 2)];
        let (moved, hit) = sweep_axis(&bodies, 0, &bodies[0], Axis::Y, -30.0);
        assert!(!hit);
        assert_eq!(moved, -30.0);
    }

    #[test]
    fn overlapping_bodies_are_ignored() {
        let bodies = [boxed(0.0, 0.0, 10.0, 10.0, 1), boxed(2.0, 2.0, 10.0, 10.0, 2)];
        let (moved, hit) = sweep_axis(&bodies, 0, &bodies[0], Axis::X, 5.0);
        assert!(!hit);
        assert_eq!(moved, 5.0);
    }
}
