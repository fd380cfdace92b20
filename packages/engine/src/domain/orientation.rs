use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Strength reduction applied by kinematic scenes on top of `g_strength`
pub const GRAVITY_REDUCTION: f32 = 0.5;

/// Device orientation angles in degrees, as reported by `deviceorientation`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Orientation {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Left/right tilt from `gamma`, front/back tilt from `beta`, each in [-1, 1]
    pub fn tilt(&self) -> Vec2 {
        Vec2::new(unit_tilt(self.gamma), unit_tilt(self.beta))
    }
}

/// Tilt for possibly-missing orientation data; no data means no tilt.
pub fn tilt_of(orientation: Option<Orientation>) -> Vec2 {
    orientation.map(|o| o.tilt()).unwrap_or_default()
}

#[inline]
fn unit_tilt(degrees: f32) -> f32 {
    if degrees.is_finite() {
        (degrees / 90.0).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_divides_by_ninety_and_clamps() {
        let o = Orientation::new(10.0, 45.0, -180.0);
        assert_eq!(o.tilt(), Vec2::new(-1.0, 0.5));
    }

    #[test]
    fn missing_orientation_is_level() {
        assert_eq!(tilt_of(None), Vec2::zero());
        assert_eq!(tilt_of(Some(Orientation::new(0.0, f32::NAN, 9.0))), Vec2::new(0.1, 0.0));
    }
}
