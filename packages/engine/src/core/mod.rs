//! Core building blocks shared by every scene: vectors, RNG, frame clock
//! and diagnostics routing.

pub mod clock;
pub mod logging;
pub mod random;
pub mod vec2;

pub use clock::FrameClock;
pub use random::Rng;
pub use vec2::{clamp_span, Vec2};
