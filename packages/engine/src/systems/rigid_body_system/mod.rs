//! RigidBodyWorld - Minimal rigid boxes for the cube scene
//!
//! This is intentionally simple (no SAT / no impulse solver).
//! Goals:
//! - Stable, deterministic stacking of upright boxes on static walls.
//! - No tunneling regardless of speed.
//!
//! Current behavior:
//! - Gravity and air drag integrate velocity once per step.
//! - Motion is resolved per axis (x then y) by sweeping the box against every
//!   other body and stopping at first contact.
//! - Contacts reflect the blocked velocity component scaled by restitution.

mod collision;
mod system;

pub use system::{RigidBodyWorld, GRAVITY, MAX_SPEED};
