//! Physics collaborator for the cube scene.
//!
//! Scenes only see the [`PhysicsWorld`] capability trait; [`RigidBodyWorld`]
//! is the in-crate implementation and [`Runner`] drives it at a fixed rate.

pub mod physics_world;
pub mod rigid_body;
pub mod rigid_body_system;
pub mod runner;

pub use physics_world::{BodyHandle, BodyKind, BoxShape, PhysicsWorld};
pub use rigid_body_system::RigidBodyWorld;
pub use runner::{Runner, STEPS_PER_SECOND, STEP_MS};
