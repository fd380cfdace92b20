//! RigidBody - An axis-aligned box that moves as a unit
//!
//! No rotation: cubes stay upright, which is all the cube scene draws.

mod body;

pub use body::RigidBody;
