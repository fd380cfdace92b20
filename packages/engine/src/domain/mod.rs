//! Domain types: bodies, device orientation, styles and stage configuration.

pub mod body;
pub mod config;
pub mod orientation;
pub mod style;

pub use body::{Body, Shape, VelocitySpread};
pub use config::{ConfigError, CubeParams, KinematicParams, SceneKind, SceneSpec, StageConfig};
pub use orientation::{tilt_of, Orientation};
pub use style::{Color, ObjectStyle};
