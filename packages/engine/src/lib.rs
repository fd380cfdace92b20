//! Crossfall Engine - interactive canvas scenes with cross-scene migration
//!
//! Bubbles and triangles bounce in kinematic scenes, cubes fall in a small
//! rigid-body world, and anything leaving a scene through its top or bottom
//! edge reappears in the neighbouring scene.
//!
//! Architecture:
//! - core/        - vectors, RNG, frame clock, console logging
//! - domain/      - bodies, orientation, styles, stage config
//! - systems/     - rigid-body world and its fixed-step runner
//! - scenes/      - the `Scene` trait and its two implementations
//! - migration/   - rules, cooldown state, per-frame coordinator
//! - render/      - drawing surfaces (canvas and recording)
//! - simulation/  - the stage and its wasm-bindgen facade

pub mod core;
pub mod domain;
pub mod migration;
pub mod render;
pub mod scenes;
pub mod simulation;
pub mod systems;

// Compatibility re-exports (keeps short internal paths working)
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    if crate::core::logging::install(tracing::Level::INFO) {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Crossfall engine initialized");
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::{ConfigError, StageConfig};
pub use migration::{MigrationReport, MigrationRule, MigrationState};
pub use render::{RecordingSurface, Surface};
pub use scenes::{Bounds, ObjectId, PortalState, Scene, SceneId, SceneKind, SceneParam};
pub use simulation::{FrameStats, StageCore, WebStage};
