//! Stage - orchestrates the scenes, the migration rules and the frame clock
//!
//! The stage owns every scene outright. One `frame` call:
//! - turns host elapsed time into a delta,
//! - ticks each scene (advance, then draw into its surface),
//! - runs the migration rules once at the frame's timestamp.
//!
//! Construction lives in init/, per-frame work in step/, runtime tuning in
//! commands/ and the wasm-bindgen surface in facade.rs.

use crate::core::FrameClock;
use crate::domain::config::{ConfigError, StageConfig};
use crate::domain::orientation::Orientation;
use crate::migration::{MigrationReport, MigrationRule, MigrationState};
use crate::render::Surface;
use crate::scenes::{Bounds, Scene, SceneId, SceneParam};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use facade::WebStage;
pub use perf_stats::FrameStats;

use perf_timer::timed;

/// The simulation stage
pub struct StageCore {
    scenes: Vec<Box<dyn Scene>>,
    /// Canvas id per scene, same order as `scenes`
    canvases: Vec<String>,
    rules: Vec<MigrationRule>,
    migration: MigrationState,
    cooldown_ms: f64,
    clock: FrameClock,
    orientation: Option<Orientation>,

    // Diagnostics
    stats: FrameStats,
    last_report: MigrationReport,
}

impl StageCore {
    /// Build from a validated config; `sizes[i]` is the initial size of
    /// scene `i` (missing entries start at zero size).
    pub fn new(config: &StageConfig, sizes: &[Bounds]) -> Result<Self, ConfigError> {
        init::create_stage_core(config, sizes)
    }

    /// The three-scene loop with default parameters
    pub fn with_defaults(sizes: &[Bounds]) -> Self {
        init::create_default_stage_core(sizes)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn scene(&self, id: SceneId) -> Option<&dyn Scene> {
        self.scenes.get(id.0).map(|s| s.as_ref())
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Option<&mut (dyn Scene + 'static)> {
        self.scenes.get_mut(id.0).map(|s| s.as_mut())
    }

    pub fn canvas_ids(&self) -> &[String] {
        &self.canvases
    }

    pub fn rules(&self) -> &[MigrationRule] {
        &self.rules
    }

    pub fn migration_state(&self) -> &MigrationState {
        &self.migration
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    /// Objects in one scene; 0 for an unknown scene
    pub fn object_count(&self, id: SceneId) -> usize {
        self.scene(id).map_or(0, |s| s.len())
    }

    pub fn total_objects(&self) -> usize {
        self.scenes.iter().map(|s| s.len()).sum()
    }

    /// Diagnostics for the last frame
    pub fn stats(&self) -> FrameStats {
        self.stats.clone()
    }

    /// Migrations performed by the last frame
    pub fn last_report(&self) -> &MigrationReport {
        &self.last_report
    }

    /// Run one frame, drawing scene `i` into `surfaces[i]`.
    ///
    /// Scenes without a surface are advanced but not drawn.
    pub fn frame<S: Surface>(&mut self, elapsed_ms: f64, surfaces: &mut [S]) -> &MigrationReport {
        let mut targets: Vec<&mut dyn Surface> = surfaces.iter_mut().map(|s| s as &mut dyn Surface).collect();
        step::frame(self, elapsed_ms, &mut targets);
        &self.last_report
    }

    /// Run one frame without drawing
    pub fn advance(&mut self, elapsed_ms: f64) -> &MigrationReport {
        step::frame(self, elapsed_ms, &mut []);
        &self.last_report
    }

    pub fn resize(&mut self, id: SceneId, bounds: Bounds) {
        commands::resize(self, id, bounds);
    }

    /// Feed device orientation to every scene; `None` when unavailable
    pub fn set_orientation(&mut self, orientation: Option<Orientation>) {
        commands::set_orientation(self, orientation);
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Apply a tuning command to one scene. Returns false if the scene does
    /// not exist or has no such parameter.
    pub fn apply_param(&mut self, id: SceneId, param: SceneParam) -> bool {
        commands::apply_param(self, id, param)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
