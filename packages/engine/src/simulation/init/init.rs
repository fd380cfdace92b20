use tracing::info;

use crate::core::{FrameClock, Rng};
use crate::domain::config::{ConfigError, SceneKind, SceneSpec, StageConfig};
use crate::migration::{MigrationReport, MigrationState};
use crate::scenes::{Bounds, CubeScene, KinematicScene, Scene};

use super::perf_stats::FrameStats;
use super::StageCore;

pub(super) fn create_stage_core(config: &StageConfig, sizes: &[Bounds]) -> Result<StageCore, ConfigError> {
    config.validate()?;
    Ok(assemble(config, sizes))
}

pub(super) fn create_default_stage_core(sizes: &[Bounds]) -> StageCore {
    assemble(&StageConfig::default(), sizes)
}

fn assemble(config: &StageConfig, sizes: &[Bounds]) -> StageCore {
    // One stream per scene, drawn in declaration order.
    let mut seeds = Rng::new(config.seed);
    let scenes: Vec<Box<dyn Scene>> = config
        .scenes
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let bounds = sizes.get(i).copied().unwrap_or_default();
            build_scene(spec, bounds, seeds.next_u32())
        })
        .collect();

    info!(
        scenes = scenes.len(),
        rules = config.rules.len(),
        cooldown_ms = config.cooldown_ms,
        "stage created"
    );

    StageCore {
        scenes,
        canvases: config.scenes.iter().map(|s| s.canvas.clone()).collect(),
        rules: config.migration_rules(),
        migration: MigrationState::new(),
        cooldown_ms: config.cooldown_ms,
        clock: FrameClock::new(),
        orientation: None,
        stats: FrameStats::default(),
        last_report: MigrationReport::default(),
    }
}

fn build_scene(spec: &SceneSpec, bounds: Bounds, seed: u32) -> Box<dyn Scene> {
    match spec.kind {
        SceneKind::Bubbles | SceneKind::Triangles => {
            Box::new(KinematicScene::new(spec.kind, spec.kinematic_params(), bounds, seed))
        }
        SceneKind::Cubes => Box::new(CubeScene::new(spec.cube_params(), bounds, seed)),
    }
}
