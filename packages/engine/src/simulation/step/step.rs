use tracing::{debug, trace};

use crate::migration;
use crate::render::Surface;

use super::timed;
use super::StageCore;

/// One host frame: tick every scene, then migrate at the frame's timestamp.
pub(super) fn frame(stage: &mut StageCore, elapsed_ms: f64, surfaces: &mut [&mut dyn Surface]) {
    let (_, frame_ms) = timed(|| run(stage, elapsed_ms, surfaces));
    stage.stats.frame_ms = frame_ms;
}

fn run(stage: &mut StageCore, elapsed_ms: f64, surfaces: &mut [&mut dyn Surface]) {
    let dt_ms = stage.clock.advance(elapsed_ms);
    let now_ms = stage.clock.elapsed_ms();

    for (i, scene) in stage.scenes.iter_mut().enumerate() {
        match surfaces.get_mut(i) {
            Some(surface) => scene.tick(dt_ms, &mut **surface),
            None => scene.step(dt_ms),
        }
    }

    let report = migration::run(
        &mut stage.scenes,
        &stage.rules,
        &mut stage.migration,
        now_ms,
        stage.cooldown_ms,
    );
    if !report.is_empty() {
        debug!(count = report.migrated.len(), now_ms, "migrations this frame");
    }
    trace!(frame = stage.clock.frames(), dt_ms, "frame done");

    let stats = &mut stage.stats;
    stats.frame = stage.clock.frames();
    stats.delta_ms = dt_ms;
    stats.objects = stage.scenes.iter().map(|s| s.len()).sum::<usize>() as u32;
    stats.migrated = report.migrated.len() as u32;
    stats.migrated_total += report.migrated.len() as u64;
    stats.rules_cooling = report.cooling.len() as u32;

    stage.last_report = report;
}
