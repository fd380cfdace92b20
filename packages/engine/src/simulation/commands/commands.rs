use tracing::{debug, warn};

use crate::domain::orientation::Orientation;
use crate::scenes::{Bounds, SceneId, SceneParam};

use super::StageCore;

pub(super) fn resize(stage: &mut StageCore, id: SceneId, bounds: Bounds) {
    let Some(scene) = stage.scenes.get_mut(id.0) else {
        warn!(scene = id.0, "resize: no such scene");
        return;
    };
    scene.resize(bounds);
    debug!(scene = id.0, width = bounds.width, height = bounds.height, "scene resized");
}

pub(super) fn set_orientation(stage: &mut StageCore, orientation: Option<Orientation>) {
    stage.orientation = orientation;
    for scene in &mut stage.scenes {
        scene.set_orientation(orientation);
    }
}

pub(super) fn apply_param(stage: &mut StageCore, id: SceneId, param: SceneParam) -> bool {
    let Some(scene) = stage.scenes.get_mut(id.0) else {
        warn!(scene = id.0, ?param, "apply_param: no such scene");
        return false;
    };
    let applied = scene.apply_param(param);
    if applied {
        debug!(scene = id.0, ?param, "scene parameter updated");
    } else {
        warn!(scene = id.0, kind = ?scene.kind(), ?param, "parameter not supported by scene");
    }
    applied
}
