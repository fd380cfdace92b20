use tracing::info;
use wasm_bindgen::prelude::*;

use crate::domain::config::StageConfig;
use crate::domain::orientation::Orientation;
use crate::render::{CanvasSurface, SurfaceError};
use crate::scenes::{Bounds, SceneId, SceneParam};

use super::perf_stats::FrameStats;
use super::StageCore;

/// JS handle to a running stage; one canvas per scene.
#[wasm_bindgen(js_name = Stage)]
pub struct WebStage {
    core: StageCore,
    surfaces: Vec<CanvasSurface>,
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl WebStage {
    fn build(config: StageConfig) -> Result<Self, JsValue> {
        config.validate().map_err(to_js)?;

        let surfaces = config
            .scenes
            .iter()
            .map(|spec| CanvasSurface::from_id(&spec.canvas))
            .collect::<Result<Vec<_>, SurfaceError>>()
            .map_err(to_js)?;
        let sizes: Vec<Bounds> = surfaces
            .iter()
            .map(|s| {
                let (w, h) = s.fit_to_client();
                Bounds::new(w, h)
            })
            .collect();

        let core = StageCore::new(&config, &sizes).map_err(to_js)?;
        info!(canvases = ?core.canvas_ids(), "stage attached");
        Ok(Self { core, surfaces })
    }

    fn set(&mut self, scene: usize, param: SceneParam) -> bool {
        self.core.apply_param(SceneId(scene), param)
    }
}

#[wasm_bindgen(js_class = Stage)]
impl WebStage {
    /// Default three-scene loop. `canvas_ids` is a comma-separated list that
    /// replaces the default canvas ids in order; empty keeps them all.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_ids: &str) -> Result<WebStage, JsValue> {
        let mut config = StageConfig::default();
        let ids = canvas_ids.split(',').map(str::trim).filter(|id| !id.is_empty());
        for (spec, id) in config.scenes.iter_mut().zip(ids) {
            spec.canvas = id.to_string();
        }
        Self::build(config)
    }

    /// Stage described by a JSON config
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WebStage, JsValue> {
        let config = StageConfig::from_json(json).map_err(to_js)?;
        Self::build(config)
    }

    /// Run one frame; `elapsed_ms` is the host's monotonic time
    /// (`requestAnimationFrame` timestamp).
    pub fn frame(&mut self, elapsed_ms: f64) -> u32 {
        self.core.frame(elapsed_ms, &mut self.surfaces).migrated.len() as u32
    }

    /// Re-read every canvas's layout size
    pub fn resize(&mut self) {
        for (i, surface) in self.surfaces.iter().enumerate() {
            let (w, h) = surface.fit_to_client();
            self.core.resize(SceneId(i), Bounds::new(w, h));
        }
    }

    #[wasm_bindgen(js_name = setOrientation)]
    pub fn set_orientation(&mut self, alpha: f32, beta: f32, gamma: f32) {
        self.core.set_orientation(Some(Orientation::new(alpha, beta, gamma)));
    }

    #[wasm_bindgen(js_name = clearOrientation)]
    pub fn clear_orientation(&mut self) {
        self.core.set_orientation(None);
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, scene: usize, speed: f32) -> bool {
        self.set(scene, SceneParam::Speed(speed))
    }

    #[wasm_bindgen(js_name = setThreshold)]
    pub fn set_threshold(&mut self, scene: usize, threshold: f32) -> bool {
        self.set(scene, SceneParam::Threshold(threshold))
    }

    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, scene: usize, size: f32) -> bool {
        self.set(scene, SceneParam::Size(size))
    }

    #[wasm_bindgen(js_name = setCount)]
    pub fn set_count(&mut self, scene: usize, count: u32) -> bool {
        self.set(scene, SceneParam::Count(count))
    }

    #[wasm_bindgen(js_name = setGravityStrength)]
    pub fn set_gravity_strength(&mut self, scene: usize, g_strength: f32) -> bool {
        self.set(scene, SceneParam::GravityStrength(g_strength))
    }

    #[wasm_bindgen(js_name = setGravityScale)]
    pub fn set_gravity_scale(&mut self, scene: usize, g_scale: f32) -> bool {
        self.set(scene, SceneParam::GravityScale(g_scale))
    }

    #[wasm_bindgen(js_name = objectCount)]
    pub fn object_count(&self, scene: usize) -> u32 {
        self.core.object_count(SceneId(scene)) as u32
    }

    #[wasm_bindgen(js_name = sceneCount)]
    pub fn scene_count(&self) -> u32 {
        self.core.scene_count() as u32
    }

    /// Last frame snapshot
    pub fn stats(&self) -> FrameStats {
        self.core.stats()
    }
}
