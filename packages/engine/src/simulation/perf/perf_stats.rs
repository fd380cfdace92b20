use wasm_bindgen::prelude::*;

/// Snapshot of the last frame, exposed to JS for the debug overlay
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) delta_ms: f64,
    /// Time spent inside `frame`; profiling only, never fed back
    pub(super) frame_ms: f64,
    pub(super) objects: u32,
    pub(super) migrated: u32,
    pub(super) migrated_total: u64,
    pub(super) rules_cooling: u32,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.frame
    }
    #[wasm_bindgen(getter, js_name = deltaMs)]
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }
    #[wasm_bindgen(getter, js_name = frameMs)]
    pub fn frame_ms(&self) -> f64 {
        self.frame_ms
    }
    #[wasm_bindgen(getter)]
    pub fn objects(&self) -> u32 {
        self.objects
    }
    #[wasm_bindgen(getter)]
    pub fn migrated(&self) -> u32 {
        self.migrated
    }
    #[wasm_bindgen(getter, js_name = migratedTotal)]
    pub fn migrated_total(&self) -> u64 {
        self.migrated_total
    }
    #[wasm_bindgen(getter, js_name = rulesCooling)]
    pub fn rules_cooling(&self) -> u32 {
        self.rules_cooling
    }
}
