use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::domain::config::{SimConfig, SpeedRange};
use crate::domain::error::SimError;
use crate::domain::modes::{BroadPhaseKind, CollisionMode, NarrowPhaseKind, PairPolicy};
use crate::domain::shapes::PolyhedronKind;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(e: SimError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with the default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let config = SimConfig::from_json(&json).map_err(to_js)?;
        let core = SimulationCore::with_config(config).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Replace the config; removes every body
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f32 { self.core.config().radius }

    #[wasm_bindgen(getter)]
    pub fn enclosure_size(&self) -> f32 { self.core.enclosure().size() }

    #[wasm_bindgen(getter)]
    pub fn broad_phase(&self) -> BroadPhaseKind { self.core.mode().broad_phase }

    #[wasm_bindgen(getter)]
    pub fn narrow_phase(&self) -> NarrowPhaseKind { self.core.mode().narrow_phase }

    pub fn kinetic_energy(&self) -> f32 {
        self.core.kinetic_energy()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Broad-phase toggle. Choosing BVH switches the narrow phase to spheres.
    pub fn set_broad_phase(&mut self, kind: BroadPhaseKind) {
        self.core.select_broad_phase(kind);
    }

    /// Narrow-phase toggle. Choosing AABB switches the broad phase to brute force.
    pub fn set_narrow_phase(&mut self, kind: NarrowPhaseKind) {
        self.core.select_narrow_phase(kind);
    }

    pub fn set_pair_policy(&mut self, policy: PairPolicy) {
        self.core.set_pair_policy(policy);
    }

    // === BODY API ===

    /// Spawn a polyhedron of the configured radius at (x, y, z)
    /// Returns the body ID
    pub fn spawn(&mut self, kind: PolyhedronKind, x: f32, y: f32, z: f32) -> Result<u32, JsValue> {
        self.core.spawn(kind, Vec3::new(x, y, z)).map_err(to_js)
    }

    pub fn randomize_velocities(
        &mut self,
        min_speed: f32,
        max_speed: f32,
        min_angular_speed: f32,
        max_angular_speed: f32,
    ) -> Result<(), JsValue> {
        self.core
            .randomize_velocities(
                SpeedRange { min: min_speed, max: max_speed },
                SpeedRange { min: min_angular_speed, max: max_angular_speed },
            )
            .map_err(to_js)
    }

    /// Remove a body by ID
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    /// Clear all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === STEPPING ===

    /// Step by the configured fixed dt
    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.step(dt).map_err(to_js)
    }

    pub fn step_with_mode(
        &mut self,
        dt: f32,
        broad_phase: BroadPhaseKind,
        narrow_phase: NarrowPhaseKind,
    ) -> Result<(), JsValue> {
        let mode = CollisionMode { broad_phase, narrow_phase };
        self.core.step_with_mode(dt, mode).map_err(to_js)
    }

    // === RENDER TRANSFER ===

    /// Pack transforms for rendering. Returns the body count.
    /// Read `transforms_len()` floats from `transforms_ptr()` and
    /// `body_count` IDs from `ids_ptr()` before the next call.
    pub fn extract_transforms(&mut self) -> usize {
        self.core.extract_transforms()
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    pub fn ids_ptr(&self) -> *const u32 {
        self.core.ids_ptr()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
