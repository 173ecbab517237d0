use wasm_bindgen::prelude::*;

use crate::systems::collision::CollisionCounters;

/// Snapshot of the last step. Times are milliseconds.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) build_ms: f64,
    pub(super) detect_ms: f64,
    pub(super) integrate_ms: f64,

    pub(super) pair_tests: u32,
    pub(super) node_tests: u32,
    pub(super) pair_responses: u32,
    pub(super) wall_responses: u32,
    pub(super) degenerate_pairs: u32,

    pub(super) bvh_nodes: u32,
    pub(super) bvh_depth: u32,
    pub(super) body_count: u32,
    pub(super) non_finite_bodies: u32,
    pub(super) kinetic_energy: f32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_counters(&mut self, counters: &CollisionCounters) {
        self.pair_tests = counters.pair_tests;
        self.node_tests = counters.node_tests;
        self.pair_responses = counters.pair_responses;
        self.wall_responses = counters.wall_responses;
        self.degenerate_pairs = counters.degenerate_pairs;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn build_ms(&self) -> f64 { self.build_ms }
    #[wasm_bindgen(getter)]
    pub fn detect_ms(&self) -> f64 { self.detect_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 { self.pair_tests }
    #[wasm_bindgen(getter)]
    pub fn node_tests(&self) -> u32 { self.node_tests }
    #[wasm_bindgen(getter)]
    pub fn pair_responses(&self) -> u32 { self.pair_responses }
    #[wasm_bindgen(getter)]
    pub fn wall_responses(&self) -> u32 { self.wall_responses }
    #[wasm_bindgen(getter)]
    pub fn degenerate_pairs(&self) -> u32 { self.degenerate_pairs }
    #[wasm_bindgen(getter)]
    pub fn bvh_nodes(&self) -> u32 { self.bvh_nodes }
    #[wasm_bindgen(getter)]
    pub fn bvh_depth(&self) -> u32 { self.bvh_depth }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn non_finite_bodies(&self) -> u32 { self.non_finite_bodies }
    #[wasm_bindgen(getter)]
    pub fn kinetic_energy(&self) -> f32 { self.kinetic_energy }
}
