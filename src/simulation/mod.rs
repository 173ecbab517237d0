//! Simulation - bodies bouncing in the enclosure
//!
//! `SimulationCore` only orchestrates: collision search lives in
//! `systems::collision` and `spatial::bvh`, body state in
//! `systems::rigid_body`. Each operation is delegated to a submodule below,
//! and `World` wraps the core for JS.
//!
//! One step: (optional BVH build) -> collision pass -> integrate every body.

use rand_pcg::Pcg32;

use crate::domain::config::{SimConfig, SpeedRange};
use crate::domain::error::SimResult;
use crate::domain::modes::{BroadPhaseKind, CollisionMode, NarrowPhaseKind, PairPolicy};
use crate::domain::shapes::PolyhedronKind;
use crate::rigid_body::RigidBody;
use crate::spatial::enclosure::Enclosure;

use glam::Vec3;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Floats written per body by `extract_transforms`: position xyz, rotation xyz
pub const TRANSFORM_STRIDE: usize = 6;

/// Buffers shared with JS by pointer
struct RenderBuffers {
    transforms: Vec<f32>,
    ids: Vec<u32>,
}

/// The simulation state
pub struct SimulationCore {
    config: SimConfig,
    enclosure: Enclosure,
    bodies: Vec<RigidBody>,

    // Settings
    mode: CollisionMode,

    // State
    next_id: u32,
    frame: u64,
    rng: Pcg32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an empty simulation with the default config
    pub fn new() -> Self {
        init::create_simulation_core(SimConfig::default())
    }

    /// Create an empty simulation from a validated config
    pub fn with_config(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(init::create_simulation_core(config))
    }

    /// Replace the config from JSON. Removes every body and reseeds the RNG.
    pub fn load_config_json(&mut self, json: &str) -> SimResult<()> {
        let config = SimConfig::from_json(json)?;
        init::apply_config(self, config);
        Ok(())
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn enclosure(&self) -> &Enclosure { &self.enclosure }

    pub fn bodies(&self) -> &[RigidBody] { &self.bodies }

    pub fn body(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn mode(&self) -> CollisionMode { self.mode }

    /// Sum of 1/2 |v|^2 over all bodies
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Pick the broad phase; `Bvh` drags the narrow phase back to spheres
    pub fn select_broad_phase(&mut self, kind: BroadPhaseKind) -> CollisionMode {
        settings::select_broad_phase(self, kind)
    }

    /// Pick the narrow phase; `Aabb` drags the broad phase back to brute force
    pub fn select_narrow_phase(&mut self, kind: NarrowPhaseKind) -> CollisionMode {
        settings::select_narrow_phase(self, kind)
    }

    pub fn set_pair_policy(&mut self, policy: PairPolicy) {
        settings::set_pair_policy(self, policy);
    }

    // === BODY API ===

    /// Add a prepared body. Returns its new ID.
    pub fn insert_body(&mut self, body: RigidBody) -> SimResult<u32> {
        commands::insert_body(self, body)
    }

    /// Create a body of the configured radius with a random velocity
    pub fn spawn(&mut self, kind: PolyhedronKind, position: Vec3) -> SimResult<u32> {
        commands::spawn(self, kind, position)
    }

    /// Give every body a fresh random linear and angular velocity
    pub fn randomize_velocities(&mut self, speed: SpeedRange, angular_speed: SpeedRange) -> SimResult<()> {
        commands::randomize_velocities(self, speed, angular_speed)
    }

    /// Remove a body by ID. Returns whether it existed.
    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === STEPPING ===

    /// Advance by the configured fixed `dt` with the current mode
    pub fn tick(&mut self) {
        let (dt, mode) = (self.config.dt, self.mode);
        step::step(self, dt, mode);
    }

    /// Advance by `dt` with the current mode
    pub fn step(&mut self, dt: f32) -> SimResult<()> {
        self.step_with_mode(dt, self.mode)
    }

    /// Advance by `dt` with an explicit algorithm choice
    pub fn step_with_mode(&mut self, dt: f32, mode: CollisionMode) -> SimResult<()> {
        step::check_step_args(dt, mode)?;
        step::step(self, dt, mode);
        Ok(())
    }

    // === RENDER TRANSFER ===

    /// Pack current transforms into the transfer buffer. Returns body count.
    pub fn extract_transforms(&mut self) -> usize {
        render_extract::extract_transforms(self)
    }

    pub fn transforms(&self) -> &[f32] { &self.render.transforms }

    /// Get pointer to transform buffer (for JS instanced meshes)
    pub fn transforms_ptr(&self) -> *const f32 { self.render.transforms.as_ptr() }

    pub fn transforms_len(&self) -> usize { self.render.transforms.len() }

    /// IDs in the same order as the transform records
    pub fn ids(&self) -> &[u32] { &self.render.ids }

    pub fn ids_ptr(&self) -> *const u32 { self.render.ids.as_ptr() }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
