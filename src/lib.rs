//! Bouncebox Engine - rigid polyhedra bouncing in a box, in WASM
//!
//! The page owns meshes, camera and controls; this crate owns body state
//! and the collision pipeline and hands transforms back every frame.
//!
//! Architecture:
//! - domain/      - Config, modes, shape catalogue, errors
//! - spatial/     - Enclosure and BVH
//! - systems/     - Rigid bodies and collision detection/response
//! - simulation/  - Orchestration and the JS-facing `World`
//! - logging      - `tracing` subscriber writing to the browser console

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod logging;

// Short paths used across the crate
pub use systems::collision;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logging();
    web_sys::console::log_1(&"Bouncebox WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::error::{SimError, SimResult};
pub use domain::modes::{BroadPhaseKind, CollisionMode, NarrowPhaseKind, PairPolicy};
pub use domain::shapes::PolyhedronKind;
pub use simulation::{PerfStats, SimulationCore, World};
