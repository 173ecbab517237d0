use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::info;

use crate::domain::config::SimConfig;
use crate::spatial::enclosure::Enclosure;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SimulationCore};

pub(super) fn create_simulation_core(config: SimConfig) -> SimulationCore {
    SimulationCore {
        enclosure: Enclosure::cube(config.enclosure_size),
        bodies: Vec::new(),
        mode: config.mode,
        next_id: 1,
        frame: 0,
        rng: Pcg32::seed_from_u64(config.seed),
        render: RenderBuffers {
            transforms: Vec::new(),
            ids: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}

/// Swap in a new config. The enclosure and radius may change, so the old
/// bodies cannot carry over.
pub(super) fn apply_config(sim: &mut SimulationCore, config: SimConfig) {
    info!(
        radius = config.radius,
        enclosure_size = config.enclosure_size,
        seed = config.seed,
        "loaded simulation config"
    );
    sim.enclosure = Enclosure::cube(config.enclosure_size);
    sim.mode = config.mode;
    sim.rng = Pcg32::seed_from_u64(config.seed);
    sim.config = config;
    sim.clear();
}
