use tracing::debug;

use crate::domain::modes::{BroadPhaseKind, CollisionMode, ModeAxis, NarrowPhaseKind, PairPolicy};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn select_broad_phase(sim: &mut SimulationCore, kind: BroadPhaseKind) -> CollisionMode {
    let wanted = CollisionMode { broad_phase: kind, ..sim.mode };
    set_mode(sim, wanted.normalized(ModeAxis::Broad))
}

pub(super) fn select_narrow_phase(sim: &mut SimulationCore, kind: NarrowPhaseKind) -> CollisionMode {
    let wanted = CollisionMode { narrow_phase: kind, ..sim.mode };
    set_mode(sim, wanted.normalized(ModeAxis::Narrow))
}

pub(super) fn set_pair_policy(sim: &mut SimulationCore, policy: PairPolicy) {
    sim.config.pair_policy = policy;
}

fn set_mode(sim: &mut SimulationCore, mode: CollisionMode) -> CollisionMode {
    if mode != sim.mode {
        debug!(?mode, "collision mode changed");
    }
    sim.mode = mode;
    sim.config.mode = mode;
    mode
}
