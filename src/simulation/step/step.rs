use tracing::{debug, warn};

use crate::domain::error::{SimError, SimResult};
use crate::domain::modes::{BroadPhaseKind, CollisionMode, NarrowPhaseKind};
use crate::spatial::bvh::Bvh;
use crate::systems::collision::brute_force::{detect_boxes, detect_spheres};
use crate::systems::collision::{CollisionCounters, Resolver};

use super::{PerfTimer, SimulationCore};

pub(super) fn check_step_args(dt: f32, mode: CollisionMode) -> SimResult<()> {
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(SimError::InvalidConfig(format!("step dt must be finite and non-negative, got {dt}")));
    }
    if !mode.is_runnable() {
        return Err(SimError::InvalidConfig("bvh broad phase requires the sphere narrow phase".into()));
    }
    Ok(())
}

/// Collisions first, then integration. Responses therefore act on the
/// positions the previous step produced.
pub(super) fn step(sim: &mut SimulationCore, dt: f32, mode: CollisionMode) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.body_count = sim.bodies.len() as u32;
    }
    let step_timer = PerfTimer::start_if(perf_on);

    let counters = detect_collisions(sim, mode, perf_on);

    // === INTEGRATION ===
    let non_finite = PerfTimer::accumulate(perf_on, &mut sim.perf_stats.integrate_ms, || {
        let mut non_finite = 0u32;
        for body in sim.bodies.iter_mut() {
            body.integrate(dt);
            if !body.is_finite() {
                non_finite += 1;
            }
        }
        non_finite
    });

    if non_finite > 0 {
        warn!(frame = sim.frame, non_finite, "bodies left with non-finite state");
    }

    debug!(
        frame = sim.frame,
        ?mode,
        pair_tests = counters.pair_tests,
        pair_responses = counters.pair_responses,
        wall_responses = counters.wall_responses,
        "step"
    );

    if perf_on {
        sim.perf_stats.record_counters(&counters);
        sim.perf_stats.non_finite_bodies = non_finite;
        sim.perf_stats.kinetic_energy = sim.kinetic_energy();
        sim.perf_stats.step_ms = step_timer.elapsed_ms();
    }

    sim.frame += 1;
}

/// Run exactly one collision path over the bodies, mutating them in place
fn detect_collisions(sim: &mut SimulationCore, mode: CollisionMode, perf_on: bool) -> CollisionCounters {
    let radius = sim.config.radius;
    let mut counters = CollisionCounters::default();

    match (mode.broad_phase, mode.narrow_phase) {
        (BroadPhaseKind::Bvh, _) => {
            let tree = PerfTimer::accumulate(perf_on, &mut sim.perf_stats.build_ms, || {
                Bvh::build(&sim.bodies, radius)
            });
            let Some(tree) = tree else {
                return counters;
            };
            if perf_on {
                sim.perf_stats.bvh_nodes = tree.node_count() as u32;
                sim.perf_stats.bvh_depth = tree.depth() as u32;
            }

            let mut resolver = Resolver::new(&sim.enclosure, radius);
            PerfTimer::accumulate(perf_on, &mut sim.perf_stats.detect_ms, || {
                tree.detect(&mut sim.bodies, &mut resolver, &mut counters)
            });
            counters += resolver.into_counters();
        }
        (BroadPhaseKind::BruteForce, NarrowPhaseKind::Sphere) => {
            let policy = sim.config.pair_policy;
            let mut resolver = Resolver::new(&sim.enclosure, radius);
            PerfTimer::accumulate(perf_on, &mut sim.perf_stats.detect_ms, || {
                detect_spheres(&mut sim.bodies, &mut resolver, policy, &mut counters)
            });
            counters += resolver.into_counters();
        }
        (BroadPhaseKind::BruteForce, NarrowPhaseKind::Aabb) => {
            let enclosure = sim.enclosure;
            PerfTimer::accumulate(perf_on, &mut sim.perf_stats.detect_ms, || {
                detect_boxes(&mut sim.bodies, &enclosure, radius, &mut counters)
            });
        }
    }

    counters
}
