use super::*;
use crate::domain::modes::ModeAxis;
use crate::domain::error::SimError;

fn small_config() -> SimConfig {
    SimConfig {
        radius: 1.0,
        enclosure_size: 20.0,
        ..SimConfig::default()
    }
}

fn core() -> SimulationCore {
    SimulationCore::with_config(small_config()).unwrap()
}

fn body_at(position: Vec3, velocity: Vec3) -> RigidBody {
    RigidBody::new(PolyhedronKind::Octahedron, 1.0, position).with_velocity(velocity, Vec3::ZERO)
}

/// Grid of bodies two radii apart plus a little, so nothing starts overlapping
fn populate(sim: &mut SimulationCore, per_axis: i32, spacing: f32) {
    let offset = (per_axis - 1) as f32 * spacing * 0.5;
    for i in 0..per_axis {
        for j in 0..per_axis {
            for k in 0..per_axis {
                let p = Vec3::new(i as f32, j as f32, k as f32) * spacing - Vec3::splat(offset);
                sim.spawn(PolyhedronKind::ALL[(i + j + k) as usize % 5], p).unwrap();
            }
        }
    }
}

#[test]
fn insert_assigns_increasing_ids() {
    let mut sim = core();
    let a = sim.insert_body(body_at(Vec3::ZERO, Vec3::ZERO)).unwrap();
    let b = sim.insert_body(body_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO)).unwrap();
    assert_eq!((a, b), (1, 2));
    assert_eq!(sim.body_count(), 2);
    assert_eq!(sim.body(b).unwrap().position().x, 5.0);
}

#[test]
fn insert_rejects_wrong_radius() {
    let mut sim = core();
    let big = RigidBody::new(PolyhedronKind::Cube, 3.0, Vec3::ZERO);
    assert!(matches!(sim.insert_body(big), Err(SimError::RadiusMismatch { .. })));
    assert_eq!(sim.body_count(), 0);
}

#[test]
fn insert_rejects_non_finite_state() {
    let mut sim = core();
    let body = body_at(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0));
    assert!(matches!(sim.insert_body(body), Err(SimError::NonFiniteState { id: 1 })));
}

#[test]
fn insert_accepts_body_outside_enclosure() {
    let mut sim = core();
    assert!(sim.insert_body(body_at(Vec3::new(9.5, 0.0, 0.0), Vec3::ZERO)).is_ok());
}

#[test]
fn free_body_moves_by_velocity_times_dt() {
    let mut sim = core();
    let id = sim
        .insert_body(
            RigidBody::new(PolyhedronKind::Tetrahedron, 1.0, Vec3::ZERO)
                .with_velocity(Vec3::new(2.0, -1.0, 0.5), Vec3::new(1.0, 1.0, 1.0)),
        )
        .unwrap();

    sim.step(0.5).unwrap();

    let body = sim.body(id).unwrap();
    assert_eq!(body.position(), Vec3::new(1.0, -0.5, 0.25));
    assert_eq!(body.orientation(), Vec3::splat(0.5));
    assert_eq!(sim.frame(), 1);
}

#[test]
fn wall_hit_reflects_before_integrating() {
    for mode in [CollisionMode::BVH, CollisionMode::BRUTE_FORCE_SPHERE] {
        let mut sim = core();
        let id = sim.insert_body(body_at(Vec3::new(9.5, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0))).unwrap();

        sim.step_with_mode(0.0, mode).unwrap();

        let body = sim.body(id).unwrap();
        assert!(body.position().x <= 9.0);
        assert_eq!(body.velocity().x, -5.0);
    }
}

#[test]
fn head_on_pair_bounces_in_every_mode() {
    for mode in [CollisionMode::BVH, CollisionMode::BRUTE_FORCE_SPHERE, CollisionMode::BRUTE_FORCE_AABB] {
        let mut sim = core();
        let a = sim.insert_body(body_at(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))).unwrap();
        let b = sim.insert_body(body_at(Vec3::new(1.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0))).unwrap();

        sim.step_with_mode(0.01, mode).unwrap();

        assert!(sim.body(a).unwrap().velocity().x < 0.0, "{mode:?}");
        assert!(sim.body(b).unwrap().velocity().x > 0.0, "{mode:?}");
    }
}

#[test]
fn sphere_modes_push_pairs_apart() {
    for mode in [CollisionMode::BVH, CollisionMode::BRUTE_FORCE_SPHERE] {
        let mut sim = core();
        let a = sim.insert_body(body_at(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0))).unwrap();
        let b = sim.insert_body(body_at(Vec3::new(1.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0))).unwrap();

        sim.step_with_mode(0.0, mode).unwrap();

        let gap = sim.body(a).unwrap().position().distance(sim.body(b).unwrap().position());
        assert!(gap >= 2.0 - 1e-5, "{mode:?}: gap {gap}");
    }
}

#[test]
fn energy_is_conserved_over_many_steps() {
    for mode in [CollisionMode::BVH, CollisionMode::BRUTE_FORCE_SPHERE, CollisionMode::BRUTE_FORCE_AABB] {
        let mut sim = core();
        populate(&mut sim, 3, 3.0);
        let before = sim.kinetic_energy();

        for _ in 0..300 {
            sim.step_with_mode(0.02, mode).unwrap();
        }

        let after = sim.kinetic_energy();
        assert!((after - before).abs() <= before * 1e-3, "{mode:?}: {before} -> {after}");
    }
}

#[test]
fn bodies_stay_near_the_enclosure() {
    let mut sim = core();
    populate(&mut sim, 3, 3.0);
    let max_speed = (2.0 * sim.kinetic_energy()).sqrt();
    let dt = 0.02;
    let slack = 2.0 + max_speed * 1.01 * dt;
    let half = sim.enclosure().size() * 0.5;

    for _ in 0..500 {
        sim.step(dt).unwrap();
        for body in sim.bodies() {
            let c = body.bounding_sphere().center.abs();
            assert!(c.max_element() <= half + slack, "body {} escaped to {c}", body.id());
        }
    }
}

#[test]
fn bvh_mode_rejects_aabb_narrow_phase() {
    let mut sim = core();
    let bad = CollisionMode {
        broad_phase: BroadPhaseKind::Bvh,
        narrow_phase: NarrowPhaseKind::Aabb,
    };
    assert!(sim.step_with_mode(0.02, bad).is_err());
    assert_eq!(sim.frame(), 0);
}

#[test]
fn step_rejects_bad_dt() {
    let mut sim = core();
    assert!(sim.step(f32::NAN).is_err());
    assert!(sim.step(-0.1).is_err());
    assert!(sim.step(0.0).is_ok());
}

#[test]
fn mode_toggles_follow_the_last_choice() {
    let mut sim = core();
    assert_eq!(sim.mode(), CollisionMode::BVH);

    assert_eq!(sim.select_narrow_phase(NarrowPhaseKind::Aabb), CollisionMode::BRUTE_FORCE_AABB);
    assert_eq!(sim.select_broad_phase(BroadPhaseKind::Bvh), CollisionMode::BVH);
    assert_eq!(sim.select_broad_phase(BroadPhaseKind::BruteForce), CollisionMode::BRUTE_FORCE_SPHERE);
    assert_eq!(sim.config().mode, CollisionMode::BRUTE_FORCE_SPHERE);

    let raw = CollisionMode { broad_phase: BroadPhaseKind::Bvh, narrow_phase: NarrowPhaseKind::Aabb };
    assert_eq!(raw.normalized(ModeAxis::Narrow), CollisionMode::BRUTE_FORCE_AABB);
}

#[test]
fn spawn_draws_velocities_within_bounds() {
    let mut sim = core();
    populate(&mut sim, 2, 4.0);
    let speed = sim.config().speed_bounds();
    let spin = sim.config().angular_speed_bounds();

    for body in sim.bodies() {
        let s = body.velocity().length();
        assert!(s >= speed.min - 1e-3 && s <= speed.max + 1e-3, "speed {s}");
        let w = body.angular_velocity();
        assert_eq!(w.x, w.y);
        assert_eq!(w.y, w.z);
        assert!(w.x >= spin.min && w.x <= spin.max);
    }
}

#[test]
fn randomize_velocities_respects_new_bounds() {
    let mut sim = core();
    populate(&mut sim, 2, 4.0);
    let speed = SpeedRange { min: 3.0, max: 3.0 };
    let spin = SpeedRange { min: 0.5, max: 0.75 };

    sim.randomize_velocities(speed, spin).unwrap();

    for body in sim.bodies() {
        assert!((body.velocity().length() - 3.0).abs() < 1e-4);
        assert!((0.5..=0.75).contains(&body.angular_velocity().x));
    }
}

#[test]
fn randomize_velocities_rejects_inverted_bounds() {
    let mut sim = core();
    let err = sim
        .randomize_velocities(SpeedRange { min: 5.0, max: 1.0 }, SpeedRange { min: 0.0, max: 1.0 })
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidVelocityBounds { .. }));
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut sim = core();
        populate(&mut sim, 2, 4.0);
        for _ in 0..50 {
            sim.tick();
        }
        sim.bodies().iter().map(|b| b.position()).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn remove_and_clear() {
    let mut sim = core();
    let a = sim.spawn(PolyhedronKind::Cube, Vec3::ZERO).unwrap();
    let b = sim.spawn(PolyhedronKind::Cube, Vec3::new(5.0, 0.0, 0.0)).unwrap();

    assert!(sim.remove_body(a));
    assert!(!sim.remove_body(a));
    assert_eq!(sim.bodies()[0].id(), b);

    sim.clear();
    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.spawn(PolyhedronKind::Cube, Vec3::ZERO).unwrap(), 1);
}

#[test]
fn extract_transforms_packs_position_then_rotation() {
    let mut sim = core();
    let id = sim
        .insert_body(
            RigidBody::new(PolyhedronKind::Icosahedron, 1.0, Vec3::new(1.0, 2.0, 3.0))
                .with_velocity(Vec3::ZERO, Vec3::new(0.1, 0.2, 0.3)),
        )
        .unwrap();
    sim.step(1.0).unwrap();

    assert_eq!(sim.extract_transforms(), 1);
    assert_eq!(sim.transforms_len(), TRANSFORM_STRIDE);
    let t = sim.transforms();
    assert_eq!(&t[..3], &[1.0, 2.0, 3.0]);
    assert!((t[3] - 0.1).abs() < 1e-6 && (t[4] - 0.2).abs() < 1e-6 && (t[5] - 0.3).abs() < 1e-6);
    assert_eq!(sim.ids(), &[id]);
}

#[test]
fn load_config_json_resets_bodies() {
    let mut sim = core();
    populate(&mut sim, 2, 4.0);
    sim.load_config_json(r#"{ "radius": 2.0, "enclosure_size": 50.0 }"#).unwrap();

    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.enclosure().size(), 50.0);
    let id = sim.spawn(PolyhedronKind::Dodecahedron, Vec3::ZERO).unwrap();
    assert!((sim.body(id).unwrap().bounding_sphere().radius - 2.0).abs() < 1e-4);
}

#[test]
fn load_config_json_keeps_state_on_error() {
    let mut sim = core();
    sim.spawn(PolyhedronKind::Cube, Vec3::ZERO).unwrap();
    assert!(sim.load_config_json(r#"{ "radius": -1.0 }"#).is_err());
    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.config().radius, 1.0);
}

#[test]
fn perf_stats_report_bvh_shape() {
    let mut sim = core();
    populate(&mut sim, 2, 4.0);
    sim.enable_perf_metrics(true);
    sim.tick();

    let stats = sim.get_perf_stats();
    assert_eq!(stats.body_count(), 8);
    assert!(stats.bvh_nodes() >= 7);
    assert!(stats.bvh_depth() >= 3);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.kinetic_energy() > 0.0);
}

#[test]
fn perf_stats_stay_zero_when_disabled() {
    let mut sim = core();
    populate(&mut sim, 2, 4.0);
    sim.tick();
    assert_eq!(sim.get_perf_stats().body_count(), 0);
}

#[test]
fn coincident_centres_are_reported_and_skipped() {
    for broad_phase in [BroadPhaseKind::Bvh, BroadPhaseKind::BruteForce] {
        let mut sim = core();
        sim.enable_perf_metrics(true);
        sim.insert_body(body_at(Vec3::ZERO, Vec3::ZERO)).unwrap();
        sim.insert_body(body_at(Vec3::ZERO, Vec3::ZERO)).unwrap();

        let mode = CollisionMode { broad_phase, narrow_phase: NarrowPhaseKind::Sphere };
        sim.step_with_mode(1.0 / 60.0, mode).unwrap();

        let stats = sim.get_perf_stats();
        assert!(stats.degenerate_pairs() > 0, "{broad_phase:?}");
        assert_eq!(stats.pair_responses(), 0, "{broad_phase:?}");
        assert_eq!(stats.non_finite_bodies(), 0, "{broad_phase:?}");
        assert!(sim.bodies().iter().all(|b| b.is_finite()), "{broad_phase:?}");
    }
}

#[test]
fn overflowing_body_is_counted_as_non_finite() {
    let mut sim = core();
    sim.enable_perf_metrics(true);
    let id = sim.insert_body(body_at(Vec3::ZERO, Vec3::splat(f32::MAX))).unwrap();

    sim.step(2.0).unwrap();

    assert_eq!(sim.get_perf_stats().non_finite_bodies(), 1);
    assert!(!sim.body(id).unwrap().is_finite());
}

#[test]
fn ids_run_out_instead_of_repeating() {
    let mut sim = core();
    sim.next_id = u32::MAX - 1;
    let last = sim.insert_body(body_at(Vec3::ZERO, Vec3::ZERO)).unwrap();
    assert_eq!(last, u32::MAX - 1);

    let next = sim.insert_body(body_at(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO));
    assert!(matches!(next, Err(SimError::IdsExhausted)));
    assert_eq!(sim.body_count(), 1);

    sim.clear();
    assert_eq!(sim.insert_body(body_at(Vec3::ZERO, Vec3::ZERO)).unwrap(), 1);
}
