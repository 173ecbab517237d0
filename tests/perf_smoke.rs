use bouncebox_engine::{BroadPhaseKind, PolyhedronKind, World};

fn filled_world() -> World {
    let mut world = World::new();
    world.enable_perf_metrics(true);
    // Default config: radius 10 in a 120 cube. 4x4x4 lattice, 25 apart.
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                let p = |n: i32| -37.5 + 25.0 * n as f32;
                let kind = PolyhedronKind::ALL[((i + j + k) % 5) as usize];
                world.spawn(kind, p(i), p(j), p(k)).unwrap();
            }
        }
    }
    world
}

#[test]
fn perf_smoke_step() {
    let mut world = filled_world();
    world.tick();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 64);
    assert!(stats.bvh_nodes() > 0);
}

#[test]
fn bvh_tests_fewer_pairs_than_brute_force() {
    let mut bvh = filled_world();
    bvh.tick();
    let bvh_tests = bvh.get_perf_stats().pair_tests();

    let mut brute = filled_world();
    brute.set_broad_phase(BroadPhaseKind::BruteForce);
    brute.tick();
    let brute_tests = brute.get_perf_stats().pair_tests();

    // First-match scans test every ordered pair when nothing touches.
    assert_eq!(brute_tests, 64 * 63);
    assert!(bvh_tests < brute_tests / 2, "bvh {bvh_tests} vs brute {brute_tests}");
}

#[test]
fn extract_transforms_exposes_one_record_per_body() {
    let mut world = filled_world();
    world.tick();
    assert_eq!(world.extract_transforms(), 64);
    assert_eq!(world.transforms_len(), 64 * 6);
    assert!(!world.transforms_ptr().is_null());
}
