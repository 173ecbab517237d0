//! O(n^2) all-pairs scans
//!
//! The baseline the BVH is measured against, and the only path that
//! supports the AABB narrow phase.

use crate::domain::modes::PairPolicy;
use crate::rigid_body::RigidBody;
use crate::spatial::enclosure::Enclosure;

use super::narrow::{box_contained, box_overlap, sphere_overlap};
use super::response::{respond_to_wall, reverse_velocity};
use super::{CollisionCounters, ContactSink, PairCollector};

/// Sphere scan. Each body gets a wall check and, depending on `policy`,
/// either its first overlapping partner or every overlapping partner.
///
/// With `FirstMatch` a body scans every other body (earlier ones included),
/// so a pair can be reported from both sides in the same step.
pub fn detect_spheres<S: ContactSink>(
    bodies: &mut [RigidBody],
    sink: &mut S,
    policy: PairPolicy,
    counters: &mut CollisionCounters,
) {
    let n = bodies.len();
    for i in 0..n {
        match policy {
            PairPolicy::FirstMatch => {
                let mut partner = None;
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    counters.pair_tests += 1;
                    if sphere_overlap(&bodies[i].bounding_sphere(), &bodies[j].bounding_sphere()) {
                        partner = Some(j);
                        break;
                    }
                }

                sink.on_body(bodies, i);
                if let Some(j) = partner {
                    sink.on_pair(bodies, i, j);
                }
            }
            PairPolicy::AllMatches => {
                sink.on_body(bodies, i);
                for j in (i + 1)..n {
                    counters.pair_tests += 1;
                    if sphere_overlap(&bodies[i].bounding_sphere(), &bodies[j].bounding_sphere()) {
                        sink.on_pair(bodies, i, j);
                    }
                }
            }
        }
    }
}

/// AABB scan: any box overlap reverses the scanning body's whole velocity,
/// then a body whose box leaves the enclosure gets the wall response.
pub fn detect_boxes(
    bodies: &mut [RigidBody],
    enclosure: &Enclosure,
    radius: f32,
    counters: &mut CollisionCounters,
) {
    for body in bodies.iter_mut() {
        body.refresh_bounding_box();
    }

    let n = bodies.len();
    for i in 0..n {
        let own = bodies[i].refresh_bounding_box();

        let mut hit = false;
        for j in 0..n {
            if i == j {
                continue;
            }
            counters.pair_tests += 1;
            let other = bodies[j].refresh_bounding_box();
            if box_overlap(&own, &other) {
                hit = true;
                break;
            }
        }

        let body = &mut bodies[i];
        if hit {
            reverse_velocity(body);
            counters.pair_responses += 1;
        }
        if !box_contained(&body.bounding_box(), enclosure) && respond_to_wall(body, enclosure, radius) {
            counters.wall_responses += 1;
        }
    }
}

/// Every unordered pair whose bounding spheres overlap, sorted; bodies are not modified
pub fn collect_sphere_pairs(bodies: &mut [RigidBody]) -> Vec<(usize, usize)> {
    let mut collector = PairCollector::new();
    let mut counters = CollisionCounters::default();
    detect_spheres(bodies, &mut collector, PairPolicy::AllMatches, &mut counters);
    collector.into_sorted_pairs()
}
