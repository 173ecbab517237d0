//! Collision traversal
//!
//! `visit` handles pairs inside one subtree, `cross_visit` pairs split
//! across two sibling subtrees (same idea as the merge step of closest-pair
//! divide and conquer). Together they test every candidate pair exactly once.
//!
//! Node spheres were fixed at build time, but body spheres are read live, so
//! a response made early in the pass is visible to every later test.

use crate::rigid_body::RigidBody;
use crate::systems::collision::narrow::sphere_overlap;
use crate::systems::collision::{CollisionCounters, ContactSink};

use super::node::BvhNode;

pub(super) fn visit<S: ContactSink>(
    node: &BvhNode,
    bodies: &mut [RigidBody],
    sink: &mut S,
    counters: &mut CollisionCounters,
) {
    match node {
        BvhNode::Leaf { bodies: ids, .. } => {
            let ids = ids.as_slice();
            for (k, &a) in ids.iter().enumerate() {
                for &b in &ids[k + 1..] {
                    test_pair(a, b, bodies, sink, counters);
                }
                sink.on_body(bodies, a);
            }
        }
        BvhNode::Internal { left, right, .. } => {
            visit(left, bodies, sink, counters);
            visit(right, bodies, sink, counters);
            cross_visit(left, right, bodies, sink, counters);
        }
    }
}

pub(super) fn cross_visit<S: ContactSink>(
    a: &BvhNode,
    b: &BvhNode,
    bodies: &mut [RigidBody],
    sink: &mut S,
    counters: &mut CollisionCounters,
) {
    counters.node_tests += 1;
    if !sphere_overlap(a.sphere(), b.sphere()) {
        return;
    }

    match (a, b) {
        (BvhNode::Leaf { bodies: xs, .. }, BvhNode::Leaf { bodies: ys, .. }) => {
            for &x in xs.as_slice() {
                for &y in ys.as_slice() {
                    test_pair(x, y, bodies, sink, counters);
                }
            }
        }
        (BvhNode::Leaf { .. }, BvhNode::Internal { left, right, .. }) => {
            cross_visit(a, left, bodies, sink, counters);
            cross_visit(a, right, bodies, sink, counters);
        }
        (BvhNode::Internal { left, right, .. }, BvhNode::Leaf { .. }) => {
            cross_visit(b, left, bodies, sink, counters);
            cross_visit(b, right, bodies, sink, counters);
        }
        (
            BvhNode::Internal { left: al, right: ar, .. },
            BvhNode::Internal { left: bl, right: br, .. },
        ) => {
            cross_visit(al, bl, bodies, sink, counters);
            cross_visit(al, br, bodies, sink, counters);
            cross_visit(ar, bl, bodies, sink, counters);
            cross_visit(ar, br, bodies, sink, counters);
        }
    }
}

#[inline]
fn test_pair<S: ContactSink>(
    a: usize,
    b: usize,
    bodies: &mut [RigidBody],
    sink: &mut S,
    counters: &mut CollisionCounters,
) {
    counters.pair_tests += 1;
    if sphere_overlap(&bodies[a].bounding_sphere(), &bodies[b].bounding_sphere()) {
        sink.on_pair(bodies, a, b);
    }
}
