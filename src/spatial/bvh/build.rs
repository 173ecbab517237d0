use crate::rigid_body::RigidBody;

use super::node::{BvhNode, LeafBodies};

/// Median split along z. `indices` is reordered in place.
pub(super) fn build_node(bodies: &[RigidBody], indices: &mut [usize], radius: f32) -> BvhNode {
    let center_of = |i: usize| bodies[i].bounding_sphere().center;

    debug_assert!(!indices.is_empty(), "bvh nodes cover at least one body");
    match &*indices {
        [i] => return BvhNode::leaf(LeafBodies::One([*i]), center_of, radius),
        [i, j] => return BvhNode::leaf(LeafBodies::Two([*i, *j]), center_of, radius),
        _ => {}
    }

    // Stable, so equal z keeps insertion order and builds are reproducible.
    indices.sort_by(|&a, &b| center_of(a).z.total_cmp(&center_of(b).z));

    let mid = indices.len() / 2;
    let (lo, hi) = indices.split_at_mut(mid);
    let left = build_node(bodies, lo, radius);
    let right = build_node(bodies, hi, radius);
    BvhNode::internal(left, right)
}
