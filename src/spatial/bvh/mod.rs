//! Bounding Volume Hierarchy over body bounding spheres
//!
//! Binary tree built by sorting on z and splitting at the median index.
//! Leaves hold one or two bodies; every node sphere encloses the spheres of
//! all bodies below it, which is what makes pruning in `cross_visit` sound.
//!
//! The tree is throwaway: bodies move every step, so the simulation builds a
//! fresh one per step, queries it once and drops it.

mod build;
mod node;
mod traverse;

pub use node::{merge, BvhNode, LeafBodies};

use crate::domain::error::{SimError, SimResult};
use crate::rigid_body::{BoundingSphere, RigidBody};
use crate::systems::collision::{CollisionCounters, ContactSink, PairCollector};

pub struct Bvh {
    root: BvhNode,
    radius: f32,
}

impl Bvh {
    /// Build over every body in `bodies`. `None` when there are no bodies.
    ///
    /// The bounding check runs only under `debug_assertions`; release builds
    /// skip it. Call `check_bounds` directly to verify a tree there.
    pub fn build(bodies: &[RigidBody], radius: f32) -> Option<Self> {
        if bodies.is_empty() {
            return None;
        }
        let mut indices: Vec<usize> = (0..bodies.len()).collect();
        let root = build::build_node(bodies, &mut indices, radius);
        let tree = Self { root, radius };
        debug_assert!(tree.check_bounds(bodies).is_ok(), "bvh bound does not enclose its bodies");
        Some(tree)
    }

    pub fn root(&self) -> &BvhNode {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Run the same-node / cross-node traversal, reporting contacts to `sink`
    pub fn detect<S: ContactSink>(
        &self,
        bodies: &mut [RigidBody],
        sink: &mut S,
        counters: &mut CollisionCounters,
    ) {
        traverse::visit(&self.root, bodies, sink, counters);
    }

    /// Overlapping pairs as sorted `(min, max)` tuples; bodies are not modified
    pub fn collect_pairs(&self, bodies: &mut [RigidBody]) -> Vec<(usize, usize)> {
        let mut collector = PairCollector::new();
        let mut counters = CollisionCounters::default();
        self.detect(bodies, &mut collector, &mut counters);
        collector.into_sorted_pairs()
    }

    /// Verify every node sphere encloses the spheres of the bodies under it
    pub fn check_bounds(&self, bodies: &[RigidBody]) -> SimResult<()> {
        check_node(&self.root, bodies, self.radius, 0)
    }
}

fn check_node(node: &BvhNode, bodies: &[RigidBody], radius: f32, depth: u32) -> SimResult<()> {
    let bound = node.sphere();
    for i in node.body_indices() {
        let body = BoundingSphere::new(bodies[i].bounding_sphere().center, radius);
        if !bound.encloses(&body) {
            return Err(SimError::BoundingInvariant { node_depth: depth });
        }
    }
    if let BvhNode::Internal { left, right, .. } = node {
        check_node(left, bodies, radius, depth + 1)?;
        check_node(right, bodies, radius, depth + 1)?;
    }
    Ok(())
}
