//! Collision detection and response
//!
//! Pair searches (brute force here, the BVH in `spatial::bvh`) only decide
//! *which* bodies touch. What happens next is up to a `ContactSink`:
//! - `Resolver` applies the elastic responses in place (the normal step path).
//! - `PairCollector` just records the pairs (diagnostics and tests).

pub mod brute_force;
pub mod narrow;
pub mod response;

use crate::rigid_body::{pair_mut, RigidBody};
use crate::spatial::enclosure::Enclosure;

use narrow::sphere_contained;
use response::{respond_to_pair, respond_to_wall, PairResponse};

/// Per-step tallies reported through perf stats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionCounters {
    /// Body-vs-body narrow tests
    pub pair_tests: u32,
    /// Node-vs-node sphere tests (BVH only)
    pub node_tests: u32,
    pub pair_responses: u32,
    pub wall_responses: u32,
    /// Pairs skipped because their centers coincided
    pub degenerate_pairs: u32,
}

impl std::ops::AddAssign for CollisionCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.pair_tests += rhs.pair_tests;
        self.node_tests += rhs.node_tests;
        self.pair_responses += rhs.pair_responses;
        self.wall_responses += rhs.wall_responses;
        self.degenerate_pairs += rhs.degenerate_pairs;
    }
}

/// Receives what a pair search finds
pub trait ContactSink {
    /// Bodies `a` and `b` overlap
    fn on_pair(&mut self, bodies: &mut [RigidBody], a: usize, b: usize);

    /// Body `i` was visited; check it against the enclosure
    fn on_body(&mut self, bodies: &mut [RigidBody], i: usize);
}

/// Applies wall and pairwise responses as contacts are reported
///
/// Only response tallies land in its counters; test counts belong to the
/// search that drives it.
pub struct Resolver<'a> {
    enclosure: &'a Enclosure,
    radius: f32,
    counters: CollisionCounters,
}

impl<'a> Resolver<'a> {
    pub fn new(enclosure: &'a Enclosure, radius: f32) -> Self {
        Self { enclosure, radius, counters: CollisionCounters::default() }
    }

    pub fn counters(&self) -> &CollisionCounters {
        &self.counters
    }

    pub fn into_counters(self) -> CollisionCounters {
        self.counters
    }
}

impl ContactSink for Resolver<'_> {
    fn on_pair(&mut self, bodies: &mut [RigidBody], a: usize, b: usize) {
        let (first, second) = pair_mut(bodies, a, b);
        match respond_to_pair(first, second, self.radius) {
            PairResponse::Resolved => self.counters.pair_responses += 1,
            PairResponse::Degenerate => self.counters.degenerate_pairs += 1,
        }
    }

    fn on_body(&mut self, bodies: &mut [RigidBody], i: usize) {
        let body = &mut bodies[i];
        if !sphere_contained(&body.bounding_sphere(), self.enclosure)
            && respond_to_wall(body, self.enclosure, self.radius)
        {
            self.counters.wall_responses += 1;
        }
    }
}

/// Records overlapping pairs without touching the bodies
#[derive(Debug, Default)]
pub struct PairCollector {
    pairs: Vec<(usize, usize)>,
}

impl PairCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs as `(min, max)`, sorted ascending and deduplicated
    pub fn into_sorted_pairs(mut self) -> Vec<(usize, usize)> {
        self.pairs.sort_unstable();
        self.pairs.dedup();
        self.pairs
    }

    /// Pairs in the order they were reported, as `(min, max)`
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

impl ContactSink for PairCollector {
    fn on_pair(&mut self, _bodies: &mut [RigidBody], a: usize, b: usize) {
        self.pairs.push((a.min(b), a.max(b)));
    }

    fn on_body(&mut self, _bodies: &mut [RigidBody], _i: usize) {}
}
