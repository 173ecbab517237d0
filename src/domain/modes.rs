use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Which pair search runs each step
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadPhaseKind {
    BruteForce = 0,
    Bvh = 1,
}

/// Which bounding volume the pair test uses
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowPhaseKind {
    Sphere = 0,
    Aabb = 1,
}

/// How many partners the brute-force sphere scan resolves per body per step
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairPolicy {
    /// Stop at the first overlapping partner (one response per body)
    FirstMatch = 0,
    /// Resolve every overlapping unordered pair once
    AllMatches = 1,
}

impl Default for PairPolicy {
    fn default() -> Self {
        PairPolicy::FirstMatch
    }
}

/// Algorithm selector passed to `step`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionMode {
    pub broad_phase: BroadPhaseKind,
    pub narrow_phase: NarrowPhaseKind,
}

impl Default for CollisionMode {
    fn default() -> Self {
        Self {
            broad_phase: BroadPhaseKind::Bvh,
            narrow_phase: NarrowPhaseKind::Sphere,
        }
    }
}

impl CollisionMode {
    pub const BRUTE_FORCE_SPHERE: Self = Self {
        broad_phase: BroadPhaseKind::BruteForce,
        narrow_phase: NarrowPhaseKind::Sphere,
    };
    pub const BRUTE_FORCE_AABB: Self = Self {
        broad_phase: BroadPhaseKind::BruteForce,
        narrow_phase: NarrowPhaseKind::Aabb,
    };
    pub const BVH: Self = Self {
        broad_phase: BroadPhaseKind::Bvh,
        narrow_phase: NarrowPhaseKind::Sphere,
    };

    /// The BVH is a sphere tree, so `Bvh + Aabb` is not a runnable pair.
    /// Resolve it in favour of the axis that was picked last, the way the
    /// control panel toggles behave.
    pub fn normalized(self, last_picked: ModeAxis) -> Self {
        match (self.broad_phase, self.narrow_phase, last_picked) {
            (BroadPhaseKind::Bvh, NarrowPhaseKind::Aabb, ModeAxis::Broad) => Self::BVH,
            (BroadPhaseKind::Bvh, NarrowPhaseKind::Aabb, ModeAxis::Narrow) => Self::BRUTE_FORCE_AABB,
            _ => self,
        }
    }

    pub fn is_runnable(&self) -> bool {
        !(self.broad_phase == BroadPhaseKind::Bvh && self.narrow_phase == NarrowPhaseKind::Aabb)
    }
}

/// Which half of the selector changed most recently
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAxis {
    Broad,
    Narrow,
}
