use glam::Vec3;

use crate::rigid_body::BoundingSphere;

/// Relative growth applied to every merged radius; keeps the bound
/// conservative under f32 rounding.
const MERGE_SLACK: f32 = 1e-5;

/// Body indices held by a leaf: one or two, never zero
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafBodies {
    One([usize; 1]),
    Two([usize; 2]),
}

impl LeafBodies {
    pub fn as_slice(&self) -> &[usize] {
        match self {
            LeafBodies::One(ids) => ids.as_slice(),
            LeafBodies::Two(ids) => ids.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
}

/// One node of the sphere tree
#[derive(Clone, Debug)]
pub enum BvhNode {
    Leaf {
        bodies: LeafBodies,
        sphere: BoundingSphere,
    },
    Internal {
        left: Box<BvhNode>,
        right: Box<BvhNode>,
        sphere: BoundingSphere,
    },
}

impl BvhNode {
    /// Leaf over one body sphere, or two merged around their midpoint
    pub(super) fn leaf<F: Fn(usize) -> Vec3>(bodies: LeafBodies, center_of: F, radius: f32) -> Self {
        let sphere = match bodies {
            LeafBodies::One([i]) => BoundingSphere::new(center_of(i), radius),
            LeafBodies::Two([i, j]) => {
                let (a, b) = (center_of(i), center_of(j));
                let center = (a + b) * 0.5;
                let reach = center.distance(a).max(center.distance(b));
                BoundingSphere::new(center, inflate(reach + radius))
            }
        };
        BvhNode::Leaf { bodies, sphere }
    }

    pub(super) fn internal(left: BvhNode, right: BvhNode) -> Self {
        let sphere = merge(left.sphere(), right.sphere());
        BvhNode::Internal {
            left: Box::new(left),
            right: Box::new(right),
            sphere,
        }
    }

    pub fn sphere(&self) -> &BoundingSphere {
        match self {
            BvhNode::Leaf { sphere, .. } | BvhNode::Internal { sphere, .. } => sphere,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }

    pub fn node_count(&self) -> usize {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Levels below and including this node
    pub fn depth(&self) -> usize {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Calls `f` for every leaf, left to right
    pub fn for_each_leaf<F: FnMut(&LeafBodies)>(&self, f: &mut F) {
        match self {
            BvhNode::Leaf { bodies, .. } => f(bodies),
            BvhNode::Internal { left, right, .. } => {
                left.for_each_leaf(f);
                right.for_each_leaf(f);
            }
        }
    }

    /// Body indices anywhere under this node
    pub fn body_indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_leaf(&mut |leaf| out.extend_from_slice(leaf.as_slice()));
        out
    }
}

/// Center at the midpoint of the two centers; radius reaches the far side
/// of whichever child sticks out further.
pub fn merge(a: &BoundingSphere, b: &BoundingSphere) -> BoundingSphere {
    let center = (a.center + b.center) * 0.5;
    let reach_a = center.distance(a.center) + a.radius;
    let reach_b = center.distance(b.center) + b.radius;
    BoundingSphere::new(center, inflate(reach_a.max(reach_b)))
}

#[inline]
fn inflate(r: f32) -> f32 {
    r * (1.0 + MERGE_SLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leaf_uses_uniform_radius() {
        let leaf = BvhNode::leaf(LeafBodies::One([3]), |_| Vec3::new(1.0, 2.0, 3.0), 2.5);
        assert_eq!(leaf.sphere().center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(leaf.sphere().radius, 2.5);
        assert_eq!(leaf.node_count(), 1);
    }

    #[test]
    fn pair_leaf_centers_on_midpoint() {
        let centers = [Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
        let leaf = BvhNode::leaf(LeafBodies::Two([0, 1]), |i| centers[i], 1.0);
        assert_eq!(leaf.sphere().center, Vec3::new(2.0, 0.0, 0.0));
        assert!((leaf.sphere().radius - 3.0).abs() < 1e-3);
    }

    #[test]
    fn merge_encloses_both_children() {
        let a = BoundingSphere::new(Vec3::ZERO, 1.0);
        let b = BoundingSphere::new(Vec3::new(10.0, 0.0, 0.0), 4.0);
        let m = merge(&a, &b);
        assert!(m.encloses(&a));
        assert!(m.encloses(&b));
    }

    #[test]
    fn leaf_bodies_report_their_length() {
        assert_eq!(LeafBodies::One([7]).len(), 1);
        assert_eq!(LeafBodies::Two([7, 8]).as_slice(), &[7, 8]);
    }
}
