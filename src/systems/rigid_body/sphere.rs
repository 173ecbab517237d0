use glam::Vec3;

/// Bounding sphere (center + radius)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Smallest sphere around `points` centered on their AABB center.
    ///
    /// Same construction a mesh library uses for `computeBoundingSphere`:
    /// the center is not optimal, but it is stable and cheap.
    pub fn from_points(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::new(Vec3::ZERO, 0.0);
        }

        let (min, max) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        let center = (min + max) * 0.5;

        let radius_sq = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0f32, f32::max);

        Self::new(center, radius_sq.sqrt())
    }

    /// Lowest corner of the sphere's AABB
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - Vec3::splat(self.radius)
    }

    /// Highest corner of the sphere's AABB
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + Vec3::splat(self.radius)
    }

    /// True when `other` lies fully inside this sphere (with a small slack
    /// for float rounding in the merge arithmetic).
    pub fn encloses(&self, other: &BoundingSphere) -> bool {
        let slack = 1e-4 * self.radius.max(1.0);
        self.center.distance(other.center) + other.radius <= self.radius + slack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_centers_on_box_midpoint() {
        let pts = [Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.0)];
        let s = BoundingSphere::from_points(&pts);
        assert_eq!(s.center, Vec3::new(1.0, 1.0, 0.0));
        assert!((s.radius - 5.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn encloses_checks_full_containment() {
        let outer = BoundingSphere::new(Vec3::ZERO, 5.0);
        assert!(outer.encloses(&BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 2.0)));
        assert!(!outer.encloses(&BoundingSphere::new(Vec3::new(3.5, 0.0, 0.0), 2.0)));
    }
}
