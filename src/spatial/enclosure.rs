use glam::Vec3;

use crate::rigid_body::Aabb;

/// The fixed cubic box every body bounces in. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enclosure {
    bounds: Aabb,
}

impl Enclosure {
    /// Cube of edge `size` centered on the origin
    pub fn cube(size: f32) -> Self {
        let half = Vec3::splat(size * 0.5);
        Self { bounds: Aabb::new(-half, half) }
    }

    #[inline]
    pub fn min(&self) -> Vec3 { self.bounds.min }

    #[inline]
    pub fn max(&self) -> Vec3 { self.bounds.max }

    pub fn as_aabb(&self) -> &Aabb { &self.bounds }

    /// Edge length along x (the box is a cube)
    pub fn size(&self) -> f32 {
        self.bounds.size().x
    }
}
