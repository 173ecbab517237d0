use glam::{EulerRot, Mat3, Vec3};

use crate::domain::shapes::PolyhedronKind;

use super::aabb::Aabb;
use super::sphere::BoundingSphere;

/// Rigid Body - a convex solid that moves as a unit
///
/// State is private: every mutation goes through the setters below so the
/// world-space bounding sphere can never go stale.
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// Unique ID, assigned on insertion
    id: u32,
    /// World position (center)
    position: Vec3,
    /// Euler angles (XYZ order, radians). Accumulates without wrapping.
    orientation: Vec3,
    /// Units per second
    velocity: Vec3,
    /// Radians per second, per Euler axis
    angular_velocity: Vec3,

    // === Shape Definition ===
    kind: PolyhedronKind,
    /// Hull vertices relative to the body origin
    local_vertices: Vec<Vec3>,

    // === Bounding Volumes ===
    /// Model-space sphere, fixed at construction
    reference_sphere: BoundingSphere,
    /// World-space sphere, follows `position`
    bounding_sphere: BoundingSphere,
    /// World-space AABB of the rotated hull, refreshed on demand
    bounding_box: Aabb,
}

impl RigidBody {
    /// Create a polyhedron of circumradius `size` centered at `position`, at rest
    pub fn new(kind: PolyhedronKind, size: f32, position: Vec3) -> Self {
        let local_vertices = kind.vertices(size);
        let reference_sphere = BoundingSphere::from_points(&local_vertices);

        let mut body = Self {
            id: 0,
            position,
            orientation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            kind,
            local_vertices,
            reference_sphere,
            bounding_sphere: reference_sphere,
            bounding_box: Aabb::new(position, position),
        };
        body.update_bounding_sphere();
        body.refresh_bounding_box();
        body
    }

    /// Builder-style initial velocities
    pub fn with_velocity(mut self, velocity: Vec3, angular_velocity: Vec3) -> Self {
        self.velocity = velocity;
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn id(&self) -> u32 { self.id }

    pub(crate) fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn kind(&self) -> PolyhedronKind { self.kind }

    pub fn position(&self) -> Vec3 { self.position }

    pub fn orientation(&self) -> Vec3 { self.orientation }

    pub fn velocity(&self) -> Vec3 { self.velocity }

    pub fn angular_velocity(&self) -> Vec3 { self.angular_velocity }

    pub fn reference_sphere(&self) -> BoundingSphere { self.reference_sphere }

    pub fn bounding_sphere(&self) -> BoundingSphere { self.bounding_sphere }

    /// Last box computed by `refresh_bounding_box`
    pub fn bounding_box(&self) -> Aabb { self.bounding_box }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_bounding_sphere();
    }

    /// Explicit Euler step: x += v*dt, theta += w*dt
    ///
    /// No bounds checks; wall penetration is fixed by the wall response.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.orientation += self.angular_velocity * dt;
        self.update_bounding_sphere();
    }

    /// Recompute the world AABB from the current rotation and position
    pub fn refresh_bounding_box(&mut self) -> Aabb {
        let rotation = Mat3::from_euler(
            EulerRot::XYZ,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        );
        let position = self.position;
        self.bounding_box = Aabb::from_points(
            self.local_vertices
                .iter()
                .map(|v| rotation * *v + position),
        );
        self.bounding_box
    }

    /// 1/2 m v^2 with unit mass; rotation is not coupled to collisions so it is left out
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.velocity.length_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.orientation.is_finite()
            && self.velocity.is_finite()
            && self.angular_velocity.is_finite()
    }

    #[inline]
    fn update_bounding_sphere(&mut self) {
        self.bounding_sphere.center = self.position + self.reference_sphere.center;
    }
}

/// Borrow two distinct bodies mutably
///
/// # Panics
/// Panics if `a == b` or either index is out of range.
pub fn pair_mut(bodies: &mut [RigidBody], a: usize, b: usize) -> (&mut RigidBody, &mut RigidBody) {
    assert_ne!(a, b, "pair_mut needs two distinct bodies");
    if a < b {
        let (lo, hi) = bodies.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
