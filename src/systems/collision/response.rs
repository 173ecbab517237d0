//! Collision responses
//!
//! All responses are perfectly elastic and act only through the body
//! setters, so the cached bounding sphere stays in sync.

use glam::Vec3;

use crate::rigid_body::RigidBody;
use crate::spatial::enclosure::Enclosure;

/// Center distances below this are treated as coincident (no usable normal)
pub const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Outcome of a pairwise response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairResponse {
    Resolved,
    /// Centers coincide; nothing was changed
    Degenerate,
}

/// Push a body that sticks out of the enclosure back inside and reflect the
/// velocity on every axis it penetrated.
///
/// Axes are handled independently, so a corner hit corrects two or three
/// axes in one call. Returns whether anything changed.
pub fn respond_to_wall(body: &mut RigidBody, enclosure: &Enclosure, radius: f32) -> bool {
    let center = body.bounding_sphere().center;
    let lo = enclosure.min();
    let hi = enclosure.max();

    let mut position = body.position();
    let mut velocity = body.velocity();
    let mut hit = false;

    for axis in 0..3 {
        let sphere_min = center[axis] - radius;
        let sphere_max = center[axis] + radius;

        if sphere_min < lo[axis] {
            position[axis] += lo[axis] - sphere_min;
            velocity[axis] = -velocity[axis];
            hit = true;
        } else if sphere_max > hi[axis] {
            position[axis] -= sphere_max - hi[axis];
            velocity[axis] = -velocity[axis];
            hit = true;
        }
    }

    if hit {
        body.set_position(position);
        body.set_velocity(velocity);
    }
    hit
}

/// Equal-mass elastic exchange along the line of centers.
///
/// Overlapping bodies are first separated symmetrically so they stop
/// touching, then the normal component of the relative velocity is reversed.
/// Tangential velocity is untouched.
pub fn respond_to_pair(a: &mut RigidBody, b: &mut RigidBody, radius: f32) -> PairResponse {
    let delta = b.bounding_sphere().center - a.bounding_sphere().center;
    let dist = delta.length();
    if dist <= MIN_NORMAL_LENGTH {
        return PairResponse::Degenerate;
    }
    let normal = delta / dist;

    let depth = 2.0 * radius - dist;
    if depth > 0.0 {
        let push = normal * (depth * 0.5);
        b.set_position(b.position() + push);
        a.set_position(a.position() - push);
    }

    let relative = b.velocity() - a.velocity();
    let impulse: Vec3 = normal * -relative.dot(normal);
    b.set_velocity(b.velocity() + impulse);
    a.set_velocity(a.velocity() - impulse);

    PairResponse::Resolved
}

/// Crude AABB-mode response: send the body back the way it came
pub fn reverse_velocity(body: &mut RigidBody) {
    body.set_velocity(-body.velocity());
    body.refresh_bounding_box();
}
