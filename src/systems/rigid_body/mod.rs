//! RigidBody - A convex solid that moves as a unit
//!
//! The body stores its hull in local coordinates (relative to center 0,0,0)
//! and caches two world-space bounding volumes: a sphere that always follows
//! the position, and an AABB of the rotated hull that is only rebuilt when a
//! caller asks for it.

mod aabb;
mod body;
mod sphere;

pub use aabb::Aabb;
pub use body::{pair_mut, RigidBody};
pub use sphere::BoundingSphere;
