//! Narrow-phase predicates
//!
//! The sphere tests are strict (tangency is not contact) while the box tests
//! are inclusive (touching faces count). Both conventions are kept on purpose
//! and exposed under separate names.

use crate::rigid_body::{Aabb, BoundingSphere};
use crate::spatial::enclosure::Enclosure;

/// `|c1 - c2| < r1 + r2`
#[inline]
pub fn sphere_overlap(a: &BoundingSphere, b: &BoundingSphere) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// The sphere's AABB is strictly inside all six enclosure faces
#[inline]
pub fn sphere_contained(sphere: &BoundingSphere, enclosure: &Enclosure) -> bool {
    let lo = sphere.min();
    let hi = sphere.max();
    lo.cmpgt(enclosure.min()).all() && hi.cmplt(enclosure.max()).all()
}

/// Separating-axis AABB test, touching counts as overlap
#[inline]
pub fn box_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Box inside the enclosure, faces included
#[inline]
pub fn box_contained(aabb: &Aabb, enclosure: &Enclosure) -> bool {
    enclosure.as_aabb().contains_box(aabb)
}
