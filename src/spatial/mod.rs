//! Spatial structures: the enclosure and the bounding volume hierarchy

pub mod bvh;
pub mod enclosure;
