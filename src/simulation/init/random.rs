use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::domain::config::SpeedRange;

/// Uniform point on the unit sphere (uniform height, uniform azimuth)
pub(super) fn random_direction(rng: &mut Pcg32) -> Vec3 {
    let u: f32 = rng.gen_range(-1.0..=1.0);
    let t: f32 = rng.gen_range(0.0..TAU);
    let f = (1.0 - u * u).max(0.0).sqrt();
    Vec3::new(f * t.cos(), u, f * t.sin())
}

#[inline]
pub(super) fn sample(rng: &mut Pcg32, range: SpeedRange) -> f32 {
    rng.gen_range(range.min..=range.max)
}

/// Linear velocity: sampled speed along a random direction.
/// Angular velocity: one sampled rate on all three Euler axes.
pub(super) fn random_velocities(rng: &mut Pcg32, speed: SpeedRange, angular_speed: SpeedRange) -> (Vec3, Vec3) {
    let s = sample(rng, speed);
    let direction = random_direction(rng);
    let w = sample(rng, angular_speed);
    (direction * s, Vec3::splat(w))
}
