use glam::Vec3;
use tracing::{debug, info, warn};

use crate::domain::config::SpeedRange;
use crate::domain::error::{SimError, SimResult};
use crate::domain::shapes::PolyhedronKind;
use crate::rigid_body::RigidBody;
use crate::systems::collision::narrow::sphere_contained;

use super::random;
use super::SimulationCore;

/// Relative tolerance when matching a body's radius against the run's `R`
const RADIUS_TOLERANCE: f32 = 1e-4;

pub(super) fn insert_body(sim: &mut SimulationCore, mut body: RigidBody) -> SimResult<u32> {
    let id = sim.next_id;
    let expected = sim.config.radius;
    let actual = body.reference_sphere().radius;

    if (actual - expected).abs() > RADIUS_TOLERANCE * expected.max(1.0) {
        warn!(expected, actual, "rejected body with mismatched radius");
        return Err(SimError::RadiusMismatch { expected, actual });
    }
    if !body.is_finite() {
        warn!(id, "rejected body with non-finite state");
        return Err(SimError::NonFiniteState { id });
    }
    if !sphere_contained(&body.bounding_sphere(), &sim.enclosure) {
        // The first wall response will push it back in.
        warn!(id, position = ?body.position(), "body inserted outside the enclosure");
    }

    // `u32::MAX` is never handed out, so ids stay unique until `clear`.
    sim.next_id = id.checked_add(1).ok_or(SimError::IdsExhausted)?;
    body.set_id(id);
    body.refresh_bounding_box();
    debug!(id, kind = ?body.kind(), "inserted body");
    sim.bodies.push(body);
    Ok(id)
}

pub(super) fn spawn(sim: &mut SimulationCore, kind: PolyhedronKind, position: Vec3) -> SimResult<u32> {
    let (velocity, angular_velocity) = random::random_velocities(
        &mut sim.rng,
        sim.config.speed_bounds(),
        sim.config.angular_speed_bounds(),
    );
    let body = RigidBody::new(kind, sim.config.radius, position).with_velocity(velocity, angular_velocity);
    insert_body(sim, body)
}

pub(super) fn randomize_velocities(
    sim: &mut SimulationCore,
    speed: SpeedRange,
    angular_speed: SpeedRange,
) -> SimResult<()> {
    speed.validate()?;
    angular_speed.validate()?;

    for body in sim.bodies.iter_mut() {
        let (velocity, angular_velocity) = random::random_velocities(&mut sim.rng, speed, angular_speed);
        body.set_velocity(velocity);
        body.set_angular_velocity(angular_velocity);
    }
    Ok(())
}

pub(super) fn remove_body(sim: &mut SimulationCore, id: u32) -> bool {
    match sim.bodies.iter().position(|b| b.id() == id) {
        Some(idx) => {
            sim.bodies.remove(idx);
            true
        }
        None => false,
    }
}

pub(super) fn clear(sim: &mut SimulationCore) {
    info!(removed = sim.bodies.len(), "cleared all bodies");
    sim.bodies.clear();
    sim.next_id = 1;
    sim.render.transforms.clear();
    sim.render.ids.clear();
}
