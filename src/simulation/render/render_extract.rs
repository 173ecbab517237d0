use super::{SimulationCore, TRANSFORM_STRIDE};

/// Refill the transfer buffers: one `[px, py, pz, rx, ry, rz]` record and
/// one ID per body, in body order. Buffers are reused across frames and
/// only grow.
pub(super) fn extract_transforms(sim: &mut SimulationCore) -> usize {
    let count = sim.bodies.len();
    let transforms = &mut sim.render.transforms;
    let ids = &mut sim.render.ids;

    transforms.clear();
    transforms.reserve(count * TRANSFORM_STRIDE);
    ids.clear();
    ids.reserve(count);

    for body in &sim.bodies {
        let p = body.position();
        let r = body.orientation();
        transforms.extend_from_slice(&[p.x, p.y, p.z, r.x, r.y, r.z]);
        ids.push(body.id());
    }

    count
}
