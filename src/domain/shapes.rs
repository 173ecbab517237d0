//! Polyhedron catalogue
//!
//! Only the hull vertices live here: the renderer builds its own meshes.
//! Every solid is projected onto a sphere of radius `size`, so all kinds
//! share the same bounding radius and can coexist in a uniform-size run.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// The five solids the scene can spawn
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolyhedronKind {
    Tetrahedron = 0,
    Octahedron = 1,
    Dodecahedron = 2,
    Icosahedron = 3,
    Cube = 4,
}

const GOLDEN: f32 = 1.618_034;
const INV_GOLDEN: f32 = 1.0 / GOLDEN;

impl PolyhedronKind {
    pub const ALL: [PolyhedronKind; 5] = [
        PolyhedronKind::Tetrahedron,
        PolyhedronKind::Octahedron,
        PolyhedronKind::Dodecahedron,
        PolyhedronKind::Icosahedron,
        PolyhedronKind::Cube,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// Hull vertices in model space, each at distance `size` from the origin
    pub fn vertices(self, size: f32) -> Vec<Vec3> {
        self.unit_directions()
            .into_iter()
            .map(|v| v.normalize() * size)
            .collect()
    }

    fn unit_directions(self) -> Vec<Vec3> {
        match self {
            PolyhedronKind::Tetrahedron => vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
            PolyhedronKind::Octahedron => vec![
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ],
            PolyhedronKind::Cube => cube_corners(),
            PolyhedronKind::Icosahedron => {
                let t = GOLDEN;
                vec![
                    Vec3::new(-1.0, t, 0.0),
                    Vec3::new(1.0, t, 0.0),
                    Vec3::new(-1.0, -t, 0.0),
                    Vec3::new(1.0, -t, 0.0),
                    Vec3::new(0.0, -1.0, t),
                    Vec3::new(0.0, 1.0, t),
                    Vec3::new(0.0, -1.0, -t),
                    Vec3::new(0.0, 1.0, -t),
                    Vec3::new(t, 0.0, -1.0),
                    Vec3::new(t, 0.0, 1.0),
                    Vec3::new(-t, 0.0, -1.0),
                    Vec3::new(-t, 0.0, 1.0),
                ]
            }
            PolyhedronKind::Dodecahedron => {
                let t = GOLDEN;
                let r = INV_GOLDEN;
                let mut out = cube_corners();
                for (a, b) in [(r, t), (r, -t), (-r, t), (-r, -t)] {
                    out.push(Vec3::new(0.0, a, b));
                    out.push(Vec3::new(a, b, 0.0));
                    out.push(Vec3::new(b, 0.0, a));
                }
                out
            }
        }
    }
}

fn cube_corners() -> Vec<Vec3> {
    let mut out = Vec::with_capacity(8);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                out.push(Vec3::new(x, y, z));
            }
        }
    }
    out
}
