use crate::constants::{NUCLEUS_FILL, NUCLEUS_RADIUS_CAP, NUCLEUS_RADIUS_FLOOR, TIGHT_PACK_LIMIT};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

// Hand-picked slots for the smallest nuclei, origin first.
const TIGHT_PACK: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.12, 0.0, 0.0),
    Vec3::new(-0.06, 0.1, 0.0),
    Vec3::new(-0.06, -0.1, 0.0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NucleonKind {
    Proton,
    Neutron,
}

/// One nucleon placed in scene space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nucleon {
    pub kind: NucleonKind,
    pub position: Vec3,
}

/// Nucleon positions for one atom, protons occupying the inner slots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nucleus {
    pub nucleons: Vec<Nucleon>,
}

impl Nucleus {
    /// Places `protons` then `neutrons`. Small nuclei use the fixed tight
    /// pack; larger ones spiral over a sphere whose radius grows with the
    /// nucleon count up to a cap. Deterministic.
    pub fn layout(protons: usize, neutrons: usize) -> Self {
        let total = protons + neutrons;
        let positions = if total <= TIGHT_PACK_LIMIT {
            TIGHT_PACK[..total].to_vec()
        } else {
            packed_sphere(total)
        };

        let nucleons = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| Nucleon {
                kind: if index < protons {
                    NucleonKind::Proton
                } else {
                    NucleonKind::Neutron
                },
                position,
            })
            .collect();

        Self { nucleons }
    }

    pub fn proton_count(&self) -> usize {
        self.count(NucleonKind::Proton)
    }

    pub fn neutron_count(&self) -> usize {
        self.count(NucleonKind::Neutron)
    }

    fn count(&self, kind: NucleonKind) -> usize {
        self.nucleons
            .iter()
            .filter(|nucleon| nucleon.kind == kind)
            .count()
    }
}

/// Golden-angle spiral filling a sphere, inner points first.
fn packed_sphere(total: usize) -> Vec<Vec3> {
    let radius = NUCLEUS_RADIUS_CAP.min(NUCLEUS_RADIUS_FLOOR + total as f32 / 120.0);
    let golden_angle = PI * (1.0 + 5.0_f32.sqrt());

    let mut points = Vec::with_capacity(total);
    for index in 0..total {
        let step = index as f32 + 0.5;
        let fraction = step / total as f32;
        let theta = (1.0 - 2.0 * fraction).acos();
        let phi = golden_angle * step;
        let r = radius * fraction.sqrt() * NUCLEUS_FILL;

        points.push(Vec3::new(
            r * theta.sin() * phi.cos(),
            r * theta.sin() * phi.sin(),
            r * theta.cos(),
        ));
    }
    points
}
