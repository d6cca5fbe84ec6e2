use crate::chem::configuration::ElectronConfiguration;
use crate::chem::orbital::{Orbital, Subshell};
use crate::color::Rgb;
use crate::constants::{
    BASE_SPEED, FALLBACK_RADIUS_PER_SHELL, MAX_RING_ELECTRONS, RING_RADIUS_STEP, RING_SPEED_STEP,
    TILT_JITTER,
};
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Orbit colors for shells K through Q.
pub const SHELL_COLORS: [Rgb; 7] = [
    Rgb::new(0xFF, 0xD7, 0x00), // K gold
    Rgb::new(0x00, 0xFF, 0x00), // L green
    Rgb::new(0x00, 0xBF, 0xFF), // M blue
    Rgb::new(0xFF, 0x69, 0xB4), // N pink
    Rgb::new(0xFF, 0x63, 0x47), // O tomato
    Rgb::new(0x93, 0x70, 0xDB), // P purple
    Rgb::new(0xFF, 0xA5, 0x00), // Q orange
];

/// Color for shell `n`, white past the named shells.
pub fn shell_color(n: u8) -> Rgb {
    match n {
        1..=7 => SHELL_COLORS[usize::from(n) - 1],
        _ => Rgb::new(0xFF, 0xFF, 0xFF),
    }
}

/// Ring radius for an orbital, in scene units. Orbitals outside the fixed
/// table scale linearly with the shell number.
pub fn orbital_radius(orbital: Orbital) -> f32 {
    use Subshell::{D, P, S};
    match (orbital.n, orbital.subshell) {
        (1, S) => 1.2,
        (2, S | P) => 2.0,
        (3, S | P | D) => 2.8,
        (4, _) => 3.6,
        (5, _) => 4.4,
        (6, S | P | D) => 5.2,
        (7, S | P) => 6.0,
        _ => f32::from(orbital.n) * FALLBACK_RADIUS_PER_SHELL,
    }
}

/// Where one electron sits on its ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectronPlacement {
    /// Start angle along the ring, radians.
    pub phase: f32,
    /// Ring tilt plus this electron's jitter, radians.
    pub tilt: f32,
}

/// One rendered electron ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub orbital: Orbital,
    pub radius: f32,
    pub speed: f32,
    pub color: Rgb,
    pub electrons: Vec<ElectronPlacement>,
}

impl Orbit {
    /// Animated position of one of this ring's electrons at `time` seconds.
    pub fn electron_position(&self, placement: &ElectronPlacement, time: f32) -> Vec3 {
        let angle = time * self.speed + placement.phase;
        Vec3::new(
            self.radius * angle.cos(),
            self.radius * angle.sin() * placement.tilt.cos(),
            self.radius * angle.sin() * placement.tilt.sin(),
        )
    }
}

/// Builds electron rings from a configuration. Owns the random source used
/// for tilt jitter so callers can pin it in tests.
pub struct OrbitGenerator {
    rng: ChaCha8Rng,
}

impl OrbitGenerator {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One ring per sub-orbit, in the configuration's fill order. Orbitals
    /// holding more than eight electrons split into stacked rings with
    /// growing radius, speed, and tilt.
    pub fn orbits(&mut self, config: &ElectronConfiguration) -> Vec<Orbit> {
        let jitter = Uniform::new_inclusive(-TILT_JITTER, TILT_JITTER);
        let mut orbits = Vec::new();

        for entry in config.entries() {
            let count = usize::from(entry.electrons);
            if count == 0 {
                continue;
            }
            let orbital = entry.orbital;
            let base_radius = orbital_radius(orbital);
            let color = shell_color(orbital.n);
            let base_speed = BASE_SPEED / f32::from(orbital.n);

            let per_ring = count.min(usize::from(MAX_RING_ELECTRONS));
            let rings = count.div_ceil(per_ring);

            for ring in 0..rings {
                let in_ring = per_ring.min(count - ring * per_ring);
                let ring_tilt = ring as f32 / rings as f32 * PI;

                let electrons = (0..in_ring)
                    .map(|slot| ElectronPlacement {
                        phase: slot as f32 / in_ring as f32 * TAU,
                        tilt: ring_tilt + jitter.sample(&mut self.rng),
                    })
                    .collect();

                orbits.push(Orbit {
                    orbital,
                    radius: base_radius + ring as f32 * RING_RADIUS_STEP,
                    speed: base_speed * (1.0 + ring as f32 * RING_SPEED_STEP),
                    color,
                    electrons,
                });
            }
        }
        orbits
    }
}

impl Default for OrbitGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::configuration::Occupancy;
    use Subshell::{D, P, S};

    fn single_orbital(orbital: Orbital, electrons: u8) -> ElectronConfiguration {
        ElectronConfiguration::from_entries(vec![Occupancy { orbital, electrons }])
    }

    #[test]
    fn nine_electrons_split_into_two_rings() {
        let config = single_orbital(Orbital::new(3, D), 9);
        let orbits = OrbitGenerator::with_seed(3).orbits(&config);

        assert_eq!(orbits.len(), 2);
        assert_eq!(orbits[0].electrons.len(), 8);
        assert_eq!(orbits[1].electrons.len(), 1);
        assert!((orbits[1].radius - orbits[0].radius - RING_RADIUS_STEP).abs() < 1e-6);
        assert!(orbits[1].speed > orbits[0].speed);
    }

    #[test]
    fn shell_mates_share_a_radius() {
        assert_eq!(
            orbital_radius(Orbital::new(2, S)),
            orbital_radius(Orbital::new(2, P))
        );
        assert_eq!(orbital_radius(Orbital::new(1, S)), 1.2);
        assert_eq!(orbital_radius(Orbital::new(7, P)), 6.0);
        // 6f is outside the table and falls back to the shell scale.
        assert!((orbital_radius(Orbital::new(6, Subshell::F)) - 7.2).abs() < 1e-6);
    }

    #[test]
    fn phases_spread_evenly() {
        let config = single_orbital(Orbital::new(2, P), 4);
        let orbits = OrbitGenerator::with_seed(9).orbits(&config);

        assert_eq!(orbits.len(), 1);
        let phases: Vec<f32> = orbits[0].electrons.iter().map(|e| e.phase).collect();
        for (slot, phase) in phases.iter().enumerate() {
            assert!((phase - slot as f32 / 4.0 * TAU).abs() < 1e-6);
        }
    }

    #[test]
    fn tilts_stay_within_jitter_of_the_ring_tilt() {
        let config = single_orbital(Orbital::new(3, D), 10);
        let orbits = OrbitGenerator::with_seed(11).orbits(&config);

        assert_eq!(orbits.len(), 2);
        for electron in &orbits[0].electrons {
            assert!(electron.tilt.abs() <= TILT_JITTER + 1e-6);
        }
        for electron in &orbits[1].electrons {
            assert!((electron.tilt - PI / 2.0).abs() <= TILT_JITTER + 1e-6);
        }
    }

    #[test]
    fn identical_seeds_reproduce_identical_layouts() {
        let config = ElectronConfiguration::for_atomic_number(26);
        let first = OrbitGenerator::with_seed(42).orbits(&config);
        let second = OrbitGenerator::with_seed(42).orbits(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_calls_jitter_differently() {
        let config = ElectronConfiguration::for_atomic_number(26);
        let mut generator = OrbitGenerator::with_seed(42);
        let first = generator.orbits(&config);
        let second = generator.orbits(&config);
        assert_ne!(first, second);
    }

    #[test]
    fn ring_order_follows_fill_order() {
        let config = ElectronConfiguration::for_atomic_number(24);
        let orbits = OrbitGenerator::with_seed(5).orbits(&config);
        let labels: Vec<String> = orbits.iter().map(|o| o.orbital.to_string()).collect();
        assert_eq!(labels, vec!["1s", "2s", "2p", "3s", "3p", "4s", "3d"]);
    }

    #[test]
    fn shell_colors_cover_the_palette() {
        assert_eq!(shell_color(1).to_string(), "#FFD700");
        assert_eq!(shell_color(7).to_string(), "#FFA500");
        assert_eq!(shell_color(8).to_string(), "#FFFFFF");
    }

    #[test]
    fn electron_position_traces_the_tilted_ring() {
        let orbit = Orbit {
            orbital: Orbital::new(1, S),
            radius: 2.0,
            speed: 0.5,
            color: shell_color(1),
            electrons: vec![],
        };
        let flat = ElectronPlacement { phase: 0.0, tilt: 0.0 };

        let start = orbit.electron_position(&flat, 0.0);
        assert!((start - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);

        // A quarter turn later the electron is on the tilted y/z plane.
        let quarter = orbit.electron_position(&flat, PI);
        assert!((quarter - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);

        let tilted = ElectronPlacement { phase: 0.0, tilt: PI / 2.0 };
        let lifted = orbit.electron_position(&tilted, PI);
        assert!((lifted - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }
}
