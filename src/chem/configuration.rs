use crate::chem::orbital::{Orbital, Subshell};
use serde::{Deserialize, Serialize};
use std::fmt;

use Subshell::{D, F, P, S};

/// Orbitals in the order electrons fill them.
pub const AUFBAU_ORDER: [Orbital; 19] = [
    Orbital::new(1, S),
    Orbital::new(2, S),
    Orbital::new(2, P),
    Orbital::new(3, S),
    Orbital::new(3, P),
    Orbital::new(4, S),
    Orbital::new(3, D),
    Orbital::new(4, P),
    Orbital::new(5, S),
    Orbital::new(4, D),
    Orbital::new(5, P),
    Orbital::new(6, S),
    Orbital::new(4, F),
    Orbital::new(5, D),
    Orbital::new(6, P),
    Orbital::new(7, S),
    Orbital::new(5, F),
    Orbital::new(6, D),
    Orbital::new(7, P),
];

// Ground states that deviate from strict Aufbau filling. Each entry pins
// the listed orbitals to exact counts; remaining electrons fill normally.
const EXCEPTIONS: [(u8, &[(Orbital, u8)]); 19] = [
    (24, &[(Orbital::new(3, D), 5), (Orbital::new(4, S), 1)]),
    (29, &[(Orbital::new(3, D), 10), (Orbital::new(4, S), 1)]),
    (41, &[(Orbital::new(4, D), 4), (Orbital::new(5, S), 1)]),
    (42, &[(Orbital::new(4, D), 5), (Orbital::new(5, S), 1)]),
    (44, &[(Orbital::new(4, D), 7), (Orbital::new(5, S), 1)]),
    (45, &[(Orbital::new(4, D), 8), (Orbital::new(5, S), 1)]),
    (46, &[(Orbital::new(4, D), 10), (Orbital::new(5, S), 0)]),
    (47, &[(Orbital::new(4, D), 10), (Orbital::new(5, S), 1)]),
    (57, &[(Orbital::new(5, D), 1), (Orbital::new(6, S), 2)]),
    (58, &[(Orbital::new(4, F), 1), (Orbital::new(5, D), 1), (Orbital::new(6, S), 2)]),
    (64, &[(Orbital::new(4, F), 7), (Orbital::new(5, D), 1), (Orbital::new(6, S), 2)]),
    (78, &[(Orbital::new(5, D), 9), (Orbital::new(6, S), 1)]),
    (79, &[(Orbital::new(5, D), 10), (Orbital::new(6, S), 1)]),
    (89, &[(Orbital::new(6, D), 1), (Orbital::new(7, S), 2)]),
    (90, &[(Orbital::new(5, F), 2), (Orbital::new(6, D), 0), (Orbital::new(7, S), 2)]),
    (91, &[(Orbital::new(5, F), 2), (Orbital::new(6, D), 1), (Orbital::new(7, S), 2)]),
    (92, &[(Orbital::new(5, F), 3), (Orbital::new(6, D), 1), (Orbital::new(7, S), 2)]),
    (93, &[(Orbital::new(5, F), 4), (Orbital::new(6, D), 1), (Orbital::new(7, S), 2)]),
    (96, &[(Orbital::new(5, F), 7), (Orbital::new(6, D), 1), (Orbital::new(7, S), 2)]),
];

fn exception_overrides(z: u8) -> &'static [(Orbital, u8)] {
    EXCEPTIONS
        .iter()
        .find(|(atomic_number, _)| *atomic_number == z)
        .map_or(&[], |(_, overrides)| overrides)
}

/// Electron count held by a single orbital.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub orbital: Orbital,
    pub electrons: u8,
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.orbital, superscript(self.electrons))
    }
}

/// Ground-state electron configuration of a neutral atom.
///
/// Entries are ordered by fill sequence, so the shell layout of the atom
/// can be rebuilt by walking them front to back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectronConfiguration {
    entries: Vec<Occupancy>,
}

impl ElectronConfiguration {
    /// Fills orbitals for a neutral atom with `z` electrons.
    ///
    /// Known exception elements get their pinned orbital counts merged in
    /// at the pinned orbital's position in the fill order; everything else
    /// follows plain Aufbau. `z` of zero yields an empty configuration.
    pub fn for_atomic_number(z: u8) -> Self {
        let overrides = exception_overrides(z);
        let pinned: u16 = overrides
            .iter()
            .map(|(_, electrons)| u16::from(*electrons))
            .sum();
        debug_assert!(u16::from(z) >= pinned);
        let mut budget = u16::from(z).saturating_sub(pinned);

        let mut entries = Vec::new();
        for orbital in AUFBAU_ORDER {
            if let Some((_, electrons)) = overrides.iter().find(|(pin, _)| *pin == orbital) {
                // Pinned entries are kept even when empty, e.g. palladium's 5s.
                entries.push(Occupancy {
                    orbital,
                    electrons: *electrons,
                });
                continue;
            }
            if budget == 0 {
                // Later orbitals may still be pinned, so keep scanning.
                continue;
            }
            let take = budget.min(u16::from(orbital.capacity()));
            entries.push(Occupancy {
                orbital,
                electrons: take as u8,
            });
            budget -= take;
        }
        Self { entries }
    }

    pub fn from_entries(entries: Vec<Occupancy>) -> Self {
        debug_assert!(
            entries
                .iter()
                .all(|entry| entry.electrons <= entry.orbital.capacity())
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[Occupancy] {
        &self.entries
    }

    /// Electrons held by `orbital`, or `None` when it never filled.
    pub fn get(&self, orbital: Orbital) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.orbital == orbital)
            .map(|entry| entry.electrons)
    }

    pub fn total_electrons(&self) -> u16 {
        self.entries
            .iter()
            .map(|entry| u16::from(entry.electrons))
            .sum()
    }

    /// Spectroscopic notation, e.g. `1s² 2s² 2p⁶` for neon. Empty orbitals
    /// are left out.
    pub fn notation(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.electrons > 0)
            .map(Occupancy::to_string)
            .collect();
        parts.join(" ")
    }
}

fn superscript(value: u8) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    // Occupancies never reach three digits.
    let mut out = String::new();
    if value >= 10 {
        out.push(DIGITS[usize::from(value / 10)]);
    }
    out.push(DIGITS[usize::from(value % 10)]);
    out
}
