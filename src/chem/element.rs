use crate::chem::category::{Category, Classification};
use crate::chem::orbital::Subshell;
use crate::chem::table::ELEMENTS;
use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

// Stand-in mass for elements without a standard atomic weight.
const MASS_ESTIMATE_SLOPE: f64 = 1.5;
const MASS_ESTIMATE_OFFSET: f64 = 10.0;

/// State of matter at room temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateOfMatter {
    Solid,
    Liquid,
    Gas,
}

impl StateOfMatter {
    pub const fn label(self) -> &'static str {
        match self {
            StateOfMatter::Solid => "Solid",
            StateOfMatter::Liquid => "Liquid",
            StateOfMatter::Gas => "Gas",
        }
    }
}

impl fmt::Display for StateOfMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Basic metadata describing a chemical element.
///
/// `atomic_mass` is `None` for elements without a standard atomic weight;
/// `group` is `None` for the lanthanide and actinide series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_mass: Option<f64>,
    pub group: Option<u8>,
    pub period: u8,
    pub block: Subshell,
    pub category: Category,
}

impl Element {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        atomic_mass: Option<f64>,
        group: Option<u8>,
        period: u8,
        block: Subshell,
        category: Category,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            atomic_mass,
            group,
            period,
            block,
            category,
        }
    }

    pub fn by_atomic_number(z: u8) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.atomic_number == z)
            .cloned()
    }

    pub fn by_symbol(symbol: &str) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.symbol == symbol)
            .cloned()
    }

    pub fn all() -> &'static [Element] {
        &ELEMENTS
    }

    /// Standard atomic weight, or the linear estimate when none exists.
    pub fn mass_or_estimate(&self) -> f64 {
        self.atomic_mass.unwrap_or_else(|| self.estimated_mass())
    }

    fn estimated_mass(&self) -> f64 {
        MASS_ESTIMATE_SLOPE * f64::from(self.atomic_number) + MASS_ESTIMATE_OFFSET
    }

    /// Rough neutron count: mass minus proton count, rounded.
    pub fn neutron_estimate(&self) -> usize {
        let neutrons = (self.mass_or_estimate() - f64::from(self.atomic_number)).round();
        neutrons.max(0.0) as usize
    }

    pub fn proton_count(&self) -> usize {
        usize::from(self.atomic_number)
    }

    /// Electron count of the neutral atom.
    pub fn electron_count(&self) -> usize {
        usize::from(self.atomic_number)
    }

    /// Crude valence-electron count derived from the group number.
    pub fn valence_estimate(&self) -> u8 {
        match self.group {
            Some(group @ 1..=2) => group,
            Some(group @ 13..=18) => group - 10,
            Some(group) => group % 10,
            None => (self.atomic_number % 8).max(1),
        }
    }

    pub fn state_at_room_temp(&self) -> StateOfMatter {
        match self.symbol {
            "Hg" | "Br" => StateOfMatter::Liquid,
            "H" | "N" | "O" | "F" | "Cl" => StateOfMatter::Gas,
            _ if self.category == Category::NobleGas => StateOfMatter::Gas,
            _ => StateOfMatter::Solid,
        }
    }

    pub fn classification(&self) -> Classification {
        self.category.classification()
    }

    pub fn color(&self) -> Rgb {
        self.category.color()
    }

    /// Elements beyond uranium are lab-made only.
    pub fn is_synthetic(&self) -> bool {
        self.atomic_number > 92
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_atomic_number_once() {
        assert_eq!(Element::all().len(), 118);
        for (index, element) in Element::all().iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number), index + 1);
        }
    }

    #[test]
    fn lookups_find_known_elements() {
        let gold = Element::by_atomic_number(79).unwrap();
        assert_eq!(gold.symbol, "Au");
        assert_eq!(gold.name, "Gold");

        let iron = Element::by_symbol("Fe").unwrap();
        assert_eq!(iron.atomic_number, 26);

        assert!(Element::by_atomic_number(0).is_none());
        assert!(Element::by_atomic_number(119).is_none());
        assert!(Element::by_symbol("Xx").is_none());
    }

    #[test]
    fn mass_falls_back_to_estimate() {
        let technetium = Element::by_atomic_number(43).unwrap();
        assert_eq!(technetium.atomic_mass, None);
        assert!((technetium.mass_or_estimate() - 74.5).abs() < 1e-9);

        let carbon = Element::by_atomic_number(6).unwrap();
        assert!((carbon.mass_or_estimate() - 12.011).abs() < 1e-9);
    }

    #[test]
    fn neutron_estimates() {
        let hydrogen = Element::by_atomic_number(1).unwrap();
        assert_eq!(hydrogen.neutron_estimate(), 0);

        let carbon = Element::by_atomic_number(6).unwrap();
        assert_eq!(carbon.neutron_estimate(), 6);

        // 1.5 * 43 + 10 - 43 = 31.5, rounds away from zero
        let technetium = Element::by_atomic_number(43).unwrap();
        assert_eq!(technetium.neutron_estimate(), 32);
    }

    #[test]
    fn valence_estimates_by_group() {
        assert_eq!(Element::by_symbol("Na").unwrap().valence_estimate(), 1);
        assert_eq!(Element::by_symbol("C").unwrap().valence_estimate(), 4);
        assert_eq!(Element::by_symbol("Fe").unwrap().valence_estimate(), 8);
        // group 10 modulo 10
        assert_eq!(Element::by_symbol("Ni").unwrap().valence_estimate(), 0);
        // groupless lanthanide: max(1, 58 % 8)
        assert_eq!(Element::by_symbol("Ce").unwrap().valence_estimate(), 2);
    }

    #[test]
    fn states_at_room_temperature() {
        assert_eq!(
            Element::by_symbol("Hg").unwrap().state_at_room_temp(),
            StateOfMatter::Liquid
        );
        assert_eq!(
            Element::by_symbol("Br").unwrap().state_at_room_temp(),
            StateOfMatter::Liquid
        );
        assert_eq!(
            Element::by_symbol("O").unwrap().state_at_room_temp(),
            StateOfMatter::Gas
        );
        assert_eq!(
            Element::by_symbol("Xe").unwrap().state_at_room_temp(),
            StateOfMatter::Gas
        );
        assert_eq!(
            Element::by_symbol("Fe").unwrap().state_at_room_temp(),
            StateOfMatter::Solid
        );
    }

    #[test]
    fn classification_follows_category() {
        assert_eq!(
            Element::by_symbol("Si").unwrap().classification(),
            Classification::Metalloid
        );
        assert_eq!(
            Element::by_symbol("Ce").unwrap().classification(),
            Classification::Metal
        );
        assert_eq!(
            Element::by_symbol("Cl").unwrap().classification(),
            Classification::Nonmetal
        );
    }

    #[test]
    fn synthetic_cutoff_is_uranium() {
        assert!(!Element::by_symbol("U").unwrap().is_synthetic());
        assert!(Element::by_symbol("Np").unwrap().is_synthetic());
    }

    #[test]
    fn groups_absent_only_for_the_two_series() {
        for element in Element::all() {
            let in_series = matches!(element.category, Category::Lanthanide | Category::Actinide);
            assert_eq!(element.group.is_none(), in_series, "Z={}", element.atomic_number);
        }
    }
}
