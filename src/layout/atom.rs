use crate::chem::configuration::ElectronConfiguration;
use crate::chem::element::Element;
use crate::layout::nucleus::Nucleus;
use crate::layout::orbits::{Orbit, OrbitGenerator};
use serde::Serialize;

/// Everything a renderer needs to draw one element's atom.
#[derive(Clone, Debug, Serialize)]
pub struct AtomModel {
    element: Element,
    configuration: ElectronConfiguration,
    orbits: Vec<Orbit>,
    nucleus: Nucleus,
}

impl AtomModel {
    /// Assembles the neutral atom: protons = atomic number, neutrons from
    /// the mass estimate, one electron per unit of charge.
    pub fn generate(element: Element, generator: &mut OrbitGenerator) -> Self {
        let configuration = ElectronConfiguration::for_atomic_number(element.atomic_number);
        let orbits = generator.orbits(&configuration);
        let nucleus = Nucleus::layout(element.proton_count(), element.neutron_estimate());

        Self {
            element,
            configuration,
            orbits,
            nucleus,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn configuration(&self) -> &ElectronConfiguration {
        &self.configuration
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    pub fn nucleus(&self) -> &Nucleus {
        &self.nucleus
    }
}
