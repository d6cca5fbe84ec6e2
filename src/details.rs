use crate::chem::element::Element;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The remote payload could not be parsed.
#[derive(Debug, Error)]
#[error("malformed element details payload: {0}")]
pub struct DetailsError(#[from] serde_json::Error);

/// Extended per-element properties, either parsed from a remote payload
/// or synthesized from the reference record. Every non-identity field is
/// optional; consumers render absent values as "N/A".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDetails {
    pub atomic_number: u8,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub atomic_mass: Option<f64>,
    #[serde(default)]
    pub group: Option<u8>,
    #[serde(default)]
    pub period: Option<u8>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub protons: Option<u32>,
    #[serde(default)]
    pub neutrons: Option<u32>,
    #[serde(default)]
    pub electrons: Option<u32>,
    #[serde(default)]
    pub melting_point: Option<f64>,
    #[serde(default)]
    pub boiling_point: Option<f64>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub electronegativity: Option<f64>,
    #[serde(default)]
    pub ionization_energy: Option<f64>,
    #[serde(default)]
    pub atomic_radius: Option<f64>,
}

impl ElementDetails {
    /// Parses a remote detail payload. Unknown fields are ignored so the
    /// payload may carry more properties than this record tracks.
    pub fn from_json(payload: &str) -> Result<Self, DetailsError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Builds the local stand-in used when no remote record is available.
    /// Group-derived estimates stay absent for the groupless series.
    pub fn synthesize(element: &Element) -> Self {
        let z = element.atomic_number;
        let group = element.group.map(f64::from);
        Self {
            atomic_number: z,
            symbol: element.symbol.to_string(),
            name: element.name.to_string(),
            atomic_mass: Some(element.mass_or_estimate()),
            group: element.group,
            period: Some(element.period),
            block: Some(element.block.to_string()),
            category: Some(element.category.label().to_string()),
            protons: Some(u32::from(z)),
            neutrons: Some(element.neutron_estimate() as u32),
            electrons: Some(u32::from(z)),
            melting_point: group.map(|g| g * 50.0),
            boiling_point: group.map(|g| g * 50.0 + 100.0),
            density: Some(f64::from(z) * 0.5),
            electronegativity: group.map(|g| {
                if g <= 2.0 { g * 0.5 } else { (18.0 - g) * 0.3 }
            }),
            ionization_energy: Some(f64::from(z) * 100.0),
            atomic_radius: group.map(|g| f64::from(element.period) * 20.0 + g * 5.0),
        }
    }

    /// Prefers the remote record, synthesizing a stand-in otherwise.
    pub fn resolve(remote: Option<Self>, element: &Element) -> Self {
        match remote {
            Some(details) => details,
            None => {
                debug!(
                    "no remote details for element {}, synthesizing defaults",
                    element.atomic_number
                );
                Self::synthesize(element)
            }
        }
    }
}
