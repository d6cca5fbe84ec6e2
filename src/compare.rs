use crate::details::ElementDetails;
use serde::Serialize;

/// Outcome of one property row. Numeric rows use greater/lesser/equal;
/// textual rows use equal/different; a missing side always reads equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Greater,
    Lesser,
    Equal,
    Different,
}

/// One row of a side-by-side comparison, with display-ready values and,
/// for differing numeric rows, the left-minus-right delta.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyComparison {
    pub label: &'static str,
    pub left: String,
    pub right: String,
    pub verdict: Verdict,
    pub delta: Option<f64>,
}

enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    fn display(&self) -> String {
        match self {
            Value::Number(number) => number.to_string(),
            Value::Text(text) => text.clone(),
            Value::Missing => "N/A".to_string(),
        }
    }
}

/// Compares two detail records over the fixed property row set, in the
/// order the comparison table displays them.
pub fn compare(left: &ElementDetails, right: &ElementDetails) -> Vec<PropertyComparison> {
    let number = |value: Option<f64>| value.map_or(Value::Missing, Value::Number);
    let count = |value: Option<u32>| number(value.map(f64::from));
    let small = |value: Option<u8>| number(value.map(f64::from));
    let text = |value: Option<&str>| {
        value.map_or(Value::Missing, |inner| Value::Text(inner.to_string()))
    };

    vec![
        row(
            "Atomic Number",
            Value::Number(f64::from(left.atomic_number)),
            Value::Number(f64::from(right.atomic_number)),
        ),
        row(
            "Symbol",
            Value::Text(left.symbol.clone()),
            Value::Text(right.symbol.clone()),
        ),
        row(
            "Name",
            Value::Text(left.name.clone()),
            Value::Text(right.name.clone()),
        ),
        row(
            "Atomic Mass (amu)",
            number(left.atomic_mass),
            number(right.atomic_mass),
        ),
        row("Group", small(left.group), small(right.group)),
        row("Period", small(left.period), small(right.period)),
        row("Block", text(left.block.as_deref()), text(right.block.as_deref())),
        row(
            "Category",
            text(left.category.as_deref()),
            text(right.category.as_deref()),
        ),
        row("Protons", count(left.protons), count(right.protons)),
        row("Neutrons", count(left.neutrons), count(right.neutrons)),
        row("Electrons", count(left.electrons), count(right.electrons)),
        row(
            "Melting Point (°C)",
            number(left.melting_point),
            number(right.melting_point),
        ),
        row(
            "Boiling Point (°C)",
            number(left.boiling_point),
            number(right.boiling_point),
        ),
        row("Density (g/cm³)", number(left.density), number(right.density)),
        row(
            "Electronegativity",
            number(left.electronegativity),
            number(right.electronegativity),
        ),
        row(
            "Ionization Energy (kJ/mol)",
            number(left.ionization_energy),
            number(right.ionization_energy),
        ),
        row(
            "Atomic Radius (pm)",
            number(left.atomic_radius),
            number(right.atomic_radius),
        ),
    ]
}

fn row(label: &'static str, left: Value, right: Value) -> PropertyComparison {
    let verdict = match (&left, &right) {
        (Value::Missing, _) | (_, Value::Missing) => Verdict::Equal,
        (Value::Number(a), Value::Number(b)) => {
            if a > b {
                Verdict::Greater
            } else if a < b {
                Verdict::Lesser
            } else {
                Verdict::Equal
            }
        }
        (Value::Text(a), Value::Text(b)) => {
            if a == b {
                Verdict::Equal
            } else {
                Verdict::Different
            }
        }
        _ => Verdict::Different,
    };
    let delta = match (&left, &right) {
        (Value::Number(a), Value::Number(b)) if a != b => Some(a - b),
        _ => None,
    };
    PropertyComparison {
        label,
        left: left.display(),
        right: right.display(),
        verdict,
        delta,
    }
}
