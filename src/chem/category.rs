use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten category labels used for table coloring and quiz prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Alkali Metal")]
    AlkaliMetal,
    #[serde(rename = "Alkaline Earth Metal")]
    AlkalineEarthMetal,
    #[serde(rename = "Transition Metal")]
    TransitionMetal,
    #[serde(rename = "Post-transition Metal")]
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    #[serde(rename = "Noble Gas")]
    NobleGas,
    Lanthanide,
    Actinide,
}

pub const CATEGORIES: [Category; 10] = [
    Category::AlkaliMetal,
    Category::AlkalineEarthMetal,
    Category::TransitionMetal,
    Category::PostTransitionMetal,
    Category::Metalloid,
    Category::Nonmetal,
    Category::Halogen,
    Category::NobleGas,
    Category::Lanthanide,
    Category::Actinide,
];

/// Fill color for grid cells holding no element.
pub const EMPTY_CELL_COLOR: Rgb = Rgb::new(0xE0, 0xE0, 0xE0);

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarthMetal => "Alkaline Earth Metal",
            Category::TransitionMetal => "Transition Metal",
            Category::PostTransitionMetal => "Post-transition Metal",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Category::AlkaliMetal => Rgb::new(0xFF, 0x8A, 0x95),
            Category::AlkalineEarthMetal => Rgb::new(0xFF, 0xB7, 0x4D),
            Category::TransitionMetal => Rgb::new(0x64, 0xB5, 0xF6),
            Category::PostTransitionMetal => Rgb::new(0xB0, 0xBE, 0xC5),
            Category::Metalloid => Rgb::new(0xFF, 0xD5, 0x4F),
            Category::Nonmetal => Rgb::new(0x81, 0xC7, 0x84),
            Category::Halogen => Rgb::new(0xFF, 0xF1, 0x76),
            Category::NobleGas => Rgb::new(0x4D, 0xD0, 0xE1),
            Category::Lanthanide => Rgb::new(0xBA, 0x68, 0xC8),
            Category::Actinide => Rgb::new(0xF0, 0x62, 0x92),
        }
    }

    pub const fn classification(self) -> Classification {
        match self {
            Category::AlkaliMetal
            | Category::AlkalineEarthMetal
            | Category::TransitionMetal
            | Category::PostTransitionMetal
            | Category::Lanthanide
            | Category::Actinide => Classification::Metal,
            Category::Metalloid => Classification::Metalloid,
            Category::Nonmetal | Category::Halogen | Category::NobleGas => {
                Classification::Nonmetal
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Broad metal / metalloid / nonmetal split of the categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Metal,
    Metalloid,
    Nonmetal,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Metal => "Metal",
            Classification::Metalloid => "Metalloid",
            Classification::Nonmetal => "Nonmetal",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_color() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(Category::NobleGas.to_string(), "Noble Gas");
        assert_eq!(Category::PostTransitionMetal.to_string(), "Post-transition Metal");
    }

    #[test]
    fn classification_buckets() {
        assert_eq!(Category::Lanthanide.classification(), Classification::Metal);
        assert_eq!(Category::Metalloid.classification(), Classification::Metalloid);
        assert_eq!(Category::Halogen.classification(), Classification::Nonmetal);
        assert_eq!(Category::NobleGas.classification(), Classification::Nonmetal);
    }
}
