pub mod category;
pub mod configuration;
pub mod element;
pub mod facts;
pub mod grid;
pub mod orbital;

mod table;

pub use category::{CATEGORIES, Category, Classification};
pub use configuration::{AUFBAU_ORDER, ElectronConfiguration, Occupancy};
pub use element::{Element, StateOfMatter};
pub use orbital::{Orbital, ParseOrbitalError, Subshell};
