pub mod atom;
pub mod nucleus;
pub mod orbits;

pub use atom::AtomModel;
pub use nucleus::{Nucleon, NucleonKind, Nucleus};
pub use orbits::{ElectronPlacement, Orbit, OrbitGenerator, SHELL_COLORS, shell_color};
