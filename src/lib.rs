//! Computational core for an educational periodic-table app: the element
//! reference table, electron configurations, 3D atom layout data, quiz
//! generation, and element detail/comparison helpers. Rendering and
//! networking live in the host application.

pub mod chem;
pub mod color;
pub mod compare;
pub mod constants;
pub mod details;
pub mod layout;
pub mod quiz;

pub use chem::{ElectronConfiguration, Element, Orbital, Subshell};
pub use color::Rgb;
pub use details::ElementDetails;
pub use layout::{AtomModel, Nucleus, Orbit, OrbitGenerator};
pub use quiz::{QuizGenerator, QuizQuestion, QuizSession};
