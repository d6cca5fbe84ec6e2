use super::category::Category::*;
use super::element::Element;
use super::orbital::Subshell::{D, F, P, S};

// Mass is None where no standard atomic weight is defined; group is None
// through the lanthanide and actinide series.
pub(crate) const ELEMENTS: [Element; 118] = [
    Element::new(1, "H", "Hydrogen", Some(1.008), Some(1), 1, S, Nonmetal),
    Element::new(2, "He", "Helium", Some(4.0026), Some(18), 1, S, NobleGas),
    Element::new(3, "Li", "Lithium", Some(6.94), Some(1), 2, S, AlkaliMetal),
    Element::new(4, "Be", "Beryllium", Some(9.0122), Some(2), 2, S, AlkalineEarthMetal),
    Element::new(5, "B", "Boron", Some(10.81), Some(13), 2, P, Metalloid),
    Element::new(6, "C", "Carbon", Some(12.011), Some(14), 2, P, Nonmetal),
    Element::new(7, "N", "Nitrogen", Some(14.007), Some(15), 2, P, Nonmetal),
    Element::new(8, "O", "Oxygen", Some(15.999), Some(16), 2, P, Nonmetal),
    Element::new(9, "F", "Fluorine", Some(18.998), Some(17), 2, P, Halogen),
    Element::new(10, "Ne", "Neon", Some(20.180), Some(18), 2, P, NobleGas),
    Element::new(11, "Na", "Sodium", Some(22.990), Some(1), 3, S, AlkaliMetal),
    Element::new(12, "Mg", "Magnesium", Some(24.305), Some(2), 3, S, AlkalineEarthMetal),
    Element::new(13, "Al", "Aluminum", Some(26.982), Some(13), 3, P, PostTransitionMetal),
    Element::new(14, "Si", "Silicon", Some(28.085), Some(14), 3, P, Metalloid),
    Element::new(15, "P", "Phosphorus", Some(30.974), Some(15), 3, P, Nonmetal),
    Element::new(16, "S", "Sulfur", Some(32.06), Some(16), 3, P, Nonmetal),
    Element::new(17, "Cl", "Chlorine", Some(35.45), Some(17), 3, P, Halogen),
    Element::new(18, "Ar", "Argon", Some(39.948), Some(18), 3, P, NobleGas),
    Element::new(19, "K", "Potassium", Some(39.098), Some(1), 4, S, AlkaliMetal),
    Element::new(20, "Ca", "Calcium", Some(40.078), Some(2), 4, S, AlkalineEarthMetal),
    Element::new(21, "Sc", "Scandium", Some(44.956), Some(3), 4, D, TransitionMetal),
    Element::new(22, "Ti", "Titanium", Some(47.867), Some(4), 4, D, TransitionMetal),
    Element::new(23, "V", "Vanadium", Some(50.942), Some(5), 4, D, TransitionMetal),
    Element::new(24, "Cr", "Chromium", Some(51.996), Some(6), 4, D, TransitionMetal),
    Element::new(25, "Mn", "Manganese", Some(54.938), Some(7), 4, D, TransitionMetal),
    Element::new(26, "Fe", "Iron", Some(55.845), Some(8), 4, D, TransitionMetal),
    Element::new(27, "Co", "Cobalt", Some(58.933), Some(9), 4, D, TransitionMetal),
    Element::new(28, "Ni", "Nickel", Some(58.693), Some(10), 4, D, TransitionMetal),
    Element::new(29, "Cu", "Copper", Some(63.546), Some(11), 4, D, TransitionMetal),
    Element::new(30, "Zn", "Zinc", Some(65.38), Some(12), 4, D, TransitionMetal),
    Element::new(31, "Ga", "Gallium", Some(69.723), Some(13), 4, P, PostTransitionMetal),
    Element::new(32, "Ge", "Germanium", Some(72.630), Some(14), 4, P, Metalloid),
    Element::new(33, "As", "Arsenic", Some(74.922), Some(15), 4, P, Metalloid),
    Element::new(34, "Se", "Selenium", Some(78.971), Some(16), 4, P, Nonmetal),
    Element::new(35, "Br", "Bromine", Some(79.904), Some(17), 4, P, Halogen),
    Element::new(36, "Kr", "Krypton", Some(83.798), Some(18), 4, P, NobleGas),
    Element::new(37, "Rb", "Rubidium", Some(85.468), Some(1), 5, S, AlkaliMetal),
    Element::new(38, "Sr", "Strontium", Some(87.62), Some(2), 5, S, AlkalineEarthMetal),
    Element::new(39, "Y", "Yttrium", Some(88.906), Some(3), 5, D, TransitionMetal),
    Element::new(40, "Zr", "Zirconium", Some(91.224), Some(4), 5, D, TransitionMetal),
    Element::new(41, "Nb", "Niobium", Some(92.906), Some(5), 5, D, TransitionMetal),
    Element::new(42, "Mo", "Molybdenum", Some(95.95), Some(6), 5, D, TransitionMetal),
    Element::new(43, "Tc", "Technetium", None, Some(7), 5, D, TransitionMetal),
    Element::new(44, "Ru", "Ruthenium", Some(101.07), Some(8), 5, D, TransitionMetal),
    Element::new(45, "Rh", "Rhodium", Some(102.91), Some(9), 5, D, TransitionMetal),
    Element::new(46, "Pd", "Palladium", Some(106.42), Some(10), 5, D, TransitionMetal),
    Element::new(47, "Ag", "Silver", Some(107.87), Some(11), 5, D, TransitionMetal),
    Element::new(48, "Cd", "Cadmium", Some(112.41), Some(12), 5, D, TransitionMetal),
    Element::new(49, "In", "Indium", Some(114.82), Some(13), 5, P, PostTransitionMetal),
    Element::new(50, "Sn", "Tin", Some(118.71), Some(14), 5, P, PostTransitionMetal),
    Element::new(51, "Sb", "Antimony", Some(121.76), Some(15), 5, P, Metalloid),
    Element::new(52, "Te", "Tellurium", Some(127.60), Some(16), 5, P, Metalloid),
    Element::new(53, "I", "Iodine", Some(126.90), Some(17), 5, P, Halogen),
    Element::new(54, "Xe", "Xenon", Some(131.29), Some(18), 5, P, NobleGas),
    Element::new(55, "Cs", "Cesium", Some(132.91), Some(1), 6, S, AlkaliMetal),
    Element::new(56, "Ba", "Barium", Some(137.33), Some(2), 6, S, AlkalineEarthMetal),
    Element::new(57, "La", "Lanthanum", Some(138.91), None, 6, F, Lanthanide),
    Element::new(58, "Ce", "Cerium", Some(140.12), None, 6, F, Lanthanide),
    Element::new(59, "Pr", "Praseodymium", Some(140.91), None, 6, F, Lanthanide),
    Element::new(60, "Nd", "Neodymium", Some(144.24), None, 6, F, Lanthanide),
    Element::new(61, "Pm", "Promethium", None, None, 6, F, Lanthanide),
    Element::new(62, "Sm", "Samarium", Some(150.36), None, 6, F, Lanthanide),
    Element::new(63, "Eu", "Europium", Some(151.96), None, 6, F, Lanthanide),
    Element::new(64, "Gd", "Gadolinium", Some(157.25), None, 6, F, Lanthanide),
    Element::new(65, "Tb", "Terbium", Some(158.93), None, 6, F, Lanthanide),
    Element::new(66, "Dy", "Dysprosium", Some(162.50), None, 6, F, Lanthanide),
    Element::new(67, "Ho", "Holmium", Some(164.93), None, 6, F, Lanthanide),
    Element::new(68, "Er", "Erbium", Some(167.26), None, 6, F, Lanthanide),
    Element::new(69, "Tm", "Thulium", Some(168.93), None, 6, F, Lanthanide),
    Element::new(70, "Yb", "Ytterbium", Some(173.05), None, 6, F, Lanthanide),
    Element::new(71, "Lu", "Lutetium", Some(174.97), None, 6, F, Lanthanide),
    Element::new(72, "Hf", "Hafnium", Some(178.49), Some(4), 6, D, TransitionMetal),
    Element::new(73, "Ta", "Tantalum", Some(180.95), Some(5), 6, D, TransitionMetal),
    Element::new(74, "W", "Tungsten", Some(183.84), Some(6), 6, D, TransitionMetal),
    Element::new(75, "Re", "Rhenium", Some(186.21), Some(7), 6, D, TransitionMetal),
    Element::new(76, "Os", "Osmium", Some(190.23), Some(8), 6, D, TransitionMetal),
    Element::new(77, "Ir", "Iridium", Some(192.22), Some(9), 6, D, TransitionMetal),
    Element::new(78, "Pt", "Platinum", Some(195.08), Some(10), 6, D, TransitionMetal),
    Element::new(79, "Au", "Gold", Some(196.97), Some(11), 6, D, TransitionMetal),
    Element::new(80, "Hg", "Mercury", Some(200.59), Some(12), 6, D, TransitionMetal),
    Element::new(81, "Tl", "Thallium", Some(204.38), Some(13), 6, P, PostTransitionMetal),
    Element::new(82, "Pb", "Lead", Some(207.2), Some(14), 6, P, PostTransitionMetal),
    Element::new(83, "Bi", "Bismuth", Some(208.98), Some(15), 6, P, PostTransitionMetal),
    Element::new(84, "Po", "Polonium", None, Some(16), 6, P, PostTransitionMetal),
    Element::new(85, "At", "Astatine", None, Some(17), 6, P, Halogen),
    Element::new(86, "Rn", "Radon", None, Some(18), 6, P, NobleGas),
    Element::new(87, "Fr", "Francium", None, Some(1), 7, S, AlkaliMetal),
    Element::new(88, "Ra", "Radium", None, Some(2), 7, S, AlkalineEarthMetal),
    Element::new(89, "Ac", "Actinium", None, None, 7, F, Actinide),
    Element::new(90, "Th", "Thorium", Some(232.04), None, 7, F, Actinide),
    Element::new(91, "Pa", "Protactinium", Some(231.04), None, 7, F, Actinide),
    Element::new(92, "U", "Uranium", Some(238.03), None, 7, F, Actinide),
    Element::new(93, "Np", "Neptunium", None, None, 7, F, Actinide),
    Element::new(94, "Pu", "Plutonium", None, None, 7, F, Actinide),
    Element::new(95, "Am", "Americium", None, None, 7, F, Actinide),
    Element::new(96, "Cm", "Curium", None, None, 7, F, Actinide),
    Element::new(97, "Bk", "Berkelium", None, None, 7, F, Actinide),
    Element::new(98, "Cf", "Californium", None, None, 7, F, Actinide),
    Element::new(99, "Es", "Einsteinium", None, None, 7, F, Actinide),
    Element::new(100, "Fm", "Fermium", None, None, 7, F, Actinide),
    Element::new(101, "Md", "Mendelevium", None, None, 7, F, Actinide),
    Element::new(102, "No", "Nobelium", None, None, 7, F, Actinide),
    Element::new(103, "Lr", "Lawrencium", None, None, 7, F, Actinide),
    Element::new(104, "Rf", "Rutherfordium", None, Some(4), 7, D, TransitionMetal),
    Element::new(105, "Db", "Dubnium", None, Some(5), 7, D, TransitionMetal),
    Element::new(106, "Sg", "Seaborgium", None, Some(6), 7, D, TransitionMetal),
    Element::new(107, "Bh", "Bohrium", None, Some(7), 7, D, TransitionMetal),
    Element::new(108, "Hs", "Hassium", None, Some(8), 7, D, TransitionMetal),
    Element::new(109, "Mt", "Meitnerium", None, Some(9), 7, D, TransitionMetal),
    Element::new(110, "Ds", "Darmstadtium", None, Some(10), 7, D, TransitionMetal),
    Element::new(111, "Rg", "Roentgenium", None, Some(11), 7, D, TransitionMetal),
    Element::new(112, "Cn", "Copernicium", None, Some(12), 7, D, TransitionMetal),
    Element::new(113, "Nh", "Nihonium", None, Some(13), 7, P, PostTransitionMetal),
    Element::new(114, "Fl", "Flerovium", None, Some(14), 7, P, PostTransitionMetal),
    Element::new(115, "Mc", "Moscovium", None, Some(15), 7, P, PostTransitionMetal),
    Element::new(116, "Lv", "Livermorium", None, Some(16), 7, P, PostTransitionMetal),
    Element::new(117, "Ts", "Tennessine", None, Some(17), 7, P, Halogen),
    Element::new(118, "Og", "Oganesson", None, Some(18), 7, P, NobleGas),
];
