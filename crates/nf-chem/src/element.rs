//! Chemical elements used for reporting and molecular-weight bookkeeping.

use serde::{Deserialize, Serialize};

/// Elements appearing in the nutrient salts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    H,
    B,
    C,
    N,
    O,
    Na,
    Mg,
    Si,
    P,
    S,
    Cl,
    K,
    Ca,
    Mn,
    Fe,
    Cu,
    Zn,
    Mo,
}

impl Element {
    pub const ALL: [Element; 18] = [
        Element::H,
        Element::B,
        Element::C,
        Element::N,
        Element::O,
        Element::Na,
        Element::Mg,
        Element::Si,
        Element::P,
        Element::S,
        Element::Cl,
        Element::K,
        Element::Ca,
        Element::Mn,
        Element::Fe,
        Element::Cu,
        Element::Zn,
        Element::Mo,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Mn => "Mn",
            Element::Fe => "Fe",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Mo => "Mo",
        }
    }

    /// Standard atomic weight [g/mol], IUPAC 2021.
    ///
    /// S uses 32.065, the midpoint of the IUPAC interval, to match PubChem.
    pub fn atomic_weight(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::B => 10.81,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::Na => 22.990,
            Element::Mg => 24.305,
            Element::Si => 28.085,
            Element::P => 30.974,
            Element::S => 32.065,
            Element::Cl => 35.45,
            Element::K => 39.098,
            Element::Ca => 40.078,
            Element::Mn => 54.938,
            Element::Fe => 55.845,
            Element::Cu => 63.546,
            Element::Zn => 65.38,
            Element::Mo => 95.95,
        }
    }
}

impl std::str::FromStr for Element {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Element::ALL
            .iter()
            .copied()
            .find(|e| e.symbol().eq_ignore_ascii_case(s))
            .ok_or("unknown element")
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_weights_are_positive() {
        for e in Element::ALL {
            assert!(e.atomic_weight() > 0.0, "{e}");
        }
    }

    #[test]
    fn symbol_roundtrip() {
        for e in Element::ALL {
            assert_eq!(e.symbol().parse::<Element>().unwrap(), e);
        }
        assert_eq!("na".parse::<Element>().unwrap(), Element::Na);
        assert!("Xx".parse::<Element>().is_err());
    }

    #[test]
    fn water_molar_mass_matches_catalog_comment() {
        let h2o = 2.0 * Element::H.atomic_weight() + Element::O.atomic_weight();
        assert!((h2o - 18.015).abs() < 1e-9);
    }
}
