//! Tracked ion definitions.

use crate::element::Element;
use crate::error::ChemError;
use serde::{Deserialize, Serialize};

/// Dissolved species tracked in a nutrient solution.
///
/// Mass concentrations are reported as the reporting element (nitrate as N,
/// sulfate as S, ...), never as the full ion mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ion {
    /// Nitrate (NO₃⁻), reported as N
    NO3,
    /// Ammonium (NH₄⁺), reported as N
    NH4,
    /// Dihydrogen phosphate (H₂PO₄⁻), reported as P
    H2PO4,
    /// Potassium (K⁺)
    K,
    /// Calcium (Ca²⁺)
    Ca,
    /// Magnesium (Mg²⁺)
    Mg,
    /// Sulfate (SO₄²⁻), reported as S
    SO4,
    /// Iron (Fe²⁺, chelated)
    Fe,
    /// Manganese (Mn²⁺)
    Mn,
    /// Boron (B(OH)₃)
    B,
    /// Zinc (Zn²⁺)
    Zn,
    /// Copper (Cu²⁺)
    Cu,
    /// Molybdenum (MoO₄²⁻)
    Mo,
    /// Sodium (Na⁺)
    Na,
    /// Chloride (Cl⁻)
    Cl,
    /// Silicon (H₄SiO₄, uncharged)
    Si,
}

impl Ion {
    /// Canonical reporting order.
    pub const ALL: [Ion; 16] = [
        Ion::NO3,
        Ion::NH4,
        Ion::H2PO4,
        Ion::K,
        Ion::Ca,
        Ion::Mg,
        Ion::SO4,
        Ion::Fe,
        Ion::Mn,
        Ion::B,
        Ion::Zn,
        Ion::Cu,
        Ion::Mo,
        Ion::Na,
        Ion::Cl,
        Ion::Si,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Ion::NO3 => "NO3",
            Ion::NH4 => "NH4",
            Ion::H2PO4 => "H2PO4",
            Ion::K => "K",
            Ion::Ca => "Ca",
            Ion::Mg => "Mg",
            Ion::SO4 => "SO4",
            Ion::Fe => "Fe",
            Ion::Mn => "Mn",
            Ion::B => "B",
            Ion::Zn => "Zn",
            Ion::Cu => "Cu",
            Ion::Mo => "Mo",
            Ion::Na => "Na",
            Ion::Cl => "Cl",
            Ion::Si => "Si",
        }
    }

    /// Position in [`Ion::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Label used in reports, naming the element the ppm value refers to.
    pub fn display_name(&self) -> &'static str {
        match self {
            Ion::NO3 => "N (NO3-)",
            Ion::NH4 => "N (NH4+)",
            Ion::H2PO4 => "P",
            Ion::K => "K",
            Ion::Ca => "Ca",
            Ion::Mg => "Mg",
            Ion::SO4 => "S (SO4 2-)",
            Ion::Fe => "Fe",
            Ion::Mn => "Mn",
            Ion::B => "B",
            Ion::Zn => "Zn",
            Ion::Cu => "Cu",
            Ion::Mo => "Mo",
            Ion::Na => "Na",
            Ion::Cl => "Cl",
            Ion::Si => "Si",
        }
    }

    /// Element whose mass the ppm concentration is expressed as.
    pub fn reporting_element(&self) -> Element {
        match self {
            Ion::NO3 | Ion::NH4 => Element::N,
            Ion::H2PO4 => Element::P,
            Ion::K => Element::K,
            Ion::Ca => Element::Ca,
            Ion::Mg => Element::Mg,
            Ion::SO4 => Element::S,
            Ion::Fe => Element::Fe,
            Ion::Mn => Element::Mn,
            Ion::B => Element::B,
            Ion::Zn => Element::Zn,
            Ion::Cu => Element::Cu,
            Ion::Mo => Element::Mo,
            Ion::Na => Element::Na,
            Ion::Cl => Element::Cl,
            Ion::Si => Element::Si,
        }
    }

    /// Atomic weight of the reporting element [g/mol].
    pub fn atomic_weight(&self) -> f64 {
        self.reporting_element().atomic_weight()
    }

    /// Absolute valence used for me/L. Zero marks an uncharged species.
    ///
    /// H₂PO₄⁻ is taken as monovalent at hydroponic pH, Fe as Fe²⁺ and B uses
    /// the agricultural convention of 3.
    pub fn valence(&self) -> u32 {
        match self {
            Ion::NO3 | Ion::NH4 | Ion::H2PO4 | Ion::K | Ion::Na | Ion::Cl => 1,
            Ion::Ca | Ion::Mg | Ion::SO4 | Ion::Fe | Ion::Mn | Ion::Zn | Ion::Cu | Ion::Mo => 2,
            Ion::B => 3,
            Ion::Si => 0,
        }
    }
}

impl std::str::FromStr for Ion {
    type Err = ChemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NO3" | "NITRATE" | "NO3-N" => Ok(Ion::NO3),
            "NH4" | "AMMONIUM" | "NH4-N" => Ok(Ion::NH4),
            "H2PO4" | "PHOSPHATE" | "P" => Ok(Ion::H2PO4),
            "K" | "POTASSIUM" => Ok(Ion::K),
            "CA" | "CALCIUM" => Ok(Ion::Ca),
            "MG" | "MAGNESIUM" => Ok(Ion::Mg),
            "SO4" | "SULFATE" | "S" => Ok(Ion::SO4),
            "FE" | "IRON" => Ok(Ion::Fe),
            "MN" | "MANGANESE" => Ok(Ion::Mn),
            "B" | "BORON" => Ok(Ion::B),
            "ZN" | "ZINC" => Ok(Ion::Zn),
            "CU" | "COPPER" => Ok(Ion::Cu),
            "MO" | "MOLYBDENUM" => Ok(Ion::Mo),
            "NA" | "SODIUM" => Ok(Ion::Na),
            "CL" | "CHLORIDE" => Ok(Ion::Cl),
            "SI" | "SILICON" => Ok(Ion::Si),
            _ => Err(ChemError::UnknownIon { key: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Ion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_index() {
        for (i, ion) in Ion::ALL.iter().enumerate() {
            assert_eq!(ion.index(), i);
        }
    }

    #[test]
    fn reporting_elements() {
        assert_eq!(Ion::NO3.reporting_element(), Element::N);
        assert_eq!(Ion::NH4.reporting_element(), Element::N);
        assert_eq!(Ion::H2PO4.reporting_element(), Element::P);
        assert_eq!(Ion::SO4.reporting_element(), Element::S);
        assert_eq!(Ion::K.atomic_weight(), 39.098);
    }

    #[test]
    fn valences() {
        assert_eq!(Ion::K.valence(), 1);
        assert_eq!(Ion::Ca.valence(), 2);
        assert_eq!(Ion::SO4.valence(), 2);
        assert_eq!(Ion::B.valence(), 3);
        assert_eq!(Ion::Si.valence(), 0);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("nitrate".parse::<Ion>().unwrap(), Ion::NO3);
        assert_eq!("ca".parse::<Ion>().unwrap(), Ion::Ca);
        assert_eq!(" Potassium ".parse::<Ion>().unwrap(), Ion::K);
        assert!(matches!(
            "Xe".parse::<Ion>(),
            Err(ChemError::UnknownIon { .. })
        ));
    }

    #[test]
    fn canonical_key_roundtrip() {
        for ion in Ion::ALL {
            assert_eq!(ion.key().parse::<Ion>().unwrap(), ion);
        }
    }

    #[test]
    fn serde_uses_key() {
        let json = serde_json::to_string(&Ion::H2PO4).unwrap();
        assert_eq!(json, "\"H2PO4\"");
        let ion: Ion = serde_json::from_str("\"SO4\"").unwrap();
        assert_eq!(ion, Ion::SO4);
    }
}
