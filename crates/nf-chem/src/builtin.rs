//! Built-in chemical table.
//!
//! Molecular weights are computed from the IUPAC 2021 atomic weights in
//! [`Element`](crate::Element) (H₂O = 18.015).

use crate::chemical::{Chemical, ChemicalCategory, IonContribution};
use crate::ion::Ion;

/// Static catalog record; converted into an owned [`Chemical`] on load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinChemical {
    pub id: &'static str,
    pub formula: &'static str,
    pub name: &'static str,
    pub molecular_weight: f64,
    pub category: ChemicalCategory,
    pub ions: &'static [(Ion, f64)],
}

impl BuiltinChemical {
    pub fn to_chemical(&self) -> Chemical {
        Chemical {
            id: self.id.to_string(),
            formula: self.formula.to_string(),
            name: self.name.to_string(),
            molecular_weight: self.molecular_weight,
            category: self.category,
            ions: self
                .ions
                .iter()
                .map(|&(ion, coefficient)| IonContribution { ion, coefficient })
                .collect(),
        }
    }
}

pub const BUILTIN_CHEMICALS: [BuiltinChemical; 32] = [
    // Macro salts
    BuiltinChemical {
        id: "calcium-nitrate",
        formula: "Ca(NO₃)₂·4H₂O",
        name: "Calcium Nitrate Tetrahydrate",
        molecular_weight: 236.146,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Ca, 1.0), (Ion::NO3, 2.0)],
    },
    BuiltinChemical {
        id: "calcium-nitrate-anhydrous",
        formula: "Ca(NO₃)₂",
        name: "Calcium Nitrate (Anhydrous)",
        molecular_weight: 164.086,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Ca, 1.0), (Ion::NO3, 2.0)],
    },
    BuiltinChemical {
        id: "potassium-nitrate",
        formula: "KNO₃",
        name: "Potassium Nitrate",
        molecular_weight: 101.102,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::K, 1.0), (Ion::NO3, 1.0)],
    },
    BuiltinChemical {
        id: "monopotassium-phosphate",
        formula: "KH₂PO₄",
        name: "Monopotassium Phosphate",
        molecular_weight: 136.084,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::K, 1.0), (Ion::H2PO4, 1.0)],
    },
    BuiltinChemical {
        id: "monoammonium-phosphate",
        formula: "NH₄H₂PO₄",
        name: "Monoammonium Phosphate (MAP)",
        molecular_weight: 115.025,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::NH4, 1.0), (Ion::H2PO4, 1.0)],
    },
    BuiltinChemical {
        id: "monocalcium-phosphate",
        formula: "Ca(H₂PO₄)₂·H₂O",
        name: "Monocalcium Phosphate Monohydrate",
        molecular_weight: 252.065,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Ca, 1.0), (Ion::H2PO4, 2.0)],
    },
    BuiltinChemical {
        id: "magnesium-sulfate",
        formula: "MgSO₄·7H₂O",
        name: "Magnesium Sulfate Heptahydrate (Epsom Salt)",
        molecular_weight: 246.471,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Mg, 1.0), (Ion::SO4, 1.0)],
    },
    BuiltinChemical {
        id: "magnesium-sulfate-anhydrous",
        formula: "MgSO₄",
        name: "Magnesium Sulfate (Anhydrous)",
        molecular_weight: 120.366,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Mg, 1.0), (Ion::SO4, 1.0)],
    },
    BuiltinChemical {
        id: "potassium-sulfate",
        formula: "K₂SO₄",
        name: "Potassium Sulfate",
        molecular_weight: 174.257,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::K, 2.0), (Ion::SO4, 1.0)],
    },
    BuiltinChemical {
        id: "potassium-chloride",
        formula: "KCl",
        name: "Potassium Chloride",
        molecular_weight: 74.548,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::K, 1.0), (Ion::Cl, 1.0)],
    },
    BuiltinChemical {
        id: "calcium-chloride",
        formula: "CaCl₂",
        name: "Calcium Chloride (Anhydrous)",
        molecular_weight: 110.978,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Ca, 1.0), (Ion::Cl, 2.0)],
    },
    BuiltinChemical {
        id: "calcium-chloride-dihydrate",
        formula: "CaCl₂·2H₂O",
        name: "Calcium Chloride Dihydrate",
        molecular_weight: 147.008,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Ca, 1.0), (Ion::Cl, 2.0)],
    },
    BuiltinChemical {
        id: "magnesium-nitrate",
        formula: "Mg(NO₃)₂·6H₂O",
        name: "Magnesium Nitrate Hexahydrate",
        molecular_weight: 256.403,
        category: ChemicalCategory::Macro,
        ions: &[(Ion::Mg, 1.0), (Ion::NO3, 2.0)],
    },
    // Micro salts
    BuiltinChemical {
        id: "fe-edta",
        formula: "C₁₀H₁₂FeN₂NaO₈·3H₂O",
        name: "Sodium Iron EDTA Trihydrate",
        molecular_weight: 421.092,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Fe, 1.0), (Ion::Na, 1.0)],
    },
    BuiltinChemical {
        id: "fe-dtpa",
        formula: "C₁₄H₁₈FeN₃NaO₁₀",
        name: "Sodium Iron(III) DTPA",
        molecular_weight: 467.144,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Fe, 1.0), (Ion::Na, 1.0)],
    },
    BuiltinChemical {
        id: "ferric-tartrate",
        formula: "C₁₂H₁₂Fe₂O₁₈",
        name: "Ferric Tartrate",
        molecular_weight: 555.900,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Fe, 2.0)],
    },
    BuiltinChemical {
        id: "boric-acid",
        formula: "H₃BO₃",
        name: "Boric Acid",
        molecular_weight: 61.831,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::B, 1.0)],
    },
    BuiltinChemical {
        id: "manganese-sulfate",
        formula: "MnSO₄·H₂O",
        name: "Manganese Sulfate Monohydrate",
        molecular_weight: 169.014,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Mn, 1.0), (Ion::SO4, 1.0)],
    },
    BuiltinChemical {
        id: "manganese-chloride",
        formula: "MnCl₂·4H₂O",
        name: "Manganese Chloride Tetrahydrate",
        molecular_weight: 197.898,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Mn, 1.0), (Ion::Cl, 2.0)],
    },
    BuiltinChemical {
        id: "zinc-sulfate",
        formula: "ZnSO₄·7H₂O",
        name: "Zinc Sulfate Heptahydrate",
        molecular_weight: 287.546,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Zn, 1.0), (Ion::SO4, 1.0)],
    },
    BuiltinChemical {
        id: "copper-sulfate",
        formula: "CuSO₄·5H₂O",
        name: "Copper Sulfate Pentahydrate",
        molecular_weight: 249.682,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Cu, 1.0), (Ion::SO4, 1.0)],
    },
    BuiltinChemical {
        id: "sodium-molybdate",
        formula: "Na₂MoO₄·2H₂O",
        name: "Sodium Molybdate Dihydrate",
        molecular_weight: 241.956,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Mo, 1.0), (Ion::Na, 2.0)],
    },
    BuiltinChemical {
        id: "ammonium-heptamolybdate",
        formula: "(NH₄)₆Mo₇O₂₄·4H₂O",
        name: "Ammonium Heptamolybdate Tetrahydrate",
        molecular_weight: 1235.920,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::NH4, 6.0), (Ion::Mo, 7.0)],
    },
    BuiltinChemical {
        id: "ammonium-molybdate",
        formula: "(NH₄)₂MoO₄",
        name: "Ammonium Molybdate",
        molecular_weight: 196.024,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::NH4, 2.0), (Ion::Mo, 1.0)],
    },
    BuiltinChemical {
        id: "molybdic-acid",
        formula: "H₂MoO₄·H₂O",
        name: "Molybdic Acid Monohydrate",
        molecular_weight: 179.977,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::Mo, 1.0)],
    },
    BuiltinChemical {
        id: "potassium-silicate",
        formula: "K₂SiO₃",
        name: "Potassium Silicate",
        molecular_weight: 154.278,
        category: ChemicalCategory::Micro,
        ions: &[(Ion::K, 2.0), (Ion::Si, 1.0)],
    },
    // Acids
    BuiltinChemical {
        id: "nitric-acid",
        formula: "HNO₃",
        name: "Nitric Acid",
        molecular_weight: 63.012,
        category: ChemicalCategory::Acid,
        ions: &[(Ion::NO3, 1.0)],
    },
    BuiltinChemical {
        id: "phosphoric-acid",
        formula: "H₃PO₄",
        name: "Phosphoric Acid",
        molecular_weight: 97.994,
        category: ChemicalCategory::Acid,
        ions: &[(Ion::H2PO4, 1.0)],
    },
    BuiltinChemical {
        id: "sulfuric-acid",
        formula: "H₂SO₄",
        name: "Sulfuric Acid",
        molecular_weight: 98.077,
        category: ChemicalCategory::Acid,
        ions: &[(Ion::SO4, 1.0)],
    },
    // Bases
    BuiltinChemical {
        id: "potassium-hydroxide",
        formula: "KOH",
        name: "Potassium Hydroxide",
        molecular_weight: 56.105,
        category: ChemicalCategory::Base,
        ions: &[(Ion::K, 1.0)],
    },
    BuiltinChemical {
        id: "calcium-hydroxide",
        formula: "Ca(OH)₂",
        name: "Calcium Hydroxide",
        molecular_weight: 74.092,
        category: ChemicalCategory::Base,
        ions: &[(Ion::Ca, 1.0)],
    },
    BuiltinChemical {
        id: "potassium-carbonate",
        formula: "K₂CO₃",
        name: "Potassium Carbonate",
        molecular_weight: 138.204,
        category: ChemicalCategory::Base,
        ions: &[(Ion::K, 2.0)],
    },
];
