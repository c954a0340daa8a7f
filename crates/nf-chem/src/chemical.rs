//! Chemical records: molecular weight plus ion stoichiometry.

use crate::error::{ChemError, ChemResult};
use crate::ion::Ion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChemicalCategory {
    Macro,
    Micro,
    Acid,
    Base,
}

impl ChemicalCategory {
    pub const ALL: [ChemicalCategory; 4] = [
        ChemicalCategory::Macro,
        ChemicalCategory::Micro,
        ChemicalCategory::Acid,
        ChemicalCategory::Base,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChemicalCategory::Macro => "macro",
            ChemicalCategory::Micro => "micro",
            ChemicalCategory::Acid => "acid",
            ChemicalCategory::Base => "base",
        }
    }
}

impl std::str::FromStr for ChemicalCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChemicalCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or("unknown chemical category")
    }
}

impl std::fmt::Display for ChemicalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Moles of `ion` released per mole of the chemical dissolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IonContribution {
    pub ion: Ion,
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: String,
    #[serde(default)]
    pub formula: String,
    #[serde(default)]
    pub name: String,
    /// [g/mol], numerically equal to mg/mmol.
    pub molecular_weight: f64,
    pub category: ChemicalCategory,
    pub ions: Vec<IonContribution>,
}

impl Chemical {
    /// Check the record invariants: positive finite molecular weight, at least
    /// one ion, positive finite coefficients, no ion listed twice.
    pub fn validate(&self) -> ChemResult<()> {
        let invalid = |what: String| ChemError::InvalidChemical {
            id: self.id.clone(),
            what,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("empty id".into()));
        }
        if !self.molecular_weight.is_finite() || self.molecular_weight <= 0.0 {
            return Err(invalid(format!(
                "molecular weight must be positive, got {}",
                self.molecular_weight
            )));
        }
        if self.ions.is_empty() {
            return Err(invalid("no ion contributions".into()));
        }
        for (i, contribution) in self.ions.iter().enumerate() {
            if !contribution.coefficient.is_finite() || contribution.coefficient <= 0.0 {
                return Err(invalid(format!(
                    "coefficient for {} must be positive, got {}",
                    contribution.ion, contribution.coefficient
                )));
            }
            if self.ions[..i].iter().any(|c| c.ion == contribution.ion) {
                return Err(invalid(format!("ion {} listed twice", contribution.ion)));
            }
        }
        Ok(())
    }

    /// Stoichiometric coefficient of `ion`, if this chemical releases it.
    pub fn coefficient_of(&self, ion: Ion) -> Option<f64> {
        self.ions
            .iter()
            .find(|c| c.ion == ion)
            .map(|c| c.coefficient)
    }

    /// ppm (as element) of `ion` produced by 1 mg/L of this chemical.
    ///
    /// 1 mg/L → 1/MW mmol/L → × coefficient mmol/L of ion → × atomic weight.
    pub fn ppm_per_mg_per_l(&self, ion: Ion) -> f64 {
        self.coefficient_of(ion)
            .map(|coefficient| coefficient / self.molecular_weight * ion.atomic_weight())
            .unwrap_or(0.0)
    }

    pub fn contains_ion(&self, ion: Ion) -> bool {
        self.coefficient_of(ion).is_some()
    }
}

/// A chemical dosed at a mass concentration [mg/L].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dosage {
    pub chemical_id: String,
    pub mg_per_l: f64,
}

impl Dosage {
    pub fn new(chemical_id: impl Into<String>, mg_per_l: f64) -> Self {
        Self {
            chemical_id: chemical_id.into(),
            mg_per_l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kno3() -> Chemical {
        Chemical {
            id: "potassium-nitrate".into(),
            formula: "KNO3".into(),
            name: "Potassium Nitrate".into(),
            molecular_weight: 101.102,
            category: ChemicalCategory::Macro,
            ions: vec![
                IonContribution {
                    ion: Ion::K,
                    coefficient: 1.0,
                },
                IonContribution {
                    ion: Ion::NO3,
                    coefficient: 1.0,
                },
            ],
        }
    }

    #[test]
    fn valid_record_passes() {
        kno3().validate().unwrap();
    }

    #[test]
    fn rejects_non_positive_molecular_weight() {
        let mut chem = kno3();
        chem.molecular_weight = 0.0;
        assert!(matches!(
            chem.validate(),
            Err(ChemError::InvalidChemical { .. })
        ));
    }

    #[test]
    fn rejects_empty_ions_and_duplicates() {
        let mut chem = kno3();
        chem.ions.clear();
        assert!(chem.validate().is_err());

        let mut chem = kno3();
        chem.ions.push(IonContribution {
            ion: Ion::K,
            coefficient: 2.0,
        });
        let err = chem.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn rejects_non_positive_coefficient() {
        let mut chem = kno3();
        chem.ions[0].coefficient = -1.0;
        assert!(chem.validate().is_err());
    }

    #[test]
    fn ppm_per_unit_dose() {
        let chem = kno3();
        let k = chem.ppm_per_mg_per_l(Ion::K);
        assert!((k * 101.102 - 39.098).abs() < 1e-9);
        assert_eq!(chem.ppm_per_mg_per_l(Ion::Ca), 0.0);
    }

    #[test]
    fn category_parse() {
        assert_eq!(
            "Macro".parse::<ChemicalCategory>().unwrap(),
            ChemicalCategory::Macro
        );
        assert!("salt".parse::<ChemicalCategory>().is_err());
    }
}
