//! Concentration value types returned by the engine.

use nf_chem::{Ion, units};
use serde::Serialize;

/// One ion's concentration in three bases.
///
/// Only the molar value is stored independently; ppm and me/L are derived
/// from it on construction so the three always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IonConcentration {
    ion: Ion,
    mmol_per_l: f64,
    ppm: f64,
    me_per_l: f64,
}

impl IonConcentration {
    pub fn from_mmol_per_l(ion: Ion, mmol_per_l: f64) -> Self {
        Self {
            ion,
            mmol_per_l,
            ppm: units::mmol_per_l_to_ppm(ion, mmol_per_l),
            me_per_l: units::mmol_per_l_to_me_per_l(ion, mmol_per_l),
        }
    }

    pub fn from_ppm(ion: Ion, ppm: f64) -> Self {
        Self::from_mmol_per_l(ion, units::ppm_to_mmol_per_l(ion, ppm))
    }

    pub fn zero(ion: Ion) -> Self {
        Self::from_mmol_per_l(ion, 0.0)
    }

    pub fn ion(&self) -> Ion {
        self.ion
    }

    /// Molar concentration [mmol/L].
    pub fn mmol_per_l(&self) -> f64 {
        self.mmol_per_l
    }

    /// Mass concentration of the reporting element [mg/L].
    pub fn ppm(&self) -> f64 {
        self.ppm
    }

    /// Equivalent concentration [me/L].
    pub fn me_per_l(&self) -> f64 {
        self.me_per_l
    }
}

/// What a single dosed chemical contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChemicalBreakdown {
    pub chemical_id: String,
    pub mg_per_l: f64,
    /// Molar concentration of the chemical itself.
    pub mmol_per_l: f64,
    /// In the chemical's own contribution order.
    pub ions: Vec<IonConcentration>,
}

/// Per-chemical breakdowns plus solution totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionResult {
    /// Same order as the input dosages.
    pub breakdowns: Vec<ChemicalBreakdown>,
    /// One entry per tracked ion, in [`Ion::ALL`] order.
    pub totals: Vec<IonConcentration>,
}

impl SolutionResult {
    pub fn empty() -> Self {
        Self {
            breakdowns: Vec::new(),
            totals: zero_totals(),
        }
    }

    pub fn total(&self, ion: Ion) -> &IonConcentration {
        &self.totals[ion.index()]
    }
}

/// A zero entry for every tracked ion, in canonical order.
pub fn zero_totals() -> Vec<IonConcentration> {
    Ion::ALL.iter().map(|&ion| IonConcentration::zero(ion)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields_are_consistent() {
        let c = IonConcentration::from_mmol_per_l(Ion::Ca, 1.5);
        assert_eq!(c.ppm(), 1.5 * 40.078);
        assert_eq!(c.me_per_l(), 3.0);
    }

    #[test]
    fn from_ppm_inverts() {
        let c = IonConcentration::from_ppm(Ion::K, 39.098);
        assert!((c.mmol_per_l() - 1.0).abs() < 1e-12);
        assert!((c.me_per_l() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uncharged_has_zero_equivalents() {
        let si = IonConcentration::from_mmol_per_l(Ion::Si, 2.0);
        assert_eq!(si.me_per_l(), 0.0);
        assert!(si.ppm() > 0.0);
    }

    #[test]
    fn empty_result_has_every_ion() {
        let result = SolutionResult::empty();
        assert!(result.breakdowns.is_empty());
        assert_eq!(result.totals.len(), Ion::ALL.len());
        for (entry, ion) in result.totals.iter().zip(Ion::ALL) {
            assert_eq!(entry.ion(), ion);
            assert_eq!(entry.ppm(), 0.0);
        }
        assert_eq!(result.total(Ion::Mo).mmol_per_l(), 0.0);
    }
}
