//! Source-water correction of solution totals.

use crate::concentration::IonConcentration;
use crate::error::EngineResult;
use nf_chem::{Ion, units};
use nf_core::ensure_finite;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ions already present in the source water [ppm as element].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ions: BTreeMap<Ion, f64>,
}

impl WaterProfile {
    pub fn ppm(&self, ion: Ion) -> f64 {
        self.ions.get(&ion).copied().unwrap_or(0.0)
    }
}

/// Subtract the source water's ions from `totals`.
///
/// Entries with water ppm ≤ 0 are left as they are. Otherwise the water's
/// molar amount is removed and the result clamped at zero, so ppm and me/L
/// shrink in step with mmol/L.
pub fn adjust_for_water(
    totals: &[IonConcentration],
    water: &WaterProfile,
) -> EngineResult<Vec<IonConcentration>> {
    for &ppm in water.ions.values() {
        ensure_finite(ppm, "water ppm")?;
    }

    Ok(totals
        .iter()
        .map(|t| {
            let water_ppm = water.ppm(t.ion());
            if water_ppm <= 0.0 {
                return *t;
            }
            let water_mmol = units::ppm_to_mmol_per_l(t.ion(), water_ppm);
            IonConcentration::from_mmol_per_l(t.ion(), (t.mmol_per_l() - water_mmol).max(0.0))
        })
        .collect())
}
