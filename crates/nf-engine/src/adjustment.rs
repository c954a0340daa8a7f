//! Ion contribution of a pH-adjusting acid or base dose.

use crate::concentration::ChemicalBreakdown;
use crate::engine::breakdown;
use crate::error::{EngineError, EngineResult};
use nf_chem::{ChemicalCategory, ChemicalSource};
use nf_core::ensure_positive;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcidBaseAddition {
    /// Pure chemical mass in the dose [g].
    pub pure_mass_g: f64,
    /// Resulting concentration in the reservoir.
    pub mg_per_l: f64,
    pub breakdown: ChemicalBreakdown,
}

/// Effect of adding `volume_ml` of a `concentration_pct_wv` % (w/v) solution
/// of an acid or base to a `reservoir_l` litre reservoir.
pub fn acid_base_addition<S>(
    source: &S,
    chemical_id: &str,
    volume_ml: f64,
    concentration_pct_wv: f64,
    reservoir_l: f64,
) -> EngineResult<AcidBaseAddition>
where
    S: ChemicalSource + ?Sized,
{
    let chemical = source.require(chemical_id)?;
    if !matches!(
        chemical.category,
        ChemicalCategory::Acid | ChemicalCategory::Base
    ) {
        return Err(EngineError::NotAcidOrBase {
            id: chemical.id.clone(),
        });
    }

    let volume_ml = ensure_positive(volume_ml, "dose volume")?;
    let pct = ensure_positive(concentration_pct_wv, "concentration")?;
    let reservoir_l = ensure_positive(reservoir_l, "reservoir volume")?;

    // % w/v is g per 100 mL
    let pure_mass_g = volume_ml * pct / 100.0;
    let mg_per_l = pure_mass_g * 1000.0 / reservoir_l;

    Ok(AcidBaseAddition {
        pure_mass_g,
        mg_per_l,
        breakdown: breakdown(chemical, mg_per_l)?,
    })
}
