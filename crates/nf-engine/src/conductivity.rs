//! Electrical conductivity estimate from ion molarity.

use crate::concentration::IonConcentration;
use crate::error::EngineResult;
use nf_chem::Ion;
use nf_core::ensure_positive;

/// Limiting molar conductivities at 25 °C [S·cm²/mol].
const STANDARD: [(Ion, f64); 10] = [
    (Ion::NO3, 71.4),
    (Ion::NH4, 73.5),
    (Ion::H2PO4, 36.0),
    (Ion::K, 73.5),
    (Ion::Ca, 119.0),
    (Ion::Mg, 106.1),
    (Ion::SO4, 160.0),
    (Ion::Na, 50.1),
    (Ion::Cl, 76.3),
    (Ion::Fe, 108.0),
];

/// Partial map from ion to molar conductivity. Ions without an entry are
/// ignored by the estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductivityTable {
    values: [Option<f64>; Ion::ALL.len()],
}

impl ConductivityTable {
    /// Build a table from explicit entries. Every value must be finite and
    /// positive; a repeated ion keeps the last value.
    pub fn new(entries: &[(Ion, f64)]) -> EngineResult<Self> {
        let mut values = [None; Ion::ALL.len()];
        for &(ion, value) in entries {
            values[ion.index()] = Some(ensure_positive(value, "molar conductivity")?);
        }
        Ok(Self { values })
    }

    /// The built-in 25 °C table.
    pub fn standard() -> Self {
        let mut values = [None; Ion::ALL.len()];
        for (ion, value) in STANDARD {
            values[ion.index()] = Some(value);
        }
        Self { values }
    }

    pub fn get(&self, ion: Ion) -> Option<f64> {
        self.values[ion.index()]
    }
}

impl Default for ConductivityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Estimated EC [mS/cm] using the standard table.
pub fn estimate_conductivity(totals: &[IonConcentration]) -> f64 {
    estimate_conductivity_with(&ConductivityTable::standard(), totals)
}

/// Estimated EC [mS/cm]: Σ λᵢ·cᵢ over tabulated ions, µS/cm → mS/cm.
///
/// Non-positive molar concentrations contribute nothing, so the result is
/// never negative.
pub fn estimate_conductivity_with(table: &ConductivityTable, totals: &[IonConcentration]) -> f64 {
    let micro_siemens: f64 = totals
        .iter()
        .filter(|c| c.mmol_per_l() > 0.0)
        .filter_map(|c| table.get(c.ion()).map(|lambda| lambda * c.mmol_per_l()))
        .sum();
    micro_siemens / 1000.0
}
