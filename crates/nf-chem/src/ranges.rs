//! General hydroponic sufficiency ranges (ppm as element, vegetative growth).
//!
//! These are guidelines; crops vary.

use crate::ion::Ion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    /// Below this is deficient.
    pub low: f64,
    /// Above this is excess.
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStatus {
    Low,
    Ok,
    High,
}

pub fn nutrient_range(ion: Ion) -> Option<NutrientRange> {
    let (low, high) = match ion {
        Ion::NO3 => (100.0, 250.0),
        Ion::NH4 => (0.0, 30.0),
        Ion::H2PO4 => (30.0, 80.0),
        Ion::K => (150.0, 350.0),
        Ion::Ca => (100.0, 260.0),
        Ion::Mg => (30.0, 80.0),
        Ion::SO4 => (20.0, 120.0),
        Ion::Fe => (1.0, 5.0),
        Ion::Mn => (0.3, 2.0),
        Ion::B => (0.2, 1.0),
        Ion::Zn => (0.1, 1.0),
        Ion::Cu => (0.02, 0.5),
        Ion::Mo => (0.01, 0.1),
        Ion::Na | Ion::Cl | Ion::Si => return None,
    };
    Some(NutrientRange { low, high })
}

/// Classify `ppm` against the ion's range; `None` when the ion has no range.
pub fn check_range(ion: Ion, ppm: f64) -> Option<RangeStatus> {
    let range = nutrient_range(ion)?;
    Some(if ppm < range.low {
        RangeStatus::Low
    } else if ppm > range.high {
        RangeStatus::High
    } else {
        RangeStatus::Ok
    })
}
