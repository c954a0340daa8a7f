//! Cation/anion charge balance over solution totals.

use crate::concentration::IonConcentration;
use nf_chem::Ion;
use serde::Serialize;

const CATIONS: [Ion; 9] = [
    Ion::K,
    Ion::Ca,
    Ion::Mg,
    Ion::NH4,
    Ion::Na,
    Ion::Fe,
    Ion::Mn,
    Ion::Zn,
    Ion::Cu,
];

const ANIONS: [Ion; 4] = [Ion::NO3, Ion::H2PO4, Ion::SO4, Ion::Cl];

/// Deviation bands in percent.
const BALANCED_BELOW: f64 = 5.0;
const WARNING_BELOW: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Balanced,
    Warning,
    Alert,
}

impl BalanceStatus {
    fn from_deviation(deviation_pct: f64) -> Self {
        let d = deviation_pct.abs();
        if d < BALANCED_BELOW {
            BalanceStatus::Balanced
        } else if d < WARNING_BELOW {
            BalanceStatus::Warning
        } else {
            BalanceStatus::Alert
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IonBalance {
    /// [me/L]
    pub cation_me_per_l: f64,
    /// [me/L]
    pub anion_me_per_l: f64,
    /// cation / anion, or 0 when there are no anions.
    pub ratio: f64,
    /// Signed; positive means excess cations.
    pub deviation_pct: f64,
    pub status: BalanceStatus,
}

fn sum_me(totals: &[IonConcentration], ions: &[Ion]) -> f64 {
    totals
        .iter()
        .filter(|c| ions.contains(&c.ion()))
        .map(|c| c.me_per_l())
        .sum()
}

/// Charge balance of `totals`, or `None` for an empty solution.
///
/// B, Mo and Si are left out of both sides.
pub fn ion_balance(totals: &[IonConcentration]) -> Option<IonBalance> {
    let cation = sum_me(totals, &CATIONS);
    let anion = sum_me(totals, &ANIONS);

    let sum = cation + anion;
    if sum == 0.0 {
        return None;
    }

    let ratio = if anion > 0.0 { cation / anion } else { 0.0 };
    let deviation_pct = (cation - anion) / sum * 200.0;

    Some(IonBalance {
        cation_me_per_l: cation,
        anion_me_per_l: anion,
        ratio,
        deviation_pct,
        status: BalanceStatus::from_deviation(deviation_pct),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concentration::zero_totals;
    use crate::engine::aggregate_solution;
    use nf_chem::{Catalog, Dosage};

    #[test]
    fn empty_solution_has_no_balance() {
        assert_eq!(ion_balance(&zero_totals()), None);
        assert_eq!(ion_balance(&[]), None);
    }

    #[test]
    fn single_salt_is_balanced() {
        let catalog = Catalog::builtin();
        let result =
            aggregate_solution(&catalog, &[Dosage::new("potassium-nitrate", 500.0)]).unwrap();
        let balance = ion_balance(&result.totals).unwrap();
        assert!((balance.cation_me_per_l - balance.anion_me_per_l).abs() < 1e-12);
        assert!((balance.ratio - 1.0).abs() < 1e-12);
        assert!(balance.deviation_pct.abs() < 1e-9);
        assert_eq!(balance.status, BalanceStatus::Balanced);
    }

    #[test]
    fn cations_only() {
        let totals = [IonConcentration::from_mmol_per_l(Ion::K, 1.0)];
        let balance = ion_balance(&totals).unwrap();
        assert_eq!(balance.ratio, 0.0);
        assert_eq!(balance.deviation_pct, 200.0);
        assert_eq!(balance.status, BalanceStatus::Alert);
    }

    #[test]
    fn status_bands() {
        // 1.1 vs 1.0 me/L → 9.52 %
        let totals = [
            IonConcentration::from_mmol_per_l(Ion::K, 1.1),
            IonConcentration::from_mmol_per_l(Ion::NO3, 1.0),
        ];
        let balance = ion_balance(&totals).unwrap();
        assert!((balance.deviation_pct - 9.523809523809524).abs() < 1e-9);
        assert_eq!(balance.status, BalanceStatus::Warning);

        let totals = [
            IonConcentration::from_mmol_per_l(Ion::K, 1.0),
            IonConcentration::from_mmol_per_l(Ion::NO3, 1.5),
        ];
        let balance = ion_balance(&totals).unwrap();
        assert!(balance.deviation_pct < 0.0);
        assert_eq!(balance.status, BalanceStatus::Alert);
    }

    #[test]
    fn boron_is_excluded() {
        let totals = [IonConcentration::from_mmol_per_l(Ion::B, 10.0)];
        assert_eq!(ion_balance(&totals), None);
    }
}
