//! Agronomic nutrient ratios read from solution totals.

use crate::concentration::IonConcentration;
use nf_chem::Ion;
use serde::Serialize;

/// N:P:K normalised so the smallest part is 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Npk {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

/// How nitrogen is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NitrogenForm {
    /// NO3-N per NH4-N.
    Ratio(f64),
    /// Nitrate present, no ammonium.
    AllNitrate,
}

/// Ratios on a ppm basis; a ratio is `None` when either side is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientRatios {
    pub npk: Option<Npk>,
    pub ca_mg: Option<f64>,
    pub k_ca: Option<f64>,
    pub no3_nh4: Option<NitrogenForm>,
}

impl NutrientRatios {
    pub fn is_empty(&self) -> bool {
        self.npk.is_none() && self.ca_mg.is_none() && self.k_ca.is_none() && self.no3_nh4.is_none()
    }
}

fn ppm(totals: &[IonConcentration], ion: Ion) -> f64 {
    totals
        .iter()
        .find(|c| c.ion() == ion)
        .map_or(0.0, |c| c.ppm())
}

fn ratio(num: f64, den: f64) -> Option<f64> {
    (num > 0.0 && den > 0.0).then(|| num / den)
}

pub fn nutrient_ratios(totals: &[IonConcentration]) -> NutrientRatios {
    let no3 = ppm(totals, Ion::NO3);
    let nh4 = ppm(totals, Ion::NH4);
    let p = ppm(totals, Ion::H2PO4);
    let k = ppm(totals, Ion::K);
    let ca = ppm(totals, Ion::Ca);
    let mg = ppm(totals, Ion::Mg);
    let n = no3 + nh4;

    let npk = (n > 0.0 && p > 0.0 && k > 0.0).then(|| {
        let min = n.min(p).min(k);
        Npk {
            n: n / min,
            p: p / min,
            k: k / min,
        }
    });

    let no3_nh4 = if no3 > 0.0 && nh4 > 0.0 {
        Some(NitrogenForm::Ratio(no3 / nh4))
    } else if no3 > 0.0 && nh4 == 0.0 {
        Some(NitrogenForm::AllNitrate)
    } else {
        None
    };

    NutrientRatios {
        npk,
        ca_mg: ratio(ca, mg),
        k_ca: ratio(k, ca),
        no3_nh4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concentration::zero_totals;

    fn totals(ppms: &[(Ion, f64)]) -> Vec<IonConcentration> {
        ppms.iter()
            .map(|&(ion, ppm)| IonConcentration::from_ppm(ion, ppm))
            .collect()
    }

    #[test]
    fn empty_solution() {
        assert!(nutrient_ratios(&zero_totals()).is_empty());
    }

    #[test]
    fn npk_normalised_to_smallest() {
        let t = totals(&[(Ion::NO3, 150.0), (Ion::NH4, 50.0), (Ion::H2PO4, 50.0), (Ion::K, 300.0)]);
        let r = nutrient_ratios(&t);
        let npk = r.npk.unwrap();
        assert!((npk.n - 4.0).abs() < 1e-9);
        assert!((npk.p - 1.0).abs() < 1e-12);
        assert!((npk.k - 6.0).abs() < 1e-9);
        assert!(matches!(r.no3_nh4, Some(NitrogenForm::Ratio(x)) if (x - 3.0).abs() < 1e-9));
    }

    #[test]
    fn all_nitrate() {
        let t = totals(&[(Ion::NO3, 100.0), (Ion::Ca, 160.0), (Ion::Mg, 40.0)]);
        let r = nutrient_ratios(&t);
        assert_eq!(r.no3_nh4, Some(NitrogenForm::AllNitrate));
        assert!((r.ca_mg.unwrap() - 4.0).abs() < 1e-9);
        assert_eq!(r.npk, None);
        assert_eq!(r.k_ca, None);
    }

    #[test]
    fn ammonium_only_has_no_nitrogen_form() {
        let t = totals(&[(Ion::NH4, 20.0)]);
        assert_eq!(nutrient_ratios(&t).no3_nh4, None);
    }
}
