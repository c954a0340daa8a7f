//! Conversions between ppm (as element), mmol/L and me/L for a single ion.
//!
//! Every ion is 1:1 with its reporting element, so mmol/L of the element is
//! mmol/L of the ion.

use crate::ion::Ion;

pub fn ppm_to_mmol_per_l(ion: Ion, ppm: f64) -> f64 {
    ppm / ion.atomic_weight()
}

pub fn mmol_per_l_to_ppm(ion: Ion, mmol_per_l: f64) -> f64 {
    mmol_per_l * ion.atomic_weight()
}

pub fn mmol_per_l_to_me_per_l(ion: Ion, mmol_per_l: f64) -> f64 {
    mmol_per_l * f64::from(ion.valence())
}

pub fn ppm_to_me_per_l(ion: Ion, ppm: f64) -> f64 {
    mmol_per_l_to_me_per_l(ion, ppm_to_mmol_per_l(ion, ppm))
}

/// Inverse of [`ppm_to_me_per_l`]. Uncharged ions carry no equivalents, so
/// the reverse conversion is defined as 0 for them.
pub fn me_per_l_to_ppm(ion: Ion, me_per_l: f64) -> f64 {
    let valence = ion.valence();
    if valence == 0 {
        return 0.0;
    }
    mmol_per_l_to_ppm(ion, me_per_l / f64::from(valence))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ppm_me_roundtrip_for_charged_ions(idx in 0_usize..15, ppm in 0.0_f64..1000.0) {
            // Ion::ALL[15] is Si, the only uncharged ion.
            let ion = Ion::ALL[idx];
            let back = me_per_l_to_ppm(ion, ppm_to_me_per_l(ion, ppm));
            prop_assert!((back - ppm).abs() <= 1e-9 * ppm.max(1.0));
        }
    }
}
