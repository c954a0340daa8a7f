use crate::NfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NfError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Zero is allowed (an unused dosage, an empty target).
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, NfError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(NfError::Negative { what, value: v });
    }
    Ok(v)
}

/// Finite and `> 0`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, NfError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(NfError::NotPositive { what, value: v });
    }
    Ok(v)
}

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: Real, decimals: u32) -> Real {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn non_negative_accepts_zero_rejects_negative() {
        assert_eq!(ensure_non_negative(0.0, "dose").unwrap(), 0.0);
        assert!(matches!(
            ensure_non_negative(-0.5, "dose"),
            Err(NfError::Negative { what: "dose", .. })
        ));
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "dose"),
            Err(NfError::NonFinite { .. })
        ));
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(ensure_positive(1e-9, "volume").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "volume"),
            Err(NfError::NotPositive { .. })
        ));
    }

    #[test]
    fn round_to_decimal_places() {
        assert_eq!(round_to(3.7, 0), 4.0);
        assert_eq!(round_to(3.2, 0), 3.0);
        assert_eq!(round_to(3.456, 2), 3.46);
        assert_eq!(round_to(3.454, 2), 3.45);
        assert_eq!(round_to(1.2346, 3), 1.235);
        assert_eq!(round_to(0.0, 2), 0.0);
        assert_eq!(round_to(-3.456, 2), -3.46);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_to_stays_within_half_unit(v in -1.0e6_f64..1.0e6_f64, d in 0_u32..4) {
            let r = round_to(v, d);
            let half = 0.5 / 10_f64.powi(d as i32);
            prop_assert!((r - v).abs() <= half + 1e-9 * v.abs().max(1.0));
        }
    }
}
