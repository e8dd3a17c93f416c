//! Correction factors and the PSS-78 salinity polynomial.
//!
//! These are the building blocks shared by [`salinity`](super::salinity::salinity)
//! and [`conductivity`](super::salinity::conductivity). All of them are plain
//! Horner-form polynomials: any finite input yields a finite output, even if
//! the value means nothing physically outside roughly −2…40 °C.

/// Temperature offset used by the salinity polynomial (`T − 15`).
pub(crate) const REFERENCE_TEMPERATURE: f64 = 15.0;

/// `A(t)`: linear temperature coefficient of the pressure correction.
#[inline]
pub(crate) fn a(t: f64) -> f64 {
    -3.107e-3 * t + 0.4215
}

/// `B(t)`: quadratic temperature coefficient of the pressure correction.
#[inline]
pub(crate) fn b(t: f64) -> f64 {
    (4.464e-4 * t + 3.426e-2) * t + 1.0
}

/// `C(p)`: cubic pressure term, `p` in decibars.
#[inline]
pub(crate) fn c(p: f64) -> f64 {
    ((3.989e-15 * p - 6.370e-10) * p + 2.070e-5) * p
}

/// `RT35(t)`: conductivity ratio of S = 35 seawater at temperature `t`
/// relative to the same water at 15 °C.
#[inline]
pub(crate) fn rt35(t: f64) -> f64 {
    (((1.0031e-9 * t - 6.9698e-7) * t + 1.104259e-4) * t + 2.00564e-2) * t + 0.6766097
}

/// Temperature weighting of the secondary polynomial, `xt / (1 + 0.0162 xt)`.
#[inline]
fn temperature_weight(xt: f64) -> f64 {
    xt / (1.0 + 0.0162 * xt)
}

/// Practical salinity from `rt` (square root of the corrected conductivity
/// ratio) and the temperature offset `xt = T − 15`.
pub(crate) fn sal_poly(rt: f64, xt: f64) -> f64 {
    let base = ((((2.7081 * rt - 7.0261) * rt + 14.0941) * rt + 25.3851) * rt - 0.1692) * rt
        + 0.0080;
    let delta =
        ((((-0.0144 * rt + 0.0636) * rt - 0.0375) * rt - 0.0066) * rt - 0.0056) * rt + 0.0005;
    base + temperature_weight(xt) * delta
}

/// d[`sal_poly`]/d`rt`. Must stay the exact analytic derivative of
/// [`sal_poly`]; the Newton step in `conductivity` relies on it.
pub(crate) fn dsal_poly(rt: f64, xt: f64) -> f64 {
    let base = (((13.5405 * rt - 28.1044) * rt + 42.2823) * rt + 50.7702) * rt - 0.1692;
    let delta = (((-0.0720 * rt + 0.2544) * rt - 0.1125) * rt - 0.0132) * rt - 0.0056;
    base + temperature_weight(xt) * delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rt35_is_unity_at_reference_temperature() {
        assert!((rt35(REFERENCE_TEMPERATURE) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pressure_correction_vanishes_at_surface() {
        assert_eq!(c(0.0), 0.0);
        assert_eq!(b(0.0), 1.0);
        assert_eq!(a(0.0), 0.4215);
    }

    #[test]
    fn sal_poly_gives_35_for_unit_ratio_at_15_degrees() {
        assert!((sal_poly(1.0, 0.0) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn dsal_poly_matches_central_difference() {
        let h = 1e-6;
        for &xt in &[-15.0, 0.0, 10.0, 25.0] {
            for &rt in &[0.1, 0.5, 1.0, 1.3] {
                let numeric = (sal_poly(rt + h, xt) - sal_poly(rt - h, xt)) / (2.0 * h);
                let analytic = dsal_poly(rt, xt);
                assert!(
                    (numeric - analytic).abs() < 1e-5,
                    "rt={rt} xt={xt}: {numeric} vs {analytic}"
                );
            }
        }
    }
}
