use serde::Serialize;

use super::polynomials::{REFERENCE_TEMPERATURE, a, b, c, dsal_poly, rt35, sal_poly};
use crate::math::{fabs, sqrt};

/// Conductivity ratios at or below this value are reported as zero salinity.
pub const MIN_CONDUCTIVITY_RATIO: f64 = 5e-4;
/// Salinities at or below this value are reported as zero conductivity.
pub const MIN_SALINITY: f64 = 0.02;
/// Hard cap on Newton steps in [`conductivity`].
pub const MAX_NEWTON_ITERATIONS: u32 = 10;
/// Salinity residual at which the Newton iteration stops early.
pub const NEWTON_TOLERANCE: f64 = 1e-4;

/// Outcome of the salinity → conductivity inversion, including how the
/// Newton iteration ended.
///
/// - `conductivity`: the conductivity ratio, same value [`conductivity`] returns
/// - `iterations`: Newton steps taken (`0` when the low-salinity clamp applied)
/// - `residual`: `|sal_poly(rt) − salinity|` after the last step
///
/// Hitting [`MAX_NEWTON_ITERATIONS`] with a residual above
/// [`NEWTON_TOLERANCE`] is not an error; the estimate is still returned.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ConductivityReport {
    pub conductivity: f64,
    pub iterations: u32,
    pub residual: f64,
}

impl ConductivityReport {
    /// `true` when the iteration stopped on tolerance rather than on the cap.
    pub fn converged(&self) -> bool {
        self.residual <= NEWTON_TOLERANCE
    }
}

/// Practical salinity (PSS-78) from a conductivity ratio.
///
/// # Arguments
/// * `conductivity` - conductivity ratio relative to standard seawater (dimensionless)
/// * `temperature` - in-situ temperature [°C]
/// * `pressure` - pressure [dbar]
///
/// # Returns
/// * Practical salinity. Ratios `<= 5e-4` return exactly `0.0`.
pub fn salinity(conductivity: f64, temperature: f64, pressure: f64) -> f64 {
    if conductivity <= MIN_CONDUCTIVITY_RATIO {
        return 0.0;
    }

    let rt = conductivity
        / (rt35(temperature)
            * (1.0 + c(pressure) / (b(temperature) + a(temperature) * conductivity)));
    // abs() only absorbs rounding noise near zero
    let rt = sqrt(fabs(rt));

    sal_poly(rt, temperature - REFERENCE_TEMPERATURE)
}

/// Conductivity ratio from practical salinity; inverse of [`salinity`].
///
/// Solved with at most [`MAX_NEWTON_ITERATIONS`] Newton steps. Salinities
/// `<= 0.02` return exactly `0.0`. Non-finite output means the inputs drove a
/// denominator to zero and should be treated as out of range.
pub fn conductivity(salinity: f64, temperature: f64, pressure: f64) -> f64 {
    conductivity_report(salinity, temperature, pressure).conductivity
}

/// Same as [`conductivity`] but also reports the Newton iteration count and
/// final salinity residual.
pub fn conductivity_report(salinity: f64, temperature: f64, pressure: f64) -> ConductivityReport {
    if salinity <= MIN_SALINITY {
        return ConductivityReport {
            conductivity: 0.0,
            iterations: 0,
            residual: 0.0,
        };
    }

    let xt = temperature - REFERENCE_TEMPERATURE;
    let mut rt = sqrt(salinity / 35.0);
    let mut si = sal_poly(rt, xt);
    let mut iterations = 0;
    let mut residual;

    loop {
        rt += (salinity - si) / dsal_poly(rt, xt);
        si = sal_poly(rt, xt);
        residual = fabs(si - salinity);
        iterations += 1;
        if iterations >= MAX_NEWTON_ITERATIONS || residual <= NEWTON_TOLERANCE {
            break;
        }
    }

    // Invert the pressure/temperature correction: solve A r² + bt r − cp = 0.
    let a_t = a(temperature);
    let b_t = b(temperature);
    let rtt = rt35(temperature) * rt * rt;
    let cp = rtt * (c(pressure) + b_t);
    let bt = b_t - rtt * a_t;
    let r = sqrt(fabs(bt * bt + 4.0 * a_t * cp)) - bt;

    ConductivityReport {
        conductivity: 0.5 * r / a_t,
        iterations,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_are_inclusive() {
        assert_eq!(salinity(MIN_CONDUCTIVITY_RATIO, 15.0, 0.0), 0.0);
        assert_eq!(salinity(0.0, 15.0, 0.0), 0.0);
        assert_eq!(salinity(-1.0, 15.0, 0.0), 0.0);
        assert_eq!(conductivity(MIN_SALINITY, 15.0, 0.0), 0.0);
        assert_eq!(conductivity(-3.0, 15.0, 0.0), 0.0);
    }

    #[test]
    fn clamped_report_takes_no_steps() {
        let report = conductivity_report(0.01, 10.0, 100.0);
        assert_eq!(report.iterations, 0);
        assert_eq!(report.conductivity, 0.0);
    }

    #[test]
    fn standard_seawater_converges_in_one_step() {
        let report = conductivity_report(35.0, 15.0, 0.0);
        assert_eq!(report.iterations, 1);
        assert!(report.converged());
        assert!((report.conductivity - 1.0).abs() < 1e-5);
    }

    #[test]
    fn iteration_cap_is_a_hard_bound() {
        // Far outside the fit; Newton crawls and runs out of steps.
        let report = conductivity_report(1.0e6, 15.0, 0.0);
        assert_eq!(report.iterations, MAX_NEWTON_ITERATIONS);
        assert!(!report.converged());
        assert!(report.conductivity.is_finite());
    }

    #[test]
    fn report_agrees_with_plain_call() {
        let report = conductivity_report(37.245628, 20.0, 2000.0);
        assert_eq!(report.conductivity, conductivity(37.245628, 20.0, 2000.0));
    }
}
