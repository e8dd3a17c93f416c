//! Specific volume anomaly and density anomaly (EOS-80).
//!
//! Zero-pressure part: International One-Atmosphere Equation of State
//! (Millero & Poisson, 1981). Pressure part: secant bulk modulus of the high
//! pressure equation of state (Millero et al., 1980).

use serde::Serialize;

use crate::math::{fabs, sqrt};

/// Density of S = 35, 0 °C, 0 dbar seawater [kg/m³].
const RHO_35_0_0: f64 = 1028.1063;
/// Density anomaly of S = 35, 0 °C, 0 dbar seawater [kg/m³].
const SIGMA_35_0_0: f64 = 28.106331;
/// Coefficient of the S² term in the one-atmosphere equation.
const R4: f64 = 4.8314e-4;

/// Specific volume anomaly together with the density anomaly from the same
/// evaluation.
///
/// - `anomaly`: specific volume anomaly [10⁻⁸ m³/kg]
/// - `sigma`: density anomaly, in-situ density minus 1000 [kg/m³]
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SpecificVolumeAnomaly {
    pub anomaly: f64,
    pub sigma: f64,
}

/// Specific volume anomaly and density anomaly of seawater.
///
/// # Arguments
/// * `salinity` - practical salinity (PSS-78)
/// * `temperature` - in-situ temperature [°C]
/// * `pressure` - pressure [dbar]
///
/// At exactly zero pressure the one-atmosphere values are returned without
/// evaluating the bulk modulus.
pub fn specific_volume_anomaly(
    salinity: f64,
    temperature: f64,
    pressure: f64,
) -> SpecificVolumeAnomaly {
    let s = salinity;
    let t = temperature;
    let p = pressure / 10.0; // bars
    let sr = sqrt(fabs(s));

    // Pure water density anomaly at one atmosphere (Bigg, 1967).
    let r1 = ((((6.536332e-9 * t - 1.120083e-6) * t + 1.001685e-4) * t - 9.095290e-3) * t
        + 6.793952e-2)
        * t
        - 28.263737;
    let r2 = (((5.3875e-9 * t - 8.2467e-7) * t + 7.6438e-5) * t - 4.0899e-3) * t + 8.24493e-1;
    let r3 = (-1.6546e-6 * t + 1.0227e-4) * t - 5.72466e-3;

    // Density anomaly relative to S = 35, 0 °C at one atmosphere.
    let sig = (R4 * s + r3 * sr + r2) * s + r1;

    let mut v350p = 1.0 / RHO_35_0_0;
    let mut sva = -sig * v350p / (RHO_35_0_0 + sig);

    if p == 0.0 {
        return SpecificVolumeAnomaly {
            anomaly: sva * 1.0e8,
            sigma: sig + SIGMA_35_0_0,
        };
    }

    // Compression terms.
    let e = (9.1697e-10 * t + 2.0816e-8) * t - 9.9348e-7;
    let bw = (5.2787e-8 * t - 6.12293e-6) * t + 3.47718e-5;
    let b = bw + e * s;

    let d = 1.91075e-4;
    let c = (-1.6078e-6 * t - 1.0981e-5) * t + 2.2838e-3;
    let aw = ((-5.77905e-7 * t + 1.16092e-4) * t + 1.43713e-3) * t - 0.1194975;
    let a = (d * sr + c) * s + aw;

    let b1 = (-5.3009e-4 * t + 1.6483e-2) * t + 7.944e-2;
    let a1 = ((-6.1670e-5 * t + 1.09987e-2) * t - 0.603459) * t + 54.6746;
    let kw = (((-5.155288e-5 * t + 1.360477e-2) * t - 2.327105) * t + 148.4206) * t - 1930.06;
    let k0 = (b1 * sr + a1) * s + kw;

    // dk = K(S,T,p) − K(35,0,p); k35 = K(35,0,p).
    let dk = (b * p + a) * p + k0;
    let k35 = (5.03217e-5 * p + 3.359406) * p + 21582.27;
    let gam = p / k35;
    let pk = 1.0 - gam;

    sva = sva * pk + (v350p + sva) * p * dk / (k35 * (k35 + dk));
    v350p *= pk;

    let dr35p = gam / v350p;
    let dvan = sva / (v350p * (v350p + sva));

    SpecificVolumeAnomaly {
        anomaly: sva * 1.0e8,
        sigma: SIGMA_35_0_0 + dr35p - dvan,
    }
}
