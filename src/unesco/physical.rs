use crate::math::{fabs, sin, sqrt};

/// Degrees per radian as used by the UNESCO depth routine.
const DEGREES_PER_RADIAN: f64 = 57.29578;

/// Depth [m] from pressure [dbar] and latitude [degrees].
///
/// Normal gravity follows the 1967 geodetic reference formula with a linear
/// free-air correction in pressure; the numerator is the geopotential of a
/// standard ocean (S = 35, 0 °C).
pub fn depth(pressure: f64, latitude: f64) -> f64 {
    let p = pressure;
    let x = sin(latitude / DEGREES_PER_RADIAN);
    let x = x * x;

    let gravity = 9.780318 * (1.0 + (5.2788e-3 + 2.36e-5 * x) * x) + 1.092e-6 * p;
    let geopotential = (((-1.82e-15 * p + 2.279e-10) * p - 2.2512e-5) * p + 9.72659) * p;

    geopotential / gravity
}

/// Freezing point of seawater [°C] from practical salinity and pressure [dbar].
pub fn freezing_point(salinity: f64, pressure: f64) -> f64 {
    let s = salinity;
    (-0.0575 + 1.710523e-3 * sqrt(fabs(s)) - 2.154996e-4 * s) * s - 7.53e-4 * pressure
}

/// Specific heat of seawater [J/(kg·°C)] (Millero et al., 1973).
///
/// # Arguments
/// * `salinity` - practical salinity (PSS-78)
/// * `temperature` - in-situ temperature [°C]
/// * `pressure` - pressure [dbar]
///
/// # Returns
/// * `cp0 + cp1 + cp2`: the one-atmosphere value, the pure-water pressure
///   term and the saline pressure term.
pub fn specific_heat(salinity: f64, temperature: f64, pressure: f64) -> f64 {
    let s = salinity;
    let t = temperature;
    let p = pressure / 10.0; // bars
    let sr = sqrt(fabs(s));

    // cp0: p = 0
    let a = (-1.38385e-3 * t + 0.1072763) * t - 7.643575;
    let b = (5.148e-5 * t - 4.07718e-3) * t + 0.1770383;
    let c = (((2.093236e-5 * t - 2.654387e-3) * t + 0.1412855) * t - 3.720283) * t + 4217.4;
    let cp0 = (b * sr + a) * s + c;

    // cp1: pressure and temperature terms for S = 0
    let a = (((1.7168e-8 * t + 2.0357e-6) * t - 3.13885e-4) * t + 1.45747e-2) * t - 0.49592;
    let b = (((2.2956e-11 * t - 4.0027e-9) * t + 2.87533e-7) * t - 1.08645e-5) * t + 2.4931e-4;
    let c = ((6.136e-13 * t - 6.5637e-11) * t + 2.6380e-9) * t - 5.422e-8;
    let cp1 = ((c * p + b) * p + a) * p;

    // cp2: pressure and temperature terms for S > 0
    let a = (((-2.9179e-10 * t + 2.5941e-8) * t + 9.802e-7) * t - 1.28315e-4) * t + 4.9247e-3;
    let b = (3.122e-8 * t - 1.517e-6) * t - 1.2331e-4;
    let a = (a + b * sr) * s;
    let b = ((1.8448e-11 * t - 2.3905e-9) * t + 1.17054e-7) * t - 2.9558e-6;
    let b = (b + 9.971e-8 * sr) * s;
    let c = (3.513e-13 * t - 1.7682e-11) * t + 5.540e-10;
    let c = (c - 1.4300e-12 * t * sr) * s;
    let cp2 = ((c * p + b) * p + a) * p;

    cp0 + cp1 + cp2
}

/// Speed of sound in seawater [m/s], Chen & Millero (1977).
pub fn sound_speed(salinity: f64, temperature: f64, pressure: f64) -> f64 {
    let s = salinity;
    let t = temperature;
    let p = pressure / 10.0; // bars
    let sr = sqrt(fabs(s));

    // S² term
    let d = 1.727e-3 - 7.9836e-6 * p;

    // S^(3/2) term
    let b1 = 7.3637e-5 + 1.7945e-7 * t;
    let b0 = -1.922e-2 - 4.42e-5 * t;
    let b = b0 + b1 * p;

    // S term
    let a3 = (-3.389e-13 * t + 6.649e-12) * t + 1.100e-10;
    let a2 = ((7.988e-12 * t - 1.6002e-10) * t + 9.1041e-9) * t - 3.9064e-7;
    let a1 = (((-2.0122e-10 * t + 1.0507e-8) * t - 6.4885e-8) * t - 1.2580e-5) * t + 9.4742e-5;
    let a0 = (((-3.21e-8 * t + 2.006e-6) * t + 7.164e-5) * t - 1.262e-2) * t + 1.389;
    let a = ((a3 * p + a2) * p + a1) * p + a0;

    // pure water
    let c3 = (-2.3643e-12 * t + 3.8504e-10) * t - 9.7729e-9;
    let c2 = (((1.0405e-12 * t - 2.5335e-10) * t + 2.5974e-8) * t - 1.7107e-6) * t + 3.1260e-5;
    let c1 = (((-6.1185e-10 * t + 1.3621e-7) * t - 8.1788e-6) * t + 6.8982e-4) * t + 0.153563;
    let c0 = ((((3.1464e-9 * t - 1.47800e-6) * t + 3.3420e-4) * t - 5.80852e-2) * t + 5.03711) * t
        + 1402.388;
    let c = ((c3 * p + c2) * p + c1) * p + c0;

    c + (a + b * sr + d * s) * s
}
