/// Adiabatic temperature gradient [°C/dbar] (Bryden, 1973).
///
/// # Arguments
/// * `salinity` - practical salinity (PSS-78)
/// * `temperature` - in-situ temperature [°C]
/// * `pressure` - pressure [dbar]
pub fn adiabatic_temperature_gradient(salinity: f64, temperature: f64, pressure: f64) -> f64 {
    let t = temperature;
    let p = pressure;
    let ds = salinity - 35.0;

    (((-2.1687e-16 * t + 1.8676e-14) * t - 4.6206e-13) * p
        + ((2.7759e-12 * t - 1.1351e-10) * ds
            + ((-5.4481e-14 * t + 8.733e-12) * t - 6.7795e-10) * t
            + 1.8741e-8))
        * p
        + (-4.2393e-8 * t + 1.8932e-6) * ds
        + ((6.6228e-10 * t - 6.836e-8) * t + 8.5258e-6) * t
        + 3.5803e-5
}

/// Potential temperature [°C] of a parcel moved adiabatically from
/// `pressure` to `reference_pressure` (both dbar).
///
/// Integrates [`adiabatic_temperature_gradient`] over the whole interval in a
/// single fixed Runge-Kutta step (Fofonoff, 1977): always four gradient
/// evaluations, whatever the interval length.
pub fn potential_temperature(
    salinity: f64,
    temperature: f64,
    pressure: f64,
    reference_pressure: f64,
) -> f64 {
    let s = salinity;
    let h = reference_pressure - pressure;

    let mut xk = h * adiabatic_temperature_gradient(s, temperature, pressure);
    let mut t = temperature + 0.5 * xk;
    let mut q = xk;
    let mut p = pressure + 0.5 * h;

    xk = h * adiabatic_temperature_gradient(s, t, p);
    t += 0.29289322 * (xk - q);
    q = 0.58578644 * xk + 0.121320344 * q;

    xk = h * adiabatic_temperature_gradient(s, t, p);
    t += 1.707106781 * (xk - q);
    q = 3.414213562 * xk - 4.121320344 * q;

    p += 0.5 * h;
    xk = h * adiabatic_temperature_gradient(s, t, p);

    t + (xk - 2.0 * q) / 0.6
}
