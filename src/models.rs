use serde::{Deserialize, Serialize};

use crate::unesco::density::specific_volume_anomaly;
use crate::unesco::physical::{depth, freezing_point, sound_speed, specific_heat};
use crate::unesco::salinity::{conductivity_report, salinity};
use crate::unesco::thermal::{adiabatic_temperature_gradient, potential_temperature};

/// A single-point property request, tagged by `"property"`.
///
/// Pressures default to `0.0` dbar (sea surface) when omitted, so
/// `{"property": "potential_temperature", "salinity": 35, "temperature": 10,
/// "pressure": 4000}` is referenced to the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", rename_all = "snake_case")]
pub enum Query {
    Salinity {
        conductivity: f64,
        temperature: f64,
        #[serde(default)]
        pressure: f64,
    },
    Conductivity {
        salinity: f64,
        temperature: f64,
        #[serde(default)]
        pressure: f64,
    },
    SpecificVolumeAnomaly {
        salinity: f64,
        temperature: f64,
        #[serde(default)]
        pressure: f64,
    },
    Depth {
        pressure: f64,
        latitude: f64,
    },
    FreezingPoint {
        salinity: f64,
        #[serde(default)]
        pressure: f64,
    },
    SpecificHeat {
        salinity: f64,
        temperature: f64,
        #[serde(default)]
        pressure: f64,
    },
    AdiabaticTemperatureGradient {
        salinity: f64,
        temperature: f64,
        #[serde(default)]
        pressure: f64,
    },
    PotentialTemperature {
        salinity: f64,
        temperature: f64,
        pressure: f64,
        #[serde(default)]
        reference_pressure: f64,
    },
    SoundSpeed {
        salinity: f64,
        temperature: f64,
        #[serde(default)]
        pressure: f64,
    },
}

/// Result of evaluating a [`Query`].
///
/// `sigma` is only set for the specific volume anomaly; `iterations` and
/// `residual` only for conductivity (Newton diagnostics).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub property: &'static str,
    pub value: f64,
    pub unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual: Option<f64>,
}

impl Evaluation {
    fn scalar(property: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            property,
            value,
            unit,
            sigma: None,
            iterations: None,
            residual: None,
        }
    }

    /// `true` when every reported number is finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
            && self.sigma.is_none_or(f64::is_finite)
            && self.residual.is_none_or(f64::is_finite)
    }
}

impl Query {
    /// Snake-case name of the requested property, as used in the `"property"` tag.
    pub fn property(&self) -> &'static str {
        match self {
            Query::Salinity { .. } => "salinity",
            Query::Conductivity { .. } => "conductivity",
            Query::SpecificVolumeAnomaly { .. } => "specific_volume_anomaly",
            Query::Depth { .. } => "depth",
            Query::FreezingPoint { .. } => "freezing_point",
            Query::SpecificHeat { .. } => "specific_heat",
            Query::AdiabaticTemperatureGradient { .. } => "adiabatic_temperature_gradient",
            Query::PotentialTemperature { .. } => "potential_temperature",
            Query::SoundSpeed { .. } => "sound_speed",
        }
    }

    /// Evaluate the query once.
    pub fn evaluate(&self) -> Evaluation {
        let property = self.property();
        match *self {
            Query::Salinity {
                conductivity,
                temperature,
                pressure,
            } => Evaluation::scalar(property, salinity(conductivity, temperature, pressure), "PSS-78"),
            Query::Conductivity {
                salinity,
                temperature,
                pressure,
            } => {
                let report = conductivity_report(salinity, temperature, pressure);
                Evaluation {
                    iterations: Some(report.iterations),
                    residual: Some(report.residual),
                    ..Evaluation::scalar(property, report.conductivity, "ratio")
                }
            }
            Query::SpecificVolumeAnomaly {
                salinity,
                temperature,
                pressure,
            } => {
                let out = specific_volume_anomaly(salinity, temperature, pressure);
                Evaluation {
                    sigma: Some(out.sigma),
                    ..Evaluation::scalar(property, out.anomaly, "1e-8 m^3/kg")
                }
            }
            Query::Depth { pressure, latitude } => {
                Evaluation::scalar(property, depth(pressure, latitude), "m")
            }
            Query::FreezingPoint { salinity, pressure } => {
                Evaluation::scalar(property, freezing_point(salinity, pressure), "degC")
            }
            Query::SpecificHeat {
                salinity,
                temperature,
                pressure,
            } => Evaluation::scalar(
                property,
                specific_heat(salinity, temperature, pressure),
                "J/(kg degC)",
            ),
            Query::AdiabaticTemperatureGradient {
                salinity,
                temperature,
                pressure,
            } => Evaluation::scalar(
                property,
                adiabatic_temperature_gradient(salinity, temperature, pressure),
                "degC/dbar",
            ),
            Query::PotentialTemperature {
                salinity,
                temperature,
                pressure,
                reference_pressure,
            } => Evaluation::scalar(
                property,
                potential_temperature(salinity, temperature, pressure, reference_pressure),
                "degC",
            ),
            Query::SoundSpeed {
                salinity,
                temperature,
                pressure,
            } => Evaluation::scalar(property, sound_speed(salinity, temperature, pressure), "m/s"),
        }
    }
}
