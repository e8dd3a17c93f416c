#![cfg_attr(not(feature = "std"), no_std)]

pub mod adapters;
#[cfg(feature = "std")]
pub mod error;
mod math;
pub mod models;
pub mod unesco;

#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::models::{Evaluation, Query};
pub use crate::unesco::density::{SpecificVolumeAnomaly, specific_volume_anomaly};
pub use crate::unesco::physical::{depth, freezing_point, sound_speed, specific_heat};
pub use crate::unesco::salinity::{
    ConductivityReport, conductivity, conductivity_report, salinity,
};
pub use crate::unesco::thermal::{adiabatic_temperature_gradient, potential_temperature};
