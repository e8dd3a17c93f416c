//! UNESCO 1983 algorithms for fundamental properties of seawater
//! (Fofonoff & Millard, UNESCO Technical Papers in Marine Science 44).
//!
//! Every function here is a pure single-point evaluation on `f64` scalars:
//! no allocation, no shared state, safe to call from any number of threads.
//!
//! Units:
//! - conductivity: ratio to standard seawater (S = 35, 15 °C, 0 dbar)
//! - salinity: PSS-78
//! - temperature: °C
//! - pressure: dbar
//! - latitude: degrees
//!
//! No input is range-checked. Apart from the two documented clamps in
//! [`salinity::salinity`] and [`salinity::conductivity`], inputs that push a
//! denominator to zero come back as `NaN` or `±inf`; treat a non-finite
//! result as an out-of-range input.

pub mod density;
pub mod physical;
pub(crate) mod polynomials;
pub mod salinity;
pub mod thermal;
