//! # transpec Core Library
//!
//! Wavelength-dependent optical depth and transmission of an isothermal planetary
//! atmosphere, seen along a line of sight that passes a given distance from the
//! planet center.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture in which data only flows
//! downward.
//!
//! - **[`core`]: The Foundation.** Physical constants, the immutable
//!   [`AtmosphereParameters`](core::params::AtmosphereParameters) record and its
//!   configuration loading, the cross-section file reader, and the interpolated
//!   [`CrossSectionTable`](core::cross_section::CrossSectionTable).
//!
//! - **[`engine`]: The Physical Model.** The isothermal hydrostatic profile, the
//!   closed-form line-of-sight column density, and the
//!   [`Atmosphere`](engine::optical_depth::Atmosphere) evaluator that combines them
//!   with the cross-section table into optical depth and transmission.
//!
//! - **[`workflows`]: The Public API.** Entry points that build a model from
//!   explicitly supplied parameters and evaluate it, including the parallel
//!   transmission grid over several distances.
//!
//! ```ignore
//! use transpec::core::params::AtmosphereParameters;
//! use transpec::workflows::transmission;
//!
//! let params = AtmosphereParameters::earth_co2("CO2_mini-project_1.dat.txt");
//! let (tau, transmission) = transmission::optical_depth(&params, &[4.3], 6.371e6)?;
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
