//! # Core Module
//!
//! Stateless building blocks of the transmission model.
//!
//! - **Physical Constants** ([`constants`]) - Gravitational and Boltzmann constants and unit conversions
//! - **Parameters** ([`params`]) - The immutable atmosphere record, its builder and TOML loading
//! - **File I/O** ([`io`]) - Reading tabulated absorption cross-section files
//! - **Interpolation** ([`cross_section`]) - Continuous cross-section lookup over wavelength

pub mod constants;
pub mod cross_section;
pub mod io;
pub mod params;
