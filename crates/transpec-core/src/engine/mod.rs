//! # Engine Module
//!
//! The physical model. Each step is a pure function of the immutable parameters,
//! composed in a strict pipeline:
//!
//! 1. [`hydrostatic`] - surface gravity, isothermal scale height and the barometric
//!    number-density law.
//! 2. [`column`] - closed-form line-of-sight column density through a curved,
//!    exponentially thinning atmosphere.
//! 3. [`optical_depth`] - the [`Atmosphere`](optical_depth::Atmosphere) model that
//!    combines the interpolated cross-section with the column density into optical
//!    depth and transmission.
//!
//! [`diagnostics`] flags queries outside the regime where the approximations hold,
//! and [`error`] collects the construction failures.

pub mod column;
pub mod diagnostics;
pub mod error;
pub mod hydrostatic;
pub mod optical_depth;
