//! High-level entry points.
//!
//! - [`transmission`] builds a model from explicitly passed parameters and evaluates
//!   it in one call, including the reference query shipped with a configuration.
//! - [`grid`] evaluates one model over many distances from the planet center in
//!   parallel.

pub mod grid;
pub mod transmission;
