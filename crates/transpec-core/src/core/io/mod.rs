//! Reading of tabulated spectroscopic data files.
//!
//! The [`traits::TabulatedFile`] trait gives every supported format the same
//! reader/path API; [`cross_section`] implements it for the whitespace-delimited
//! absorption cross-section format.

pub mod cross_section;
pub mod traits;
