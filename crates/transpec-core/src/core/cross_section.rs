use crate::core::constants::{cross_section_cm2_to_m2, wavenumber_to_wavelength_um};
use crate::core::io::cross_section::{CrossSectionFile, CrossSectionFileError, CrossSectionRecord};
use crate::core::io::traits::TabulatedFile;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Read(#[from] CrossSectionFileError),
    #[error("At least 2 samples are required for interpolation, found {found}")]
    TooFewSamples { found: usize },
    #[error("Wavelength must be positive and finite, got {wavelength_um} µm")]
    InvalidWavelength { wavelength_um: f64 },
    #[error("Cross-section must be non-negative and finite, got {cross_section_m2} m² at {wavelength_um} µm")]
    InvalidCrossSection {
        wavelength_um: f64,
        cross_section_m2: f64,
    },
    #[error("Duplicate wavelength {wavelength_um} µm in table")]
    DuplicateWavelength { wavelength_um: f64 },
}

/// Absorption cross-section as a piecewise-linear function of wavelength.
///
/// Samples are held in strictly increasing wavelength order (µm) with
/// cross-sections in m²/molecule. Queries outside the tabulated range return
/// exactly zero: no data is treated as a transparent atmosphere.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionTable {
    wavelengths_um: Vec<f64>,
    cross_sections_m2: Vec<f64>,
}

impl CrossSectionTable {
    /// Reads a cross-section file and converts it to wavelength/SI units.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let records = CrossSectionFile::read_from_path(path)?;
        let table = Self::from_records(&records)?;
        let (first, last) = table.wavelength_range();
        info!(
            "Loaded {} cross-section samples covering {:.4}-{:.4} µm.",
            table.len(),
            first,
            last
        );
        Ok(table)
    }

    /// Builds a table from rows in file units (cm⁻¹, cm²/molecule).
    pub fn from_records(records: &[CrossSectionRecord]) -> Result<Self, TableError> {
        Self::from_samples(records.iter().map(|record| {
            (
                wavenumber_to_wavelength_um(record.wavenumber_cm),
                cross_section_cm2_to_m2(record.cross_section_cm2),
            )
        }))
    }

    /// Builds a table from `(wavelength µm, cross-section m²)` pairs in any order.
    pub fn from_samples(
        samples: impl IntoIterator<Item = (f64, f64)>,
    ) -> Result<Self, TableError> {
        let mut samples: Vec<(f64, f64)> = samples.into_iter().collect();
        if samples.len() < 2 {
            return Err(TableError::TooFewSamples {
                found: samples.len(),
            });
        }
        if let Some(&(wavelength_um, _)) = samples
            .iter()
            .find(|(w, _)| !(w.is_finite() && *w > 0.0))
        {
            return Err(TableError::InvalidWavelength { wavelength_um });
        }
        if let Some(&(wavelength_um, cross_section_m2)) = samples
            .iter()
            .find(|(_, sigma)| !(sigma.is_finite() && *sigma >= 0.0))
        {
            return Err(TableError::InvalidCrossSection {
                wavelength_um,
                cross_section_m2,
            });
        }

        samples.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = samples.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(TableError::DuplicateWavelength {
                wavelength_um: pair[0].0,
            });
        }

        let (wavelengths_um, cross_sections_m2) = samples.into_iter().unzip();
        Ok(Self {
            wavelengths_um,
            cross_sections_m2,
        })
    }

    /// Cross-section in m²/molecule at `wavelength_um`, or 0.0 outside the table.
    pub fn cross_section(&self, wavelength_um: f64) -> f64 {
        let (first, last) = self.wavelength_range();
        // Also rejects NaN.
        if !(wavelength_um >= first && wavelength_um <= last) {
            return 0.0;
        }

        let upper = self
            .wavelengths_um
            .partition_point(|&w| w < wavelength_um);
        if self.wavelengths_um[upper] == wavelength_um {
            return self.cross_sections_m2[upper];
        }

        let lower = upper - 1;
        let (x0, x1) = (self.wavelengths_um[lower], self.wavelengths_um[upper]);
        let (y0, y1) = (self.cross_sections_m2[lower], self.cross_sections_m2[upper]);
        y0 + (y1 - y0) * (wavelength_um - x0) / (x1 - x0)
    }

    pub fn cross_sections(&self, wavelengths_um: &[f64]) -> Vec<f64> {
        wavelengths_um
            .iter()
            .map(|&wavelength| self.cross_section(wavelength))
            .collect()
    }

    /// Inclusive `(shortest, longest)` tabulated wavelength in µm.
    pub fn wavelength_range(&self) -> (f64, f64) {
        (
            self.wavelengths_um[0],
            self.wavelengths_um[self.wavelengths_um.len() - 1],
        )
    }

    pub fn wavelengths_um(&self) -> &[f64] {
        &self.wavelengths_um
    }

    pub fn len(&self) -> usize {
        self.wavelengths_um.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths_um.is_empty()
    }
}
