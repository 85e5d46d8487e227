use crate::core::cross_section::CrossSectionTable;
use crate::core::params::{AtmosphereParameters, ConfigError};
use crate::engine::column::column_density_of;
use crate::engine::diagnostics::{DomainWarning, check_radius};
use crate::engine::error::ModelError;
use crate::engine::hydrostatic::HydrostaticProfile;
use tracing::{instrument, trace, warn};

/// Optical depth and transmission at one wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extinction {
    pub optical_depth: f64,
    pub transmission: f64,
}

impl Extinction {
    #[inline]
    pub fn from_optical_depth(optical_depth: f64) -> Self {
        Self {
            optical_depth,
            transmission: (-optical_depth).exp(),
        }
    }
}

/// Optical depth and transmission over a wavelength grid at a fixed distance from
/// the planet center. `optical_depth` and `transmission` have the same length and
/// order as `wavelengths_um`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub radius_m: f64,
    pub wavelengths_um: Vec<f64>,
    pub optical_depth: Vec<f64>,
    pub transmission: Vec<f64>,
    pub warnings: Vec<DomainWarning>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.wavelengths_um.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths_um.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, Extinction)> + '_ {
        self.wavelengths_um
            .iter()
            .zip(self.optical_depth.iter().zip(&self.transmission))
            .map(|(&wavelength, (&optical_depth, &transmission))| {
                (
                    wavelength,
                    Extinction {
                        optical_depth,
                        transmission,
                    },
                )
            })
    }
}

/// A single-species isothermal atmosphere ready for evaluation.
///
/// Holds the validated parameters, the derived hydrostatic profile and the loaded
/// cross-section table. Nothing is mutated after construction, so a model can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Atmosphere {
    parameters: AtmosphereParameters,
    profile: HydrostaticProfile,
    table: CrossSectionTable,
}

impl Atmosphere {
    /// Validates `parameters` and loads the cross-section table they point to.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Config`] for missing or non-positive parameters and
    /// [`ModelError::DataLoad`] if the table cannot be read or has fewer than two
    /// samples. No model is returned in either case.
    #[instrument(skip_all, fields(table = %parameters.cross_section_file.display()))]
    pub fn new(parameters: AtmosphereParameters) -> Result<Self, ModelError> {
        let profile = HydrostaticProfile::from_parameters(&parameters)?;
        let table = CrossSectionTable::load(&parameters.cross_section_file).map_err(|source| {
            ModelError::DataLoad {
                path: parameters.cross_section_file.clone(),
                source,
            }
        })?;

        Ok(Self {
            parameters,
            profile,
            table,
        })
    }

    /// Builds a model around an already constructed table; `cross_section_file` is
    /// kept for reference only.
    pub fn with_table(
        parameters: AtmosphereParameters,
        table: CrossSectionTable,
    ) -> Result<Self, ConfigError> {
        let profile = HydrostaticProfile::from_parameters(&parameters)?;
        Ok(Self {
            parameters,
            profile,
            table,
        })
    }

    pub fn parameters(&self) -> &AtmosphereParameters {
        &self.parameters
    }

    pub fn profile(&self) -> &HydrostaticProfile {
        &self.profile
    }

    pub fn table(&self) -> &CrossSectionTable {
        &self.table
    }

    pub fn scale_height(&self) -> f64 {
        self.profile.scale_height()
    }

    pub fn number_density(&self, radius_m: f64) -> f64 {
        self.profile.number_density(radius_m)
    }

    pub fn column_density(&self, radius_m: f64) -> f64 {
        column_density_of(&self.profile, radius_m)
    }

    /// Domain warnings for a query at `radius_m`, without logging them.
    pub fn diagnose(&self, radius_m: f64) -> Vec<DomainWarning> {
        check_radius(&self.profile, radius_m)
    }

    /// Like [`Atmosphere::diagnose`], but also emits each warning at `WARN` level.
    pub fn diagnose_and_log(&self, radius_m: f64) -> Vec<DomainWarning> {
        let warnings = self.diagnose(radius_m);
        for warning in &warnings {
            warn!("{}", warning);
        }
        warnings
    }

    /// Optical depth τ = N(R)·σ(λ) and transmission exp(-τ) at one wavelength.
    ///
    /// Domain warnings are not checked here; per-wavelength loops would repeat them.
    /// Use [`Atmosphere::spectrum`] or [`Atmosphere::diagnose_and_log`] to get them.
    pub fn extinction(&self, wavelength_um: f64, radius_m: f64) -> Extinction {
        let column = self.column_density(radius_m);
        Extinction::from_optical_depth(optical_depth_of(
            column,
            self.table.cross_section(wavelength_um),
        ))
    }

    /// Evaluates every wavelength in `wavelengths_um` at the same `radius_m`.
    pub fn spectrum(&self, wavelengths_um: &[f64], radius_m: f64) -> Spectrum {
        let warnings = self.diagnose_and_log(radius_m);
        let column = self.column_density(radius_m);
        trace!(
            "Column density {:.4e} m⁻² at R = {} m for {} wavelengths.",
            column,
            radius_m,
            wavelengths_um.len()
        );

        let optical_depth: Vec<f64> = wavelengths_um
            .iter()
            .map(|&wavelength| optical_depth_of(column, self.table.cross_section(wavelength)))
            .collect();
        let transmission = optical_depth.iter().map(|tau| (-tau).exp()).collect();

        Spectrum {
            radius_m,
            wavelengths_um: wavelengths_um.to_vec(),
            optical_depth,
            transmission,
            warnings,
        }
    }

    /// `(τ, T)` for each wavelength, in input order.
    pub fn optical_depth(&self, wavelengths_um: &[f64], radius_m: f64) -> (Vec<f64>, Vec<f64>) {
        let spectrum = self.spectrum(wavelengths_um, radius_m);
        (spectrum.optical_depth, spectrum.transmission)
    }
}

/// τ = N·σ, with no absorption wherever σ is zero even if the column diverges.
#[inline]
fn optical_depth_of(column: f64, cross_section: f64) -> f64 {
    if cross_section == 0.0 {
        0.0
    } else {
        column * cross_section
    }
}
