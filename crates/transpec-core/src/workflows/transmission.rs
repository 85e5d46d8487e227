use crate::core::params::{AtmosphereParameters, ConfigError, ModelConfig};
use crate::engine::error::ModelError;
use crate::engine::optical_depth::{Atmosphere, Extinction, Spectrum};
use tracing::{info, instrument};

/// Builds an [`Atmosphere`] from `params` and returns `(τ, T)` for each wavelength
/// at `radius_m`. The table is loaded on every call; keep the model around with
/// [`Atmosphere::new`] for repeated evaluations.
#[instrument(skip(params, wavelengths_um), fields(n_wavelengths = wavelengths_um.len()))]
pub fn optical_depth(
    params: &AtmosphereParameters,
    wavelengths_um: &[f64],
    radius_m: f64,
) -> Result<(Vec<f64>, Vec<f64>), ModelError> {
    let model = Atmosphere::new(params.clone())?;
    Ok(model.optical_depth(wavelengths_um, radius_m))
}

#[instrument(skip(params, wavelengths_um), fields(n_wavelengths = wavelengths_um.len()))]
pub fn spectrum(
    params: &AtmosphereParameters,
    wavelengths_um: &[f64],
    radius_m: f64,
) -> Result<Spectrum, ModelError> {
    let model = Atmosphere::new(params.clone())?;
    Ok(model.spectrum(wavelengths_um, radius_m))
}

/// Evaluates the `lambda`/`R` reference query carried by a configuration file.
#[instrument(skip_all, name = "reference_query")]
pub fn evaluate_reference(config: &ModelConfig) -> Result<Extinction, ModelError> {
    let reference = config
        .reference
        .ok_or(ConfigError::MissingParameter("lambda"))?;
    let model = Atmosphere::new(config.parameters.clone())?;
    model.diagnose_and_log(reference.radius_m);
    let extinction = model.extinction(reference.wavelength_um, reference.radius_m);
    info!(
        "Reference query at {} µm, R = {} m: tau = {:.6e}, T = {:.6e}.",
        reference.wavelength_um,
        reference.radius_m,
        extinction.optical_depth,
        extinction.transmission
    );
    Ok(extinction)
}
