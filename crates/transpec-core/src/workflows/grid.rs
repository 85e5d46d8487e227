use crate::engine::optical_depth::{Atmosphere, Spectrum};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Evaluates `model` on the same wavelength grid at every distance in `radii_m`.
///
/// Radii are processed in parallel; the output has one [`Spectrum`] per radius in
/// input order.
#[instrument(skip_all, fields(n_wavelengths = wavelengths_um.len(), n_radii = radii_m.len()))]
pub fn transmission_grid(
    model: &Atmosphere,
    wavelengths_um: &[f64],
    radii_m: &[f64],
) -> Vec<Spectrum> {
    let spectra: Vec<Spectrum> = radii_m
        .par_iter()
        .map(|&radius_m| model.spectrum(wavelengths_um, radius_m))
        .collect();

    let flagged = spectra.iter().filter(|s| !s.warnings.is_empty()).count();
    debug!(
        "Evaluated {} radii, {} with domain warnings.",
        spectra.len(),
        flagged
    );
    spectra
}
