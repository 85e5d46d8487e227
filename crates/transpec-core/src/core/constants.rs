/// Newtonian gravitational constant in m³/(kg·s²) (CODATA 2018).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Boltzmann constant in J/K (exact since the 2019 SI redefinition).
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

/// Avogadro constant in 1/mol (exact).
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_76e23;

/// Wavelength in µm of a wavenumber given in cm⁻¹: λ = `WAVENUMBER_TO_MICRONS` / ν.
pub const WAVENUMBER_TO_MICRONS: f64 = 1.0e4;

/// Multiplier from cm² to m².
pub const CM2_TO_M2: f64 = 1.0e-4;

#[inline]
pub fn wavenumber_to_wavelength_um(wavenumber_cm: f64) -> f64 {
    WAVENUMBER_TO_MICRONS / wavenumber_cm
}

#[inline]
pub fn cross_section_cm2_to_m2(cross_section_cm2: f64) -> f64 {
    cross_section_cm2 * CM2_TO_M2
}
