use crate::core::constants::{BOLTZMANN_CONSTANT, GRAVITATIONAL_CONSTANT};
use crate::core::params::{AtmosphereParameters, ConfigError};
use tracing::debug;

/// Isothermal barometric profile derived from validated atmosphere parameters.
///
/// Only the three quantities the density law needs are kept: the surface radius,
/// the surface number density and the scale height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrostaticProfile {
    surface_radius: f64,
    surface_density: f64,
    scale_height: f64,
}

impl HydrostaticProfile {
    pub fn from_parameters(params: &AtmosphereParameters) -> Result<Self, ConfigError> {
        params.validate()?;

        let gravity = gravity_unchecked(params);
        let scale_height =
            BOLTZMANN_CONSTANT * params.temperature / (params.molecule_mass * gravity);
        debug!(
            "Surface gravity {:.4} m/s², scale height {:.1} m.",
            gravity, scale_height
        );

        Ok(Self {
            surface_radius: params.planet_radius,
            surface_density: params.surface_density,
            scale_height,
        })
    }

    /// Scale height H = k_B·T / (m·g) in m.
    pub fn scale_height(&self) -> f64 {
        self.scale_height
    }

    pub fn surface_radius(&self) -> f64 {
        self.surface_radius
    }

    pub fn surface_density(&self) -> f64 {
        self.surface_density
    }

    /// Number density in molecules/m³ at `radius_m` from the planet center.
    ///
    /// Heights below the surface are not clamped: the exponential keeps growing,
    /// which is only physical close to the surface.
    pub fn number_density(&self, radius_m: f64) -> f64 {
        let height = radius_m - self.surface_radius;
        self.surface_density * (-height / self.scale_height).exp()
    }
}

#[inline]
fn gravity_unchecked(params: &AtmosphereParameters) -> f64 {
    GRAVITATIONAL_CONSTANT * params.planet_mass / params.planet_radius.powi(2)
}

/// Newtonian surface gravity g = G·M / R² in m/s².
pub fn surface_gravity(params: &AtmosphereParameters) -> Result<f64, ConfigError> {
    params.validate()?;
    Ok(gravity_unchecked(params))
}

pub fn scale_height(params: &AtmosphereParameters) -> Result<f64, ConfigError> {
    HydrostaticProfile::from_parameters(params).map(|profile| profile.scale_height())
}

pub fn number_density(params: &AtmosphereParameters, radius_m: f64) -> Result<f64, ConfigError> {
    HydrostaticProfile::from_parameters(params).map(|profile| profile.number_density(radius_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> AtmosphereParameters {
        AtmosphereParameters::earth_co2("co2.dat")
    }

    fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
        ((a - b) / b).abs() < tolerance
    }

    #[test]
    fn earth_surface_gravity_is_close_to_9_8() {
        let g = surface_gravity(&earth()).unwrap();
        assert!((9.7..9.9).contains(&g), "g = {g}");
    }

    #[test]
    fn earth_co2_scale_height_is_a_few_kilometres() {
        let h = scale_height(&earth()).unwrap();
        assert!(h > 4000.0 && h < 9000.0, "H = {h}");
    }

    #[test]
    fn scale_height_matches_closed_form() {
        let params = earth();
        let g = GRAVITATIONAL_CONSTANT * params.planet_mass / params.planet_radius.powi(2);
        let expected = BOLTZMANN_CONSTANT * params.temperature / (params.molecule_mass * g);
        assert!(relative_eq(scale_height(&params).unwrap(), expected, 1e-12));
    }

    #[test]
    fn scale_height_scales_linearly_with_temperature() {
        let cold = scale_height(&earth()).unwrap();
        let hot = scale_height(&AtmosphereParameters {
            temperature: 500.0,
            ..earth()
        })
        .unwrap();
        assert!(relative_eq(hot, 2.0 * cold, 1e-12));
    }

    #[test]
    fn zero_radius_is_a_configuration_error() {
        let params = AtmosphereParameters {
            planet_radius: 0.0,
            ..earth()
        };
        assert!(matches!(
            scale_height(&params),
            Err(ConfigError::NonPositive { name: "Rpl", .. })
        ));
    }

    #[test]
    fn zero_molecule_mass_is_a_configuration_error() {
        let params = AtmosphereParameters {
            molecule_mass: 0.0,
            ..earth()
        };
        assert!(matches!(
            scale_height(&params),
            Err(ConfigError::NonPositive { name: "mgas", .. })
        ));
    }

    #[test]
    fn number_density_at_surface_equals_surface_density_exactly() {
        let params = earth();
        let n = number_density(&params, params.planet_radius).unwrap();
        assert_eq!(n, params.surface_density);
    }

    #[test]
    fn number_density_drops_by_e_over_one_scale_height() {
        let profile = HydrostaticProfile::from_parameters(&earth()).unwrap();
        let r = profile.surface_radius() + profile.scale_height();
        let ratio = profile.number_density(r) / profile.surface_density();
        assert!(relative_eq(ratio, (-1.0f64).exp(), 1e-12));
    }

    #[test]
    fn number_density_below_surface_exceeds_surface_density() {
        let profile = HydrostaticProfile::from_parameters(&earth()).unwrap();
        let n = profile.number_density(profile.surface_radius() - 1000.0);
        assert!(n > profile.surface_density());
    }
}
