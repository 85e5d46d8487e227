use crate::core::params::{AtmosphereParameters, ConfigError};
use crate::engine::hydrostatic::HydrostaticProfile;
use std::f64::consts::PI;

/// Line-of-sight column density in molecules/m² for a ray whose closest approach
/// to the planet center is `radius_m`.
///
/// Uses the closed form N = n(R)·√(2πRH), which assumes H ≪ R. The precondition is
/// reported by [`crate::engine::diagnostics::check_radius`], not enforced here.
#[inline]
pub fn column_density_of(profile: &HydrostaticProfile, radius_m: f64) -> f64 {
    let path_length = (2.0 * PI * radius_m * profile.scale_height()).sqrt();
    profile.number_density(radius_m) * path_length
}

pub fn column_density(params: &AtmosphereParameters, radius_m: f64) -> Result<f64, ConfigError> {
    let profile = HydrostaticProfile::from_parameters(params)?;
    Ok(column_density_of(&profile, radius_m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> AtmosphereParameters {
        AtmosphereParameters::earth_co2("co2.dat")
    }

    #[test]
    fn column_density_at_surface_matches_closed_form() {
        let params = earth();
        let profile = HydrostaticProfile::from_parameters(&params).unwrap();
        let expected = params.surface_density
            * (2.0 * PI * params.planet_radius * profile.scale_height()).sqrt();
        let n = column_density(&params, params.planet_radius).unwrap();
        assert!(((n - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn earth_surface_column_is_order_1e31() {
        let params = earth();
        let n = column_density(&params, params.planet_radius).unwrap();
        assert!(n > 1e30 && n < 1e32, "N = {n}");
    }

    #[test]
    fn column_density_decreases_above_the_surface() {
        let params = earth();
        let profile = HydrostaticProfile::from_parameters(&params).unwrap();
        let mut previous = f64::INFINITY;
        for step in 0..50 {
            let r = params.planet_radius + step as f64 * 2_000.0;
            let n = column_density_of(&profile, r);
            assert!(n < previous, "column density did not decrease at R = {r}");
            previous = n;
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let params = AtmosphereParameters {
            surface_density: -1.0,
            ..earth()
        };
        assert!(column_density(&params, 6.4e6).is_err());
    }
}
