use crate::engine::hydrostatic::HydrostaticProfile;
use std::fmt;

/// Largest scale-height to radius ratio for which the column-density closed form
/// is considered accurate.
pub const MAX_SCALE_HEIGHT_RATIO: f64 = 0.1;

/// Non-fatal notice that a query lies outside the regime of the approximations.
/// The model still returns the value of its formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainWarning {
    /// R ≤ 0: the line-of-sight geometry is undefined and the column density is NaN.
    NonPositiveRadius { radius_m: f64 },
    /// R < Rpl: the density law is extrapolated below the surface.
    BelowSurface { radius_m: f64, depth_m: f64 },
    /// H/R exceeds [`MAX_SCALE_HEIGHT_RATIO`].
    ThickAtmosphere {
        radius_m: f64,
        scale_height_m: f64,
        ratio: f64,
    },
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius { radius_m } => write!(
                f,
                "distance from planet center must be positive, got {radius_m} m"
            ),
            Self::BelowSurface { radius_m, depth_m } => write!(
                f,
                "R = {radius_m} m lies {depth_m:.1} m below the surface; density is extrapolated"
            ),
            Self::ThickAtmosphere {
                radius_m,
                scale_height_m,
                ratio,
            } => write!(
                f,
                "scale height {scale_height_m:.1} m is {ratio:.3} of R = {radius_m} m \
                 (limit {MAX_SCALE_HEIGHT_RATIO}); column density approximation is inaccurate"
            ),
        }
    }
}

pub fn check_radius(profile: &HydrostaticProfile, radius_m: f64) -> Vec<DomainWarning> {
    if radius_m.is_nan() || radius_m <= 0.0 {
        return vec![DomainWarning::NonPositiveRadius { radius_m }];
    }

    let mut warnings = Vec::new();
    if radius_m < profile.surface_radius() {
        warnings.push(DomainWarning::BelowSurface {
            radius_m,
            depth_m: profile.surface_radius() - radius_m,
        });
    }
    let ratio = profile.scale_height() / radius_m;
    if ratio > MAX_SCALE_HEIGHT_RATIO {
        warnings.push(DomainWarning::ThickAtmosphere {
            radius_m,
            scale_height_m: profile.scale_height(),
            ratio,
        });
    }
    warnings
}
