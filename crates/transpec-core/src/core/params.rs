use crate::core::constants::AVOGADRO_CONSTANT;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{name}' must be strictly positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("Parameters '{0}' and '{1}' are mutually exclusive")]
    Conflicting(&'static str, &'static str),
    #[error("Reference query is incomplete: 'lambda' and 'R' must be given together")]
    IncompleteReference,
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Bulk properties of a single-species isothermal atmosphere, in SI units.
///
/// The record is plain data; [`AtmosphereParameters::validate`] enforces that every
/// physical quantity is strictly positive and finite. Model construction always
/// validates, so an invalid record can exist but can never be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphereParameters {
    /// Planetary mass `Mpl` in kg.
    pub planet_mass: f64,
    /// Planetary radius `Rpl` in m.
    pub planet_radius: f64,
    /// Atmospheric temperature `Tatm` in K.
    pub temperature: f64,
    /// Surface number density `rho_surf` in molecules/m³.
    pub surface_density: f64,
    /// Mass of one gas molecule `mgas` in kg.
    pub molecule_mass: f64,
    /// Tabulated absorption cross-section file.
    pub cross_section_file: PathBuf,
}

impl AtmosphereParameters {
    pub fn builder() -> AtmosphereParametersBuilder {
        AtmosphereParametersBuilder::new()
    }

    /// Earth-sized planet with a 250 K CO2 atmosphere.
    pub fn earth_co2(cross_section_file: impl Into<PathBuf>) -> Self {
        Self {
            planet_mass: 5.972e24,
            planet_radius: 6.371e6,
            temperature: 250.0,
            surface_density: 2.5e25,
            molecule_mass: 44.01e-3 / 6.022e23,
            cross_section_file: cross_section_file.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("Mpl", self.planet_mass)?;
        require_positive("Rpl", self.planet_radius)?;
        require_positive("Tatm", self.temperature)?;
        require_positive("rho_surf", self.surface_density)?;
        require_positive("mgas", self.molecule_mass)?;
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[derive(Default)]
pub struct AtmosphereParametersBuilder {
    planet_mass: Option<f64>,
    planet_radius: Option<f64>,
    temperature: Option<f64>,
    surface_density: Option<f64>,
    molecule_mass: Option<f64>,
    molar_mass: Option<f64>,
    cross_section_file: Option<PathBuf>,
}

impl AtmosphereParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planet_mass(mut self, kg: f64) -> Self {
        self.planet_mass = Some(kg);
        self
    }
    pub fn planet_radius(mut self, m: f64) -> Self {
        self.planet_radius = Some(m);
        self
    }
    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn surface_density(mut self, per_m3: f64) -> Self {
        self.surface_density = Some(per_m3);
        self
    }
    pub fn molecule_mass(mut self, kg: f64) -> Self {
        self.molecule_mass = Some(kg);
        self
    }
    /// Molar mass in kg/mol, converted to a per-molecule mass on build.
    pub fn molar_mass(mut self, kg_per_mol: f64) -> Self {
        self.molar_mass = Some(kg_per_mol);
        self
    }
    pub fn cross_section_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cross_section_file = Some(path.into());
        self
    }

    pub fn build(self) -> Result<AtmosphereParameters, ConfigError> {
        let molecule_mass = match (self.molecule_mass, self.molar_mass) {
            (Some(_), Some(_)) => return Err(ConfigError::Conflicting("mgas", "molar_mass")),
            (Some(mgas), None) => mgas,
            (None, Some(molar)) => require_positive("molar_mass", molar)? / AVOGADRO_CONSTANT,
            (None, None) => return Err(ConfigError::MissingParameter("mgas")),
        };

        let params = AtmosphereParameters {
            planet_mass: self
                .planet_mass
                .ok_or(ConfigError::MissingParameter("Mpl"))?,
            planet_radius: self
                .planet_radius
                .ok_or(ConfigError::MissingParameter("Rpl"))?,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("Tatm"))?,
            surface_density: self
                .surface_density
                .ok_or(ConfigError::MissingParameter("rho_surf"))?,
            molecule_mass,
            cross_section_file: self
                .cross_section_file
                .ok_or(ConfigError::MissingParameter("cross_section_file"))?,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Default evaluation point shipped with a parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceQuery {
    pub wavelength_um: f64,
    pub radius_m: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub parameters: AtmosphereParameters,
    pub reference: Option<ReferenceQuery>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(rename = "Mpl")]
    planet_mass: Option<f64>,
    #[serde(rename = "Rpl")]
    planet_radius: Option<f64>,
    #[serde(rename = "Tatm")]
    temperature: Option<f64>,
    #[serde(rename = "rho_surf")]
    surface_density: Option<f64>,
    #[serde(rename = "mgas")]
    molecule_mass: Option<f64>,
    molar_mass: Option<f64>,
    cross_section_file: Option<PathBuf>,
    #[serde(rename = "lambda")]
    reference_wavelength: Option<f64>,
    #[serde(rename = "R")]
    reference_radius: Option<f64>,
}

impl ModelConfig {
    /// Reads a TOML configuration file. A relative `cross_section_file` is resolved
    /// against the directory containing the configuration file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base_dir).map_err(|e| match e {
            ConfigError::Toml { source, .. } => ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parses configuration text, resolving relative table paths against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })?;
        debug!("Parsed configuration file model: {:?}", file);

        let mut builder = AtmosphereParametersBuilder::new();
        if let Some(v) = file.planet_mass {
            builder = builder.planet_mass(v);
        }
        if let Some(v) = file.planet_radius {
            builder = builder.planet_radius(v);
        }
        if let Some(v) = file.temperature {
            builder = builder.temperature(v);
        }
        if let Some(v) = file.surface_density {
            builder = builder.surface_density(v);
        }
        if let Some(v) = file.molecule_mass {
            builder = builder.molecule_mass(v);
        }
        if let Some(v) = file.molar_mass {
            builder = builder.molar_mass(v);
        }
        if let Some(path) = file.cross_section_file {
            let resolved = if path.is_relative() {
                base_dir.join(path)
            } else {
                path
            };
            builder = builder.cross_section_file(resolved);
        }
        let parameters = builder.build()?;

        let reference = match (file.reference_wavelength, file.reference_radius) {
            (Some(wavelength), Some(radius)) => Some(ReferenceQuery {
                wavelength_um: require_positive("lambda", wavelength)?,
                radius_m: require_positive("R", radius)?,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteReference),
        };

        Ok(Self {
            parameters,
            reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const EARTH_CONFIG: &str = r#"
        Mpl = 5.972e24
        Rpl = 6.371e6
        Tatm = 250.0
        rho_surf = 2.5e25
        mgas = 7.3082e-26
        cross_section_file = "co2.dat"
    "#;

    fn complete_builder() -> AtmosphereParametersBuilder {
        AtmosphereParametersBuilder::new()
            .planet_mass(5.972e24)
            .planet_radius(6.371e6)
            .temperature(250.0)
            .surface_density(2.5e25)
            .molecule_mass(7.3e-26)
            .cross_section_file("co2.dat")
    }

    #[test]
    fn builder_succeeds_with_all_parameters() {
        let params = complete_builder().build().unwrap();
        assert_eq!(params.planet_radius, 6.371e6);
        assert_eq!(params.cross_section_file, PathBuf::from("co2.dat"));
    }

    #[test]
    fn builder_reports_missing_parameter_by_name() {
        let result = AtmosphereParametersBuilder::new()
            .planet_mass(5.972e24)
            .temperature(250.0)
            .surface_density(2.5e25)
            .molecule_mass(7.3e-26)
            .cross_section_file("co2.dat")
            .build();
        assert!(matches!(result, Err(ConfigError::MissingParameter("Rpl"))));
    }

    #[test]
    fn builder_rejects_zero_radius() {
        let result = complete_builder().planet_radius(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::NonPositive { name: "Rpl", .. })
        ));
    }

    #[test]
    fn builder_rejects_negative_and_nan_values() {
        let negative = complete_builder().temperature(-1.0).build();
        assert!(matches!(
            negative,
            Err(ConfigError::NonPositive { name: "Tatm", .. })
        ));
        let nan = complete_builder().surface_density(f64::NAN).build();
        assert!(matches!(
            nan,
            Err(ConfigError::NonPositive {
                name: "rho_surf",
                ..
            })
        ));
    }

    #[test]
    fn builder_converts_molar_mass_to_molecule_mass() {
        let params = AtmosphereParametersBuilder::new()
            .planet_mass(5.972e24)
            .planet_radius(6.371e6)
            .temperature(250.0)
            .surface_density(2.5e25)
            .molar_mass(44.01e-3)
            .cross_section_file("co2.dat")
            .build()
            .unwrap();
        let expected = 44.01e-3 / AVOGADRO_CONSTANT;
        assert!((params.molecule_mass - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn builder_rejects_both_molecule_and_molar_mass() {
        let result = complete_builder().molar_mass(44.01e-3).build();
        assert!(matches!(
            result,
            Err(ConfigError::Conflicting("mgas", "molar_mass"))
        ));
    }

    #[test]
    fn earth_co2_preset_is_valid() {
        let params = AtmosphereParameters::earth_co2("co2.dat");
        assert!(params.validate().is_ok());
        assert_eq!(params.planet_mass, 5.972e24);
        assert_eq!(params.temperature, 250.0);
    }

    #[test]
    fn error_message_names_the_offending_parameter() {
        let err = complete_builder().molecule_mass(0.0).build().unwrap_err();
        assert!(err.to_string().contains("mgas"));
    }

    #[test]
    fn parse_resolves_relative_table_path_against_base_dir() {
        let config = ModelConfig::parse(EARTH_CONFIG, Path::new("/data/run")).unwrap();
        assert_eq!(
            config.parameters.cross_section_file,
            PathBuf::from("/data/run/co2.dat")
        );
        assert!(config.reference.is_none());
    }

    #[test]
    fn parse_keeps_absolute_table_path() {
        let content = EARTH_CONFIG.replace("\"co2.dat\"", "\"/abs/co2.dat\"");
        let config = ModelConfig::parse(&content, Path::new("/data/run")).unwrap();
        assert_eq!(
            config.parameters.cross_section_file,
            PathBuf::from("/abs/co2.dat")
        );
    }

    #[test]
    fn parse_reads_reference_query() {
        let content = format!("{EARTH_CONFIG}\nlambda = 4.3\nR = 6.371e6\n");
        let config = ModelConfig::parse(&content, Path::new("")).unwrap();
        assert_eq!(
            config.reference,
            Some(ReferenceQuery {
                wavelength_um: 4.3,
                radius_m: 6.371e6
            })
        );
    }

    #[test]
    fn parse_rejects_half_a_reference_query() {
        let content = format!("{EARTH_CONFIG}\nlambda = 4.3\n");
        let result = ModelConfig::parse(&content, Path::new(""));
        assert!(matches!(result, Err(ConfigError::IncompleteReference)));
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let content = format!("{EARTH_CONFIG}\nalbedo = 0.3\n");
        let result = ModelConfig::parse(&content, Path::new(""));
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn parse_reports_missing_parameter() {
        let content = EARTH_CONFIG.replace("Tatm = 250.0", "");
        let result = ModelConfig::parse(&content, Path::new(""));
        assert!(matches!(result, Err(ConfigError::MissingParameter("Tatm"))));
    }

    #[test]
    fn load_succeeds_with_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("earth.toml");
        fs::write(&file_path, EARTH_CONFIG).unwrap();

        let config = ModelConfig::load(&file_path).unwrap();
        assert_eq!(
            config.parameters.cross_section_file,
            dir.path().join("co2.dat")
        );
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("non_existent.toml");
        let result = ModelConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml_and_names_the_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let err = ModelConfig::load(&file_path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("malformed.toml"));
    }
}
