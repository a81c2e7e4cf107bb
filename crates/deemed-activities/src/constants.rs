//! Scheme-wide constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use deemed_config::{
    read_file, ConfigError, ConfigResult, TableFormat, Validate, ValidationError,
};

/// Constants shared by the peak demand calculations.
///
/// # Example
///
/// ```rust
/// use deemed_activities::SchemeConstants;
///
/// let constants = SchemeConstants::from_yaml(
///     "daily_peak_window_hours: 6\n\
///      ac_forward_creation_period: 10\n\
///      rooa_average_summer_demand: 0.1\n\
///      rooa_forward_creation_period: 7\n",
/// )
/// .unwrap();
/// assert_eq!(constants.daily_peak_window_hours, 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchemeConstants {
    /// Hours in the daily peak demand window.
    pub daily_peak_window_hours: f64,
    /// Forward creation period for air conditioner activities, in years.
    pub ac_forward_creation_period: f64,
    /// Average summer demand of a removed refrigerator or freezer, in kW.
    pub rooa_average_summer_demand: f64,
    /// Forward creation period for appliance removal activities, in years.
    pub rooa_forward_creation_period: f64,
}

impl SchemeConstants {
    /// Parses and validates constants from YAML.
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        Self::parse(text, TableFormat::Yaml)
    }

    /// Parses and validates constants in the given format.
    pub fn parse(text: &str, format: TableFormat) -> ConfigResult<Self> {
        let constants: Self = match format {
            TableFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| ConfigError::parse(format, e))?
            }
            TableFormat::Json => {
                serde_json::from_str(text).map_err(|e| ConfigError::parse(format, e))?
            }
            TableFormat::Toml => toml::from_str(text).map_err(|e| ConfigError::parse(format, e))?,
            TableFormat::Csv => {
                return Err(ConfigError::UnsupportedFormat("csv constants".into()))
            }
        };
        constants.validate_or_error()?;
        Ok(constants)
    }

    /// Reads and validates a constants file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = TableFormat::from_path(path)?;
        let text = read_file(path)?;
        let constants = Self::parse(&text, format)?;
        log::debug!("Loaded scheme constants from {}", path.display());
        Ok(constants)
    }
}

impl Validate for SchemeConstants {
    fn validate(&self) -> Vec<ValidationError> {
        let fields = [
            ("daily_peak_window_hours", self.daily_peak_window_hours),
            ("ac_forward_creation_period", self.ac_forward_creation_period),
            ("rooa_average_summer_demand", self.rooa_average_summer_demand),
            ("rooa_forward_creation_period", self.rooa_forward_creation_period),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| !(value.is_finite() && *value > 0.0))
            .map(|(field, value)| {
                ValidationError::new(field, format!("must be positive and finite, got {value}"))
            })
            .collect()
    }
}
