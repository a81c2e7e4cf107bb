//! Parameter manifests.
//!
//! A manifest lists the table files that make up a parameter set, each
//! with the date from which it applies. Paths are relative to the
//! manifest file.
//!
//! ```yaml
//! tables:
//!   - name: motors_baseline_efficiency
//!     path: motors/baseline_efficiency.csv
//!     effective_from: 2021-07-01
//!     boundary_key: rated_output
//!   - name: ac_capacity_scale
//!     path: ac/capacity_scale.yaml
//!     effective_from: 2021-07-01
//!     extrapolation: flat
//! ```
//!
//! TOML manifests must quote their dates.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use deemed_math::Extrapolation;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::format::TableFormat;
use crate::loader::read_file;
use crate::source::{TableLayout, DEFAULT_BOUNDARY_KEY};

/// One table version listed in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Table name used for lookups.
    pub name: String,
    /// File path, relative to the manifest.
    pub path: PathBuf,
    /// First date on which this version applies.
    pub effective_from: NaiveDate,
    /// Boundary column name (default `boundaries`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_key: Option<String>,
    /// Edge policy: `linear`, `flat` or `none` (default `linear`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extrapolation: Option<String>,
}

impl ManifestEntry {
    /// Creates an entry with the default layout.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, effective_from: NaiveDate) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            effective_from,
            boundary_key: None,
            extrapolation: None,
        }
    }

    /// Sets the boundary column name.
    #[must_use]
    pub fn with_boundary_key(mut self, key: impl Into<String>) -> Self {
        self.boundary_key = Some(key.into());
        self
    }

    /// Sets the edge policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = Some(extrapolation.as_str().to_string());
        self
    }

    /// Returns the layout described by this entry.
    pub fn layout(&self) -> ConfigResult<TableLayout> {
        let extrapolation = match &self.extrapolation {
            None => Extrapolation::default(),
            Some(s) => Extrapolation::parse(s).ok_or_else(|| ConfigError::Validation {
                field: format!("{}.extrapolation", self.name),
                message: format!("unknown extrapolation '{s}'"),
            })?,
        };
        Ok(TableLayout {
            boundary_key: self
                .boundary_key
                .clone()
                .unwrap_or_else(|| DEFAULT_BOUNDARY_KEY.to_string()),
            extrapolation,
        })
    }
}

impl Validate for ManifestEntry {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "must not be empty"));
        }
        if self.path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                format!("{}.path", self.name),
                "must not be empty",
            ));
        }
        if let Some(key) = &self.boundary_key {
            if key.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("{}.boundary_key", self.name),
                    "must not be empty",
                ));
            }
        }
        if let Some(s) = &self.extrapolation {
            if Extrapolation::parse(s).is_none() {
                errors.push(ValidationError::new(
                    format!("{}.extrapolation", self.name),
                    format!("unknown extrapolation '{s}', expected linear, flat or none"),
                ));
            }
        }

        errors
    }
}

/// A list of table versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Table versions.
    #[serde(default)]
    pub tables: Vec<ManifestEntry>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use]
    pub fn with_entry(mut self, entry: ManifestEntry) -> Self {
        self.tables.push(entry);
        self
    }

    /// Parses a manifest from text.
    pub fn parse(text: &str, format: TableFormat) -> ConfigResult<Self> {
        let manifest: Self = match format {
            TableFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| ConfigError::parse(format, e))?
            }
            TableFormat::Json => {
                serde_json::from_str(text).map_err(|e| ConfigError::parse(format, e))?
            }
            TableFormat::Toml => toml::from_str(text).map_err(|e| ConfigError::parse(format, e))?,
            TableFormat::Csv => return Err(ConfigError::UnsupportedFormat("csv manifest".into())),
        };
        manifest.validate_or_error()?;
        Ok(manifest)
    }

    /// Reads and validates a manifest file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = TableFormat::from_path(path)?;
        Self::parse(&read_file(path)?, format)
    }
}

impl Validate for Manifest {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> =
            self.tables.iter().flat_map(Validate::validate).collect();

        let mut seen = HashSet::new();
        for entry in &self.tables {
            if !seen.insert((entry.name.as_str(), entry.effective_from)) {
                errors.push(ValidationError::new(
                    entry.name.clone(),
                    format!("listed twice with effective date {}", entry.effective_from),
                ));
            }
        }

        errors
    }
}
