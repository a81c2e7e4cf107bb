//! Supported parameter file formats.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// File format of a table or manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
    /// TOML (`.toml`).
    Toml,
    /// CSV with a header row (`.csv`).
    Csv,
}

impl TableFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "csv" => Ok(Self::Csv),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Returns the format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(TableFormat::from_path("motors/baseline.yaml").unwrap(), TableFormat::Yaml);
        assert_eq!(TableFormat::from_path("a.YML").unwrap(), TableFormat::Yaml);
        assert_eq!(TableFormat::from_path("a.json").unwrap(), TableFormat::Json);
        assert_eq!(TableFormat::from_path("a.toml").unwrap(), TableFormat::Toml);
        assert_eq!(TableFormat::from_path("a.csv").unwrap(), TableFormat::Csv);
        assert!(matches!(
            TableFormat::from_path("a.xlsx"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(TableFormat::from_path("no_extension").is_err());
    }
}
