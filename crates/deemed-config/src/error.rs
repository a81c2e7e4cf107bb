//! Configuration error types.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use deemed_math::LookupError;

use crate::format::TableFormat;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A file could not be parsed in its format.
    #[error("Failed to parse {format} input: {message}")]
    Parse {
        /// Format being parsed.
        format: TableFormat,
        /// Parser message.
        message: String,
    },

    /// The parsed table failed validation.
    #[error("Invalid table '{name}': {source}")]
    Table {
        /// Table name.
        name: String,
        /// The table defect.
        source: LookupError,
    },

    /// A required column is absent.
    #[error("Table '{table}' has no '{column}' column")]
    MissingColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// A column that must hold numbers holds text.
    #[error("Column '{column}' of table '{table}' is not a list of numbers")]
    NotNumeric {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// No table is registered under the name.
    #[error("Table not found: {name}")]
    NotFound {
        /// Table name.
        name: String,
    },

    /// The table exists but no version is in force on the date.
    #[error("Table '{name}' is not in force on {date}")]
    NotInForce {
        /// Table name.
        name: String,
        /// Requested date.
        date: NaiveDate,
    },

    /// Two versions of a table share an effective date.
    #[error("Table '{name}' already has a version effective from {effective_from}")]
    Duplicate {
        /// Table name.
        name: String,
        /// The repeated date.
        effective_from: NaiveDate,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {0:?}")]
    MultipleValidationErrors(Vec<ValidationError>),
}

impl ConfigError {
    /// Creates a parse error from any displayable parser error.
    pub fn parse(format: TableFormat, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }

    /// Wraps a table defect with the table's name.
    pub fn table(name: impl Into<String>, source: LookupError) -> Self {
        Self::Table {
            name: name.into(),
            source,
        }
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}
