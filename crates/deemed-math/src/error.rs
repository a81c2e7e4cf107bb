//! Error types for table construction and lookups.

use thiserror::Error;

/// A specialized Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while building a table or evaluating a query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The table (or classifier) is malformed. Raised at construction only.
    #[error("Invalid table configuration: {0}")]
    Configuration(#[from] TableDefect),

    /// A query key has no matching value row.
    #[error("Unknown category '{key}' (available: {available})")]
    UnknownCategory {
        /// The key that was requested.
        key: String,
        /// Comma-separated list of the keys the table does carry.
        available: String,
    },

    /// Parallel query arrays have different lengths.
    #[error("Shape mismatch in {context}: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// What was being compared.
        context: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// An unkeyed query was made against a table with several value rows.
    #[error("Category key required: table has {rows} value rows")]
    CategoryRequired {
        /// Number of rows in the table.
        rows: usize,
    },

    /// A query value is NaN.
    #[error("Query value at index {index} is NaN")]
    NotANumber {
        /// Position of the offending element.
        index: usize,
    },

    /// A query value falls outside a table that does not extrapolate.
    #[error("Extrapolation not allowed: {x} is outside [{min}, {max}]")]
    OutOfDomain {
        /// The query point.
        x: f64,
        /// Lowest boundary.
        min: f64,
        /// Highest boundary.
        max: f64,
    },
}

/// Ways a breakpoint table or classifier can be malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableDefect {
    /// Fewer than two boundaries.
    #[error("need at least 2 boundaries, got {actual}")]
    TooFewBoundaries {
        /// Number of boundaries supplied.
        actual: usize,
    },

    /// Boundaries are not strictly increasing.
    #[error("boundaries must be strictly increasing: b[{index}] = {current} follows {previous}")]
    NotStrictlyIncreasing {
        /// Index of the first offending boundary.
        index: usize,
        /// The preceding boundary.
        previous: f64,
        /// The offending boundary.
        current: f64,
    },

    /// A boundary or value is NaN or infinite where a finite number is required.
    #[error("{location}[{index}] is not finite ({value})")]
    NonFinite {
        /// `"boundaries"` or the row name.
        location: String,
        /// Position of the value.
        index: usize,
        /// The value itself.
        value: f64,
    },

    /// A value row does not line up with the boundaries.
    #[error("value row '{row}' has {actual} entries, boundaries have {expected}")]
    RowLengthMismatch {
        /// Row name.
        row: String,
        /// Number of boundaries.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },

    /// The table has no value rows at all.
    #[error("table has no value rows")]
    NoValueRows,

    /// Two value rows share a name.
    #[error("duplicate value row '{row}'")]
    DuplicateRow {
        /// The repeated name.
        row: String,
    },

    /// A labelled classifier has the wrong number of labels.
    #[error("expected {expected} bracket labels, got {actual}")]
    LabelCountMismatch {
        /// Number of brackets.
        expected: usize,
        /// Number of labels supplied.
        actual: usize,
    },
}

impl LookupError {
    /// Creates an unknown category error listing the available keys.
    #[must_use]
    pub fn unknown_category<'a>(
        key: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownCategory {
            key: key.into(),
            available: available.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Returns true for errors raised while building a table.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
