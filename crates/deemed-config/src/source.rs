//! Raw table descriptions and their conversion into breakpoint tables.
//!
//! A parameter file describes one table as a set of named columns: one
//! column of boundaries and one column of values per category. Text
//! entries such as `description` or `reference` are carried as notes.
//!
//! ```yaml
//! description: Baseline motor efficiency (%)
//! rated_output: [0.73, 1.1, 1.5, 2.2]
//! poles_2: [72.1, 75.0, 77.2, 79.7]
//! poles_4: [72.1, 75.0, 77.2, 79.7]
//! ```

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Read;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use deemed_math::{BreakpointTable, Extrapolation};

use crate::error::{ConfigError, ConfigResult};
use crate::format::TableFormat;

/// Default name of the boundary column.
pub const DEFAULT_BOUNDARY_KEY: &str = "boundaries";

/// One entry of a table description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column {
    /// A list of numbers: the boundaries or one value row.
    Values(Vec<f64>),
    /// A text note.
    Note(String),
}

/// How to read a table description.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Name of the boundary column.
    pub boundary_key: String,
    /// Edge policy for the built table.
    pub extrapolation: Extrapolation,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            boundary_key: DEFAULT_BOUNDARY_KEY.to_string(),
            extrapolation: Extrapolation::default(),
        }
    }
}

impl TableLayout {
    /// Creates a layout with a custom boundary column.
    pub fn with_boundary_key(boundary_key: impl Into<String>) -> Self {
        Self {
            boundary_key: boundary_key.into(),
            ..Self::default()
        }
    }

    /// Sets the edge policy.
    #[must_use]
    pub fn extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }
}

/// A parsed but not yet validated table description.
///
/// Column names are unique: a repeated name is a parse error in every format.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableSource {
    columns: BTreeMap<String, Column>,
}

fn duplicate_column(name: &str) -> String {
    format!("duplicate column '{name}'")
}

impl<'de> Deserialize<'de> for TableSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColumnsVisitor;

        impl<'de> Visitor<'de> for ColumnsVisitor {
            type Value = TableSource;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of named columns")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut columns = BTreeMap::new();
                while let Some((name, column)) = map.next_entry::<String, Column>()? {
                    match columns.entry(name) {
                        Entry::Occupied(entry) => {
                            return Err(de::Error::custom(duplicate_column(entry.key())))
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(column);
                        }
                    }
                }
                Ok(TableSource { columns })
            }
        }

        deserializer.deserialize_map(ColumnsVisitor)
    }
}

impl TableSource {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a numeric column.
    #[must_use]
    pub fn with_values(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.insert(name.into(), Column::Values(values));
        self
    }

    /// Adds a text note.
    #[must_use]
    pub fn with_note(mut self, name: impl Into<String>, note: impl Into<String>) -> Self {
        self.columns.insert(name.into(), Column::Note(note.into()));
        self
    }

    /// Returns the columns.
    pub fn columns(&self) -> &BTreeMap<String, Column> {
        &self.columns
    }

    /// Returns a text note, if present.
    pub fn note(&self, name: &str) -> Option<&str> {
        match self.columns.get(name) {
            Some(Column::Note(text)) => Some(text),
            _ => None,
        }
    }

    /// Parses a description from text.
    pub fn parse(text: &str, format: TableFormat) -> ConfigResult<Self> {
        match format {
            TableFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| ConfigError::parse(format, e))
            }
            TableFormat::Json => {
                serde_json::from_str(text).map_err(|e| ConfigError::parse(format, e))
            }
            TableFormat::Toml => toml::from_str(text).map_err(|e| ConfigError::parse(format, e)),
            TableFormat::Csv => Self::from_csv(text.as_bytes()),
        }
    }

    /// Reads a CSV description: a header row naming the columns, then one
    /// row per boundary.
    pub fn from_csv(reader: impl Read) -> ConfigResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| ConfigError::parse(TableFormat::Csv, e))?
            .clone();
        let mut seen = BTreeSet::new();
        for name in headers.iter() {
            if !seen.insert(name) {
                return Err(ConfigError::parse(TableFormat::Csv, duplicate_column(name)));
            }
        }
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ConfigError::parse(TableFormat::Csv, e))?;
            for (j, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| ConfigError::Parse {
                    format: TableFormat::Csv,
                    message: format!(
                        "record {}, column '{}': '{}' is not a number",
                        line + 1,
                        &headers[j],
                        field
                    ),
                })?;
                columns[j].push(value);
            }
        }

        Ok(Self {
            columns: headers
                .iter()
                .map(str::to_string)
                .zip(columns.into_iter().map(Column::Values))
                .collect(),
        })
    }

    /// Validates the description and builds the table.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingColumn`] if the boundary column is absent
    /// - [`ConfigError::NotNumeric`] if the boundary column is text
    /// - [`ConfigError::Table`] if the boundaries or rows are malformed
    pub fn into_table(self, name: &str, layout: &TableLayout) -> ConfigResult<BreakpointTable> {
        let mut columns = self.columns;

        let boundaries = match columns.remove(&layout.boundary_key) {
            Some(Column::Values(values)) => values,
            Some(Column::Note(_)) => {
                return Err(ConfigError::NotNumeric {
                    table: name.to_string(),
                    column: layout.boundary_key.clone(),
                })
            }
            None => {
                return Err(ConfigError::MissingColumn {
                    table: name.to_string(),
                    column: layout.boundary_key.clone(),
                })
            }
        };

        let mut builder =
            BreakpointTable::builder(boundaries).with_extrapolation(layout.extrapolation);
        for (key, column) in columns {
            match column {
                Column::Values(values) => builder = builder.row(key, values),
                Column::Note(text) if key == "description" => {
                    builder = builder.with_description(text);
                }
                Column::Note(_) => {}
            }
        }

        builder.build().map_err(|e| ConfigError::table(name, e))
    }
}
