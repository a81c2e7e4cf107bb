//! Breakpoint tables: one boundary axis shared by named value rows.

use std::collections::BTreeMap;

use crate::bracket::BracketClassifier;
use crate::error::{LookupError, LookupResult, TableDefect};

/// Edge policy for query values outside `[b_0, b_{n-1})`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Extend the first and last segments' lines.
    #[default]
    Linear,
    /// Hold the first and last values constant.
    Flat,
    /// Reject values outside `[b_0, b_{n-1}]`.
    None,
}

impl Extrapolation {
    /// Parses a policy name (`linear`, `flat`, `none`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "flat" => Some(Self::Flat),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Returns the policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Flat => "flat",
            Self::None => "none",
        }
    }
}

/// Values for one category, aligned index-for-index with the boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRow {
    values: Vec<f64>,
    gradients: Vec<f64>,
}

impl ValueRow {
    fn new(values: Vec<f64>, boundaries: &[f64]) -> Self {
        let gradients = values
            .windows(2)
            .zip(boundaries.windows(2))
            .map(|(v, b)| (v[1] - v[0]) / (b[1] - b[0]))
            .collect();
        Self { values, gradients }
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the slope of each segment; `gradients()[i]` covers bracket `i`.
    pub fn gradients(&self) -> &[f64] {
        &self.gradients
    }
}

/// An immutable table of boundaries and category-keyed value rows.
///
/// Built once when parameters are loaded and shared read-only afterwards.
///
/// # Example
///
/// ```rust
/// use deemed_math::table::BreakpointTable;
///
/// let table = BreakpointTable::builder(vec![0.0, 5.0, 10.0])
///     .row("a", vec![1.0, 2.0, 3.0])
///     .row("b", vec![10.0, 20.0, 30.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.row_count(), 2);
/// assert!(table.row("a").is_ok());
/// assert!(table.row("c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    classifier: BracketClassifier,
    rows: BTreeMap<String, ValueRow>,
    extrapolation: Extrapolation,
    description: Option<String>,
}

impl BreakpointTable {
    /// Starts building a table over the given boundaries.
    pub fn builder(boundaries: Vec<f64>) -> BreakpointTableBuilder {
        BreakpointTableBuilder {
            boundaries,
            rows: Vec::new(),
            extrapolation: Extrapolation::default(),
            description: None,
        }
    }

    /// Builds a table with a single value row named `value`.
    pub fn single(boundaries: Vec<f64>, values: Vec<f64>) -> LookupResult<Self> {
        Self::builder(boundaries).row("value", values).build()
    }

    /// Returns the bracket classifier for the boundary axis.
    pub fn classifier(&self) -> &BracketClassifier {
        &self.classifier
    }

    /// Returns the boundaries.
    pub fn boundaries(&self) -> &[f64] {
        self.classifier.boundaries()
    }

    /// Returns the edge policy.
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the number of value rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Returns the row for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownCategory`] if the table has no such row.
    pub fn row(&self, key: &str) -> LookupResult<&ValueRow> {
        self.rows
            .get(key)
            .ok_or_else(|| LookupError::unknown_category(key, self.keys()))
    }

    /// Returns the only row of a single-row table.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::CategoryRequired`] if the table has several rows.
    pub fn sole_row(&self) -> LookupResult<&ValueRow> {
        match self.rows.values().next() {
            Some(row) if self.rows.len() == 1 => Ok(row),
            _ => Err(LookupError::CategoryRequired {
                rows: self.rows.len(),
            }),
        }
    }

    /// Evaluates `row` at `x`. `x` must not be NaN.
    pub(crate) fn evaluate(&self, row: &ValueRow, x: f64) -> LookupResult<f64> {
        let b = self.boundaries();
        let last = b.len() - 1;

        if x < b[0] || x > b[last] {
            match self.extrapolation {
                Extrapolation::Linear => {}
                Extrapolation::Flat => {
                    let edge = if x < b[0] { 0 } else { last };
                    return Ok(row.values[edge]);
                }
                Extrapolation::None => {
                    return Err(LookupError::OutOfDomain {
                        x,
                        min: b[0],
                        max: b[last],
                    });
                }
            }
        }

        let i = self.classifier.position(x);
        let gradient = row.gradients[i];
        // Keeps flat segments exact when x is infinite (0 * inf is NaN).
        if gradient == 0.0 {
            return Ok(row.values[i]);
        }
        Ok(row.values[i] + gradient * (x - b[i]))
    }
}

/// Builder for [`BreakpointTable`].
#[derive(Debug, Clone)]
pub struct BreakpointTableBuilder {
    boundaries: Vec<f64>,
    rows: Vec<(String, Vec<f64>)>,
    extrapolation: Extrapolation,
    description: Option<String>,
}

impl BreakpointTableBuilder {
    /// Adds a named value row.
    #[must_use]
    pub fn row(mut self, key: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push((key.into(), values));
        self
    }

    /// Sets the edge policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Sets a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates and builds the table.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the boundaries are invalid or
    /// non-finite, if there are no rows, if a row name repeats, or if any
    /// row is misaligned with the boundaries or holds a non-finite value.
    pub fn build(self) -> LookupResult<BreakpointTable> {
        let classifier = BracketClassifier::new(self.boundaries)?;
        let boundaries = classifier.boundaries();

        if let Some((index, &value)) = boundaries.iter().enumerate().find(|(_, b)| !b.is_finite())
        {
            return Err(TableDefect::NonFinite {
                location: "boundaries".to_string(),
                index,
                value,
            }
            .into());
        }

        if self.rows.is_empty() {
            return Err(TableDefect::NoValueRows.into());
        }

        let mut rows = BTreeMap::new();
        for (key, values) in self.rows {
            if values.len() != boundaries.len() {
                return Err(TableDefect::RowLengthMismatch {
                    row: key,
                    expected: boundaries.len(),
                    actual: values.len(),
                }
                .into());
            }
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(TableDefect::NonFinite {
                    location: key,
                    index,
                    value,
                }
                .into());
            }
            if rows.contains_key(&key) {
                return Err(TableDefect::DuplicateRow { row: key }.into());
            }
            let row = ValueRow::new(values, boundaries);
            rows.insert(key, row);
        }

        Ok(BreakpointTable {
            classifier,
            rows,
            extrapolation: self.extrapolation,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gradients_precomputed() {
        let table =
            BreakpointTable::single(vec![0.0, 10.0, 40.0, 65.0, 100.0], vec![
                50.0, 60.0, 80.0, 90.0, 95.0,
            ])
            .unwrap();
        let row = table.sole_row().unwrap();
        assert_eq!(row.gradients().len(), 4);
        assert_relative_eq!(row.gradients()[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(row.gradients()[1], 20.0 / 30.0, epsilon = 1e-12);
        assert_relative_eq!(row.gradients()[3], 5.0 / 35.0, epsilon = 1e-12);
    }

    #[test]
    fn test_row_length_mismatch() {
        let result = BreakpointTable::builder(vec![0.0, 1.0, 2.0])
            .row("poles_2", vec![1.0, 2.0, 3.0])
            .row("poles_4", vec![1.0, 2.0])
            .build();
        assert_eq!(
            result,
            Err(LookupError::Configuration(TableDefect::RowLengthMismatch {
                row: "poles_4".to_string(),
                expected: 3,
                actual: 2,
            }))
        );
    }

    #[test]
    fn test_non_monotonic_rejected_at_build() {
        let result = BreakpointTable::single(vec![0.0, 10.0, 5.0], vec![1.0, 2.0, 3.0]);
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_infinite_boundary_rejected() {
        let result = BreakpointTable::single(vec![0.0, f64::INFINITY], vec![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(LookupError::Configuration(TableDefect::NonFinite { index: 1, .. }))
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let result = BreakpointTable::single(vec![0.0, 1.0], vec![1.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(LookupError::Configuration(TableDefect::NonFinite { ref location, .. }))
                if location == "value"
        ));
    }

    #[test]
    fn test_no_rows() {
        let result = BreakpointTable::builder(vec![0.0, 1.0]).build();
        assert_eq!(
            result,
            Err(LookupError::Configuration(TableDefect::NoValueRows))
        );
    }

    #[test]
    fn test_duplicate_row() {
        let result = BreakpointTable::builder(vec![0.0, 1.0])
            .row("a", vec![0.0, 1.0])
            .row("a", vec![0.0, 2.0])
            .build();
        assert!(matches!(
            result,
            Err(LookupError::Configuration(TableDefect::DuplicateRow { .. }))
        ));
    }

    #[test]
    fn test_sole_row_requires_single() {
        let table = BreakpointTable::builder(vec![0.0, 1.0])
            .row("a", vec![0.0, 1.0])
            .row("b", vec![0.0, 2.0])
            .build()
            .unwrap();
        assert_eq!(
            table.sole_row().unwrap_err(),
            LookupError::CategoryRequired { rows: 2 }
        );
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_description_and_policy() {
        let table = BreakpointTable::builder(vec![0.0, 1.0])
            .row("a", vec![0.0, 1.0])
            .with_description("Baseline efficiency")
            .with_extrapolation(Extrapolation::Flat)
            .build()
            .unwrap();
        assert_eq!(table.description(), Some("Baseline efficiency"));
        assert_eq!(table.extrapolation(), Extrapolation::Flat);
    }

    #[test]
    fn test_extrapolation_parse() {
        assert_eq!(Extrapolation::parse("Linear"), Some(Extrapolation::Linear));
        assert_eq!(Extrapolation::parse("flat"), Some(Extrapolation::Flat));
        assert_eq!(Extrapolation::parse("NONE"), Some(Extrapolation::None));
        assert_eq!(Extrapolation::parse("cubic"), None);
        assert_eq!(Extrapolation::Flat.as_str(), "flat");
    }
}
