//! Piecewise-linear interpolation over category-keyed value rows.

use std::collections::BTreeMap;

use ndarray::{Array1, ArrayView1};

use crate::error::{LookupError, LookupResult};
use crate::interpolation::Interpolator;
use crate::query::{CategorySelector, Query};
use crate::table::{BreakpointTable, Extrapolation, ValueRow};

/// Vectorized piecewise-linear lookups against a [`BreakpointTable`].
///
/// Keyed queries are partitioned by category key; every key is resolved
/// before any value is computed, so an unknown key fails the whole query.
/// Keys are resolved in order of first appearance, so the error names the
/// earliest unknown key of the input. Results are written back in input order.
///
/// # Example
///
/// ```rust
/// use deemed_math::interpolation::PiecewiseLinearInterpolator;
/// use deemed_math::query::Query;
/// use deemed_math::table::BreakpointTable;
///
/// let table = BreakpointTable::builder(vec![0.75, 1.1, 1.5])
///     .row("poles_2", vec![72.1, 75.0, 77.2])
///     .row("poles_4", vec![72.1, 75.0, 77.2])
///     .build()
///     .unwrap();
///
/// let rated_output = [0.9, 1.3];
/// let query = Query::new(&rated_output).with_keys(vec!["poles_4", "poles_2"]);
/// let efficiency = PiecewiseLinearInterpolator::new(&table)
///     .interpolate(&query)
///     .unwrap();
/// assert_eq!(efficiency.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PiecewiseLinearInterpolator<'t> {
    table: &'t BreakpointTable,
}

impl<'t> PiecewiseLinearInterpolator<'t> {
    /// Creates an interpolator over `table`.
    pub fn new(table: &'t BreakpointTable) -> Self {
        Self { table }
    }

    /// Returns the table.
    pub fn table(&self) -> &'t BreakpointTable {
        self.table
    }

    /// Evaluates a query, returning one value per query element in order.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotANumber`] if any value is NaN
    /// - [`LookupError::ShapeMismatch`] if per-element keys and values differ in length
    /// - [`LookupError::UnknownCategory`] if a key has no value row
    /// - [`LookupError::CategoryRequired`] if an unkeyed query targets a multi-row table
    /// - [`LookupError::OutOfDomain`] if the table rejects extrapolation
    pub fn interpolate(&self, query: &Query<'_>) -> LookupResult<Array1<f64>> {
        let values = query.values();
        if let Some(index) = values.iter().position(|x| x.is_nan()) {
            return Err(LookupError::NotANumber { index });
        }

        match query.keys() {
            CategorySelector::Sole => self.evaluate_row(self.table.sole_row()?, values),
            CategorySelector::Constant(key) => self.evaluate_row(self.table.row(key)?, values),
            CategorySelector::PerElement(keys) => self.evaluate_keyed(values, keys),
        }
    }

    /// Evaluates a single value, optionally keyed.
    pub fn interpolate_one(&self, x: f64, key: Option<&str>) -> LookupResult<f64> {
        if x.is_nan() {
            return Err(LookupError::NotANumber { index: 0 });
        }
        let row = match key {
            Some(key) => self.table.row(key)?,
            None => self.table.sole_row()?,
        };
        self.table.evaluate(row, x)
    }

    /// Returns a single-row view for `key`.
    pub fn row(&self, key: &str) -> LookupResult<RowInterpolator<'t>> {
        Ok(RowInterpolator {
            table: self.table,
            row: self.table.row(key)?,
        })
    }

    /// Returns a single-row view of a single-row table.
    pub fn sole(&self) -> LookupResult<RowInterpolator<'t>> {
        Ok(RowInterpolator {
            table: self.table,
            row: self.table.sole_row()?,
        })
    }

    fn evaluate_row(&self, row: &ValueRow, values: ArrayView1<'_, f64>) -> LookupResult<Array1<f64>> {
        values
            .iter()
            .map(|&x| self.table.evaluate(row, x))
            .collect::<LookupResult<Vec<_>>>()
            .map(Array1::from)
    }

    fn evaluate_keyed(
        &self,
        values: ArrayView1<'_, f64>,
        keys: &[&str],
    ) -> LookupResult<Array1<f64>> {
        if keys.len() != values.len() {
            return Err(LookupError::shape_mismatch(
                "query keys",
                values.len(),
                keys.len(),
            ));
        }

        let mut partitions: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            partitions.entry(*key).or_default().push(i);
        }

        let mut partitions: Vec<_> = partitions.into_iter().collect();
        partitions.sort_unstable_by_key(|(_, indices)| indices.first().copied());

        let resolved = partitions
            .into_iter()
            .map(|(key, indices)| -> LookupResult<_> { Ok((self.table.row(key)?, indices)) })
            .collect::<LookupResult<Vec<_>>>()?;

        let mut out = Array1::zeros(values.len());
        for (row, indices) in resolved {
            for i in indices {
                out[i] = self.table.evaluate(row, values[i])?;
            }
        }
        Ok(out)
    }
}

/// Evaluates `values` against `table`, one key per value when `keys` is given.
///
/// Shorthand for building a [`Query`] and calling
/// [`PiecewiseLinearInterpolator::interpolate`].
pub fn interpolate(
    table: &BreakpointTable,
    values: &[f64],
    keys: Option<&[&str]>,
) -> LookupResult<Array1<f64>> {
    let query = match keys {
        Some(keys) => Query::new(values).with_keys(keys.to_vec()),
        None => Query::new(values),
    };
    PiecewiseLinearInterpolator::new(table).interpolate(&query)
}

/// One value row of a table, as an [`Interpolator`].
#[derive(Debug, Clone, Copy)]
pub struct RowInterpolator<'t> {
    table: &'t BreakpointTable,
    row: &'t ValueRow,
}

impl RowInterpolator<'_> {
    /// Returns the row's values.
    pub fn values(&self) -> &[f64] {
        self.row.values()
    }
}

impl Interpolator for RowInterpolator<'_> {
    fn interpolate(&self, x: f64) -> LookupResult<f64> {
        if x.is_nan() {
            return Err(LookupError::NotANumber { index: 0 });
        }
        self.table.evaluate(self.row, x)
    }

    fn derivative(&self, x: f64) -> LookupResult<f64> {
        if x.is_nan() {
            return Err(LookupError::NotANumber { index: 0 });
        }

        let (min, max) = self.table.classifier().domain();
        if x < min || x > max {
            match self.table.extrapolation() {
                Extrapolation::Linear => {}
                Extrapolation::Flat => return Ok(0.0),
                Extrapolation::None => return Err(LookupError::OutOfDomain { x, min, max }),
            }
        }

        let i = self.table.classifier().position(x);
        Ok(self.row.gradients()[i])
    }

    fn allows_extrapolation(&self) -> bool {
        self.table.extrapolation() != Extrapolation::None
    }

    fn min_x(&self) -> f64 {
        self.table.classifier().domain().0
    }

    fn max_x(&self) -> f64 {
        self.table.classifier().domain().1
    }
}
