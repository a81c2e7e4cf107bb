//! Queries against a breakpoint table.

use ndarray::ArrayView1;

/// Selects which value row applies to each query element.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySelector<'q> {
    /// Use the table's only row.
    Sole,
    /// Use the same row for every element.
    Constant(&'q str),
    /// One key per element, parallel to the query values.
    PerElement(Vec<&'q str>),
}

/// Query values plus the category selection that applies to them.
///
/// # Example
///
/// ```rust
/// use deemed_math::query::Query;
///
/// let values = [2.0, 7.0];
/// let query = Query::new(&values).with_keys(vec!["a", "b"]);
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query<'q> {
    values: ArrayView1<'q, f64>,
    keys: CategorySelector<'q>,
}

impl<'q> Query<'q> {
    /// Creates an unkeyed query over a slice of values.
    pub fn new(values: &'q [f64]) -> Self {
        Self::from_view(ArrayView1::from(values))
    }

    /// Creates an unkeyed query over an array view.
    pub fn from_view(values: ArrayView1<'q, f64>) -> Self {
        Self {
            values,
            keys: CategorySelector::Sole,
        }
    }

    /// Uses one key per element.
    #[must_use]
    pub fn with_keys(mut self, keys: Vec<&'q str>) -> Self {
        self.keys = CategorySelector::PerElement(keys);
        self
    }

    /// Uses the same key for every element.
    #[must_use]
    pub fn with_key(mut self, key: &'q str) -> Self {
        self.keys = CategorySelector::Constant(key);
        self
    }

    /// Returns the query values.
    pub fn values(&self) -> ArrayView1<'q, f64> {
        self.values
    }

    /// Returns the category selection.
    pub fn keys(&self) -> &CategorySelector<'q> {
        &self.keys
    }

    /// Returns the number of query elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the query has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
