//! Bracket classification over ordered boundaries.
//!
//! A [`BracketClassifier`] maps a continuous value onto the index of the
//! half-open interval `[b_i, b_{i+1})` that contains it. Values below the
//! first boundary land in bracket 0 and values at or above the last boundary
//! land in bracket `n - 2`, so every non-NaN input has exactly one bracket.
//!
//! Boundary tables in practice hold a handful of entries, so brackets are
//! found by comparing against every adjacent pair rather than by binary
//! search.

use ndarray::{Array1, ArrayView1};

use crate::error::{LookupError, LookupResult, TableDefect};

/// One located bracket: `lower <= x < upper` for in-domain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Bracket index in `[0, n - 2]`.
    pub index: usize,
    /// Lower boundary (inclusive).
    pub lower: f64,
    /// Upper boundary (exclusive).
    pub upper: f64,
}

impl Bracket {
    /// Width of the bracket.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `x` lies inside `[lower, upper)`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x < self.upper
    }
}

/// Maps continuous values to bracket indices.
///
/// # Example
///
/// ```rust
/// use deemed_math::bracket::BracketClassifier;
///
/// let classifier = BracketClassifier::new(vec![0.0, 10.0, 40.0, 65.0, 100.0]).unwrap();
///
/// assert_eq!(classifier.classify(25.0).unwrap(), 1);
/// assert_eq!(classifier.classify(40.0).unwrap(), 2);
/// // Clamped at both ends
/// assert_eq!(classifier.classify(-5.0).unwrap(), 0);
/// assert_eq!(classifier.classify(250.0).unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BracketClassifier {
    boundaries: Vec<f64>,
}

impl BracketClassifier {
    /// Creates a classifier from strictly increasing boundaries.
    ///
    /// Infinite boundaries are accepted so that open-ended bands such as
    /// "65 kW and above" can be written as `[.., 65.0, f64::INFINITY]`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if there are fewer than 2 boundaries,
    /// if any boundary is NaN, or if the boundaries are not strictly
    /// increasing.
    pub fn new(boundaries: Vec<f64>) -> LookupResult<Self> {
        if boundaries.len() < 2 {
            return Err(TableDefect::TooFewBoundaries {
                actual: boundaries.len(),
            }
            .into());
        }

        if let Some((index, &value)) = boundaries.iter().enumerate().find(|(_, b)| b.is_nan()) {
            return Err(TableDefect::NonFinite {
                location: "boundaries".to_string(),
                index,
                value,
            }
            .into());
        }

        for i in 1..boundaries.len() {
            if boundaries[i] <= boundaries[i - 1] {
                return Err(TableDefect::NotStrictlyIncreasing {
                    index: i,
                    previous: boundaries[i - 1],
                    current: boundaries[i],
                }
                .into());
            }
        }

        Ok(Self { boundaries })
    }

    /// Returns the boundaries.
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Returns the number of brackets (`n - 1`).
    pub fn bracket_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Returns the first and last boundary.
    pub fn domain(&self) -> (f64, f64) {
        (self.boundaries[0], self.boundaries[self.boundaries.len() - 1])
    }

    /// Returns true if `x` lies within `[b_0, b_{n-1}]`.
    pub fn in_domain(&self, x: f64) -> bool {
        let (min, max) = self.domain();
        x >= min && x <= max
    }

    /// Returns the bracket index for `x`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotANumber`] if `x` is NaN.
    pub fn classify(&self, x: f64) -> LookupResult<usize> {
        if x.is_nan() {
            return Err(LookupError::NotANumber { index: 0 });
        }
        Ok(self.position(x))
    }

    /// Returns the bracket index for each element of `xs`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotANumber`] naming the first NaN element.
    pub fn classify_many(&self, xs: ArrayView1<'_, f64>) -> LookupResult<Array1<usize>> {
        if let Some(index) = xs.iter().position(|x| x.is_nan()) {
            return Err(LookupError::NotANumber { index });
        }
        Ok(xs.mapv(|x| self.position(x)))
    }

    /// Returns the located bracket for `x`.
    pub fn locate(&self, x: f64) -> LookupResult<Bracket> {
        let index = self.classify(x)?;
        Ok(self.bracket_at(index))
    }

    /// Returns bracket `index`, or `None` if it does not exist.
    pub fn bracket(&self, index: usize) -> Option<Bracket> {
        (index < self.bracket_count()).then(|| self.bracket_at(index))
    }

    fn bracket_at(&self, index: usize) -> Bracket {
        Bracket {
            index,
            lower: self.boundaries[index],
            upper: self.boundaries[index + 1],
        }
    }

    /// Pairwise search; callers have already rejected NaN.
    pub(crate) fn position(&self, x: f64) -> usize {
        if x < self.boundaries[0] {
            return 0;
        }
        for (i, pair) in self.boundaries.windows(2).enumerate() {
            if pair[0] <= x && x < pair[1] {
                return i;
            }
        }
        self.bracket_count() - 1
    }
}

/// A classifier with one label per bracket.
///
/// Used for discrete bands, e.g. mapping an air conditioner's cooling
/// capacity onto the capacity band that selects a baseline coefficient.
///
/// # Example
///
/// ```rust
/// use deemed_math::bracket::LabelledBrackets;
///
/// let bands = LabelledBrackets::new(
///     vec![0.0, 4.0, 10.0, f64::INFINITY],
///     vec!["small", "medium", "large"],
/// )
/// .unwrap();
///
/// assert_eq!(*bands.label_of(3.9).unwrap(), "small");
/// assert_eq!(*bands.label_of(4.0).unwrap(), "medium");
/// assert_eq!(*bands.label_of(1e6).unwrap(), "large");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledBrackets<L> {
    classifier: BracketClassifier,
    labels: Vec<L>,
}

impl<L> LabelledBrackets<L> {
    /// Creates a labelled classifier.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the boundaries are invalid or if
    /// `labels.len()` differs from the number of brackets.
    pub fn new(boundaries: Vec<f64>, labels: Vec<L>) -> LookupResult<Self> {
        let classifier = BracketClassifier::new(boundaries)?;
        if labels.len() != classifier.bracket_count() {
            return Err(TableDefect::LabelCountMismatch {
                expected: classifier.bracket_count(),
                actual: labels.len(),
            }
            .into());
        }
        Ok(Self { classifier, labels })
    }

    /// Returns the underlying classifier.
    pub fn classifier(&self) -> &BracketClassifier {
        &self.classifier
    }

    /// Returns the labels in bracket order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the label of the bracket containing `x`.
    pub fn label_of(&self, x: f64) -> LookupResult<&L> {
        let index = self.classifier.classify(x)?;
        Ok(&self.labels[index])
    }

    /// Returns the label for each element of `xs`, in order.
    pub fn labels_of(&self, xs: ArrayView1<'_, f64>) -> LookupResult<Vec<L>>
    where
        L: Clone,
    {
        let indices = self.classifier.classify_many(xs)?;
        Ok(indices.iter().map(|&i| self.labels[i].clone()).collect())
    }
}
