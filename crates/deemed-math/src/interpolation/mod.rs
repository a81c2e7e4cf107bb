//! Interpolation over breakpoint tables.
//!
//! - [`PiecewiseLinearInterpolator`]: vectorized, category-keyed lookups
//!   against a whole [`BreakpointTable`](crate::table::BreakpointTable)
//! - [`RowInterpolator`]: a single value row seen through the
//!   [`Interpolator`] trait
//!
//! Within bracket `i` the result is
//!
//! ```text
//! gradient = (v[i+1] - v[i]) / (b[i+1] - b[i])
//! y        = v[i] + gradient * (x - b[i])
//! ```

mod piecewise;

pub use piecewise::{interpolate, PiecewiseLinearInterpolator, RowInterpolator};

use crate::error::LookupResult;

/// Trait for one-dimensional interpolation.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> LookupResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> LookupResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
