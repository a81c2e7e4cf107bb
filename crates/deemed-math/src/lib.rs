//! # Deemed Math
//!
//! Table lookups for deemed energy-savings calculations.
//!
//! Scheme rules repeatedly look a continuous input (a motor's rated output,
//! an air conditioner's cooling capacity) up in a table of breakpoints, with
//! one value row per equipment category. This crate provides:
//!
//! - **Bracket classification**: [`BracketClassifier`] and [`LabelledBrackets`]
//! - **Breakpoint tables**: [`BreakpointTable`], validated once and immutable
//! - **Interpolation**: [`PiecewiseLinearInterpolator`], vectorized and
//!   category-keyed, with a configurable [`Extrapolation`] edge policy
//!
//! All lookups are pure functions of the query and the table. Tables are
//! `Send + Sync` and can be shared across threads without locking.
//!
//! ## Example
//!
//! ```rust
//! use deemed_math::prelude::*;
//!
//! let table = BreakpointTable::builder(vec![0.0, 5.0, 10.0])
//!     .row("A", vec![1.0, 2.0, 3.0])
//!     .row("B", vec![10.0, 20.0, 30.0])
//!     .build()
//!     .unwrap();
//!
//! let values = [2.0, 7.0];
//! let out = interpolate(&table, &values, Some(&["A", "B"][..])).unwrap();
//! assert!((out[0] - 1.4).abs() < 1e-12);
//! assert!((out[1] - 24.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bracket;
pub mod error;
pub mod interpolation;
pub mod query;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bracket::{Bracket, BracketClassifier, LabelledBrackets};
    pub use crate::error::{LookupError, LookupResult, TableDefect};
    pub use crate::interpolation::{
        interpolate, Interpolator, PiecewiseLinearInterpolator, RowInterpolator,
    };
    pub use crate::query::{CategorySelector, Query};
    pub use crate::table::{BreakpointTable, BreakpointTableBuilder, Extrapolation, ValueRow};
}

pub use bracket::{BracketClassifier, LabelledBrackets};
pub use error::{LookupError, LookupResult, TableDefect};
pub use interpolation::{interpolate, Interpolator, PiecewiseLinearInterpolator};
pub use query::Query;
pub use table::{BreakpointTable, Extrapolation};
