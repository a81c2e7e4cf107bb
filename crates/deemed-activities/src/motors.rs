//! High efficiency motor replacement.
//!
//! The baseline efficiency of a motor is read off a breakpoint table of
//! rated output (kW) against efficiency (%), with one row per pole count.

use ndarray::{Array1, ArrayView1, Zip};

use deemed_math::{BreakpointTable, PiecewiseLinearInterpolator, Query};

use crate::categories::MotorPoles;
use crate::error::{check_len, check_not_nan, ActivityResult};

/// Name of the baseline efficiency table in a parameter store.
pub const BASELINE_EFFICIENCY_TABLE: &str = "motors_baseline_efficiency";

/// Boundary column of the baseline efficiency table.
pub const RATED_OUTPUT_COLUMN: &str = "rated_output";

/// Returns the baseline efficiency (%) of each motor from its rated
/// output (kW) and pole count.
///
/// Rated outputs outside the table follow the table's edge policy.
///
/// # Errors
///
/// - [`LookupError::ShapeMismatch`](deemed_math::LookupError::ShapeMismatch)
///   if `poles` and `rated_output` differ in length
/// - [`LookupError::UnknownCategory`](deemed_math::LookupError::UnknownCategory)
///   if the table has no row for a pole count that occurs
pub fn baseline_motor_efficiency(
    table: &BreakpointTable,
    rated_output: ArrayView1<'_, f64>,
    poles: &[MotorPoles],
) -> ActivityResult<Array1<f64>> {
    let keys = poles.iter().map(MotorPoles::key).collect();
    let query = Query::from_view(rated_output).with_keys(keys);
    Ok(PiecewiseLinearInterpolator::new(table).interpolate(&query)?)
}

/// Returns the efficiency of each existing motor: the supplied value
/// where it is positive, the baseline otherwise.
///
/// Zero, negative and NaN entries mean "not supplied".
///
/// # Errors
///
/// - [`LookupError::ShapeMismatch`](deemed_math::LookupError::ShapeMismatch)
///   if the inputs differ in length
/// - [`LookupError::NotANumber`](deemed_math::LookupError::NotANumber)
///   if a baseline is NaN
pub fn existing_motor_efficiency(
    old_efficiency: ArrayView1<'_, f64>,
    baseline: ArrayView1<'_, f64>,
) -> ActivityResult<Array1<f64>> {
    check_len("baseline efficiency", old_efficiency.len(), baseline.len())?;
    check_not_nan(baseline)?;
    Ok(Zip::from(&old_efficiency)
        .and(&baseline)
        .map_collect(|&old, &base| if old > 0.0 { old } else { base }))
}
