//! Removal of a spare refrigerator or freezer.

use ndarray::{Array1, ArrayView1};

use crate::constants::SchemeConstants;
use crate::error::{check_not_nan, ActivityResult};

/// Returns the peak demand savings (kW) of each removal:
/// `average summer demand * firmness * daily peak hours * forward creation period`.
///
/// Returns [`LookupError::NotANumber`](deemed_math::LookupError::NotANumber)
/// if a firmness factor is NaN.
pub fn peak_demand_savings(
    firmness_factor: ArrayView1<'_, f64>,
    constants: &SchemeConstants,
) -> ActivityResult<Array1<f64>> {
    check_not_nan(firmness_factor)?;
    let scale = constants.rooa_average_summer_demand
        * constants.daily_peak_window_hours
        * constants.rooa_forward_creation_period;
    Ok(firmness_factor.mapv(|firmness| firmness * scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deemed_math::LookupError;
    use ndarray::array;

    use crate::error::ActivityError;

    fn constants() -> SchemeConstants {
        SchemeConstants {
            daily_peak_window_hours: 6.0,
            ac_forward_creation_period: 10.0,
            rooa_average_summer_demand: 0.1,
            rooa_forward_creation_period: 7.0,
        }
    }

    #[test]
    fn test_peak_demand_savings() {
        let ys = peak_demand_savings(array![1.0, 0.5, 0.0].view(), &constants()).unwrap();
        assert_relative_eq!(ys[0], 0.1 * 6.0 * 7.0, epsilon = 1e-12);
        assert_relative_eq!(ys[1], 0.5 * 0.1 * 6.0 * 7.0, epsilon = 1e-12);
        assert_eq!(ys[2], 0.0);
    }

    #[test]
    fn test_nan_firmness_rejected() {
        let err = peak_demand_savings(array![1.0, f64::NAN].view(), &constants()).unwrap_err();
        assert!(matches!(
            err,
            ActivityError::Lookup(LookupError::NotANumber { index: 1 })
        ));
    }
}
