//! Activity calculation errors.

use ndarray::ArrayView1;
use thiserror::Error;

use deemed_config::ConfigError;
use deemed_math::LookupError;

/// Activity calculation result type.
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Errors raised by activity calculations.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// A table lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Parameters could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No equivalent hours are defined for a climate zone.
    #[error("No {kind} hours defined for climate zone '{zone}'")]
    UnknownClimateZone {
        /// `cooling` or `heating`.
        kind: &'static str,
        /// The zone key.
        zone: String,
    },
}

/// Checks that a per-building input has one element per building.
pub(crate) fn check_len(context: &str, expected: usize, actual: usize) -> ActivityResult<()> {
    if expected != actual {
        return Err(LookupError::shape_mismatch(context, expected, actual).into());
    }
    Ok(())
}

/// Checks that a per-building input holds no NaN, naming the first one.
pub(crate) fn check_not_nan(values: ArrayView1<'_, f64>) -> ActivityResult<()> {
    match values.iter().position(|v| v.is_nan()) {
        Some(index) => Err(LookupError::NotANumber { index }.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_lookup_error_is_transparent() {
        let err: ActivityError = LookupError::unknown_category("poles_3", ["poles_2"]).into();
        assert_eq!(
            err.to_string(),
            "Unknown category 'poles_3' (available: poles_2)"
        );
    }

    #[test]
    fn test_check_len() {
        assert!(check_len("poles", 3, 3).is_ok());
        assert!(matches!(
            check_len("poles", 3, 2),
            Err(ActivityError::Lookup(LookupError::ShapeMismatch { expected: 3, actual: 2, .. }))
        ));
    }

    #[test]
    fn test_check_not_nan() {
        assert!(check_not_nan(array![1.0, -2.0, f64::INFINITY].view()).is_ok());
        assert!(matches!(
            check_not_nan(array![1.0, f64::NAN, f64::NAN].view()),
            Err(ActivityError::Lookup(LookupError::NotANumber { index: 1 }))
        ));
    }

    #[test]
    fn test_unknown_zone_display() {
        let err = ActivityError::UnknownClimateZone {
            kind: "heating",
            zone: "cold".into(),
        };
        assert_eq!(err.to_string(), "No heating hours defined for climate zone 'cold'");
    }
}
