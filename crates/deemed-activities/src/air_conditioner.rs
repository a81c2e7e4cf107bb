//! Installation or replacement of an air conditioner.
//!
//! Peak demand savings compare the unit's measured power input with a
//! baseline power input. The baseline is a per-kW scale factor, chosen by
//! installation type, AC type and capacity band, times the unit's cooling
//! capacity.

use std::path::Path;

use ndarray::{Array1, ArrayView1, Zip};
use serde::{Deserialize, Serialize};

use deemed_config::{read_file, ConfigError, ConfigResult, TableFormat, Validate};
use deemed_math::{LabelledBrackets, LookupResult};

use crate::categories::{AcType, CapacityBand, InstallationType};
use crate::coefficients::CoefficientTable;
use crate::constants::SchemeConstants;
use crate::error::{check_len, check_not_nan, ActivityResult};

/// Returns the classifier mapping capacity (kW) onto capacity bands.
///
/// Bands are half-open: a capacity equal to a threshold belongs to the
/// band above it, and every capacity of 65 kW or more is
/// [`CapacityBand::MoreThan65`].
pub fn capacity_bands() -> LookupResult<LabelledBrackets<CapacityBand>> {
    let mut boundaries = Vec::with_capacity(CapacityBand::THRESHOLDS.len() + 2);
    boundaries.push(f64::NEG_INFINITY);
    boundaries.extend(CapacityBand::THRESHOLDS);
    boundaries.push(f64::INFINITY);
    LabelledBrackets::new(boundaries, CapacityBand::ALL.to_vec())
}

/// Returns the capacity band of each unit.
///
/// # Errors
///
/// [`LookupError::NotANumber`](deemed_math::LookupError::NotANumber) for a
/// NaN capacity.
pub fn capacity_band(capacity: ArrayView1<'_, f64>) -> ActivityResult<Vec<CapacityBand>> {
    Ok(capacity_bands()?.labels_of(capacity)?)
}

/// Evaluates `coefficient(cell) * capacity * factor(i)` for each unit.
pub(crate) fn scale_by_capacity(
    table: &CoefficientTable,
    capacity: ArrayView1<'_, f64>,
    ac_type: &[AcType],
    installation: &[InstallationType],
    mut factor: impl FnMut(usize) -> ActivityResult<f64>,
) -> ActivityResult<Array1<f64>> {
    check_len("AC types", capacity.len(), ac_type.len())?;
    check_len("installation types", capacity.len(), installation.len())?;

    let bands = capacity_band(capacity)?;
    let mut out = Array1::zeros(capacity.len());
    for (i, band) in bands.into_iter().enumerate() {
        let coefficient = table.coefficient(installation[i], ac_type[i], band)?;
        out[i] = coefficient * capacity[i] * factor(i)?;
    }
    Ok(out)
}

/// Baseline power input per kW of cooling capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselinePowerTable {
    scale: CoefficientTable,
}

impl BaselinePowerTable {
    /// Wraps a coefficient table.
    pub fn new(scale: CoefficientTable) -> Self {
        Self { scale }
    }

    /// Parses and validates a table from YAML.
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        let table: Self =
            serde_yaml::from_str(text).map_err(|e| ConfigError::parse(TableFormat::Yaml, e))?;
        table.scale.validate_or_error()?;
        Ok(table)
    }

    /// Reads and validates a YAML table file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = read_file(path)?;
        let table = Self::from_yaml(&text)?;
        log::debug!(
            "Loaded baseline power table from {} ({} cells)",
            path.display(),
            table.scale.len()
        );
        Ok(table)
    }

    /// Returns the scale factors.
    pub fn scale(&self) -> &CoefficientTable {
        &self.scale
    }

    /// Returns the baseline power input (kW) of each unit:
    /// `scale[installation][ac_type][band(capacity)] * capacity`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::ShapeMismatch`](deemed_math::LookupError::ShapeMismatch)
    ///   if the inputs differ in length
    /// - [`LookupError::UnknownCategory`](deemed_math::LookupError::UnknownCategory)
    ///   if a unit's cell is missing
    pub fn baseline_power_input(
        &self,
        capacity: ArrayView1<'_, f64>,
        ac_type: &[AcType],
        installation: &[InstallationType],
    ) -> ActivityResult<Array1<f64>> {
        scale_by_capacity(&self.scale, capacity, ac_type, installation, |_| Ok(1.0))
    }
}

/// Returns the peak demand savings (kW) of each unit:
/// `(baseline - power_input) * daily peak hours * firmness * forward creation period`.
///
/// # Errors
///
/// - [`LookupError::ShapeMismatch`](deemed_math::LookupError::ShapeMismatch)
///   if the inputs differ in length
/// - [`LookupError::NotANumber`](deemed_math::LookupError::NotANumber)
///   naming the first NaN element of any input
pub fn peak_demand_savings(
    baseline_power_input: ArrayView1<'_, f64>,
    power_input: ArrayView1<'_, f64>,
    firmness_factor: ArrayView1<'_, f64>,
    constants: &SchemeConstants,
) -> ActivityResult<Array1<f64>> {
    check_len("power input", baseline_power_input.len(), power_input.len())?;
    check_len("firmness factor", baseline_power_input.len(), firmness_factor.len())?;
    check_not_nan(baseline_power_input)?;
    check_not_nan(power_input)?;
    check_not_nan(firmness_factor)?;

    let scale = constants.daily_peak_window_hours * constants.ac_forward_creation_period;
    Ok(Zip::from(&baseline_power_input)
        .and(&power_input)
        .and(&firmness_factor)
        .map_collect(|&baseline, &input, &firmness| (baseline - input) * firmness * scale))
}
