//! Per-kW coefficients nested by installation type, AC type and capacity band.
//!
//! ```yaml
//! new:
//!   type_6:
//!     less_than_4: 0.295
//!     between_4_and_10: 0.323
//! replacement:
//!   type_6:
//!     less_than_4: 0.33
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use deemed_config::{Validate, ValidationError};
use deemed_math::LookupError;

use crate::categories::{AcType, CapacityBand, InstallationType};
use crate::error::ActivityResult;

type ByBand = BTreeMap<CapacityBand, f64>;
type ByType = BTreeMap<AcType, ByBand>;

/// A coefficient for each (installation type, AC type, capacity band) cell.
///
/// Cells may be left out; looking one up is then an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientTable {
    cells: BTreeMap<InstallationType, ByType>,
}

impl CoefficientTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one cell.
    #[must_use]
    pub fn with(
        mut self,
        installation: InstallationType,
        ac_type: AcType,
        band: CapacityBand,
        coefficient: f64,
    ) -> Self {
        self.cells
            .entry(installation)
            .or_default()
            .entry(ac_type)
            .or_default()
            .insert(band, coefficient);
        self
    }

    /// Returns a cell, if present.
    pub fn get(
        &self,
        installation: InstallationType,
        ac_type: AcType,
        band: CapacityBand,
    ) -> Option<f64> {
        self.cells.get(&installation)?.get(&ac_type)?.get(&band).copied()
    }

    /// Returns a cell.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownCategory`] naming the first missing level and
    /// the keys available there.
    pub fn coefficient(
        &self,
        installation: InstallationType,
        ac_type: AcType,
        band: CapacityBand,
    ) -> ActivityResult<f64> {
        let by_type = self.cells.get(&installation).ok_or_else(|| {
            LookupError::unknown_category(
                installation.key(),
                self.cells.keys().map(InstallationType::key),
            )
        })?;
        let by_band = by_type.get(&ac_type).ok_or_else(|| {
            LookupError::unknown_category(
                format!("{}/{}", installation.key(), ac_type.key()),
                by_type.keys().map(AcType::key),
            )
        })?;
        let value = by_band.get(&band).ok_or_else(|| {
            LookupError::unknown_category(
                format!("{}/{}/{}", installation.key(), ac_type.key(), band.key()),
                by_band.keys().map(CapacityBand::key),
            )
        })?;
        Ok(*value)
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    /// Returns true if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Validate for CoefficientTable {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (installation, by_type) in &self.cells {
            for (ac_type, by_band) in by_type {
                for (band, value) in by_band {
                    if !(value.is_finite() && *value >= 0.0) {
                        errors.push(ValidationError::new(
                            format!("{}.{}.{}", installation.key(), ac_type.key(), band.key()),
                            format!("must be non-negative and finite, got {value}"),
                        ));
                    }
                }
            }
        }
        errors
    }
}
