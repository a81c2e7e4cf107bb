//! Reference annual energy use of an air conditioner.
//!
//! The reference use is the unit's capacity times the equivalent full-load
//! hours of its climate zone times a baseline coefficient: AEER for cooling
//! and ACOP for heating, chosen like the baseline power scale by
//! installation type, AC type and capacity band.
//!
//! ```yaml
//! aeer:
//!   new:
//!     type_6: { less_than_4: 0.25, between_4_and_10: 0.28 }
//! acop:
//!   new:
//!     type_6: { less_than_4: 0.22, between_4_and_10: 0.25 }
//! cooling_hours: { hot: 1200, average: 600, cold: 200 }
//! heating_hours: { hot: 100, average: 500, cold: 1100 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use deemed_config::{
    read_file, ConfigError, ConfigResult, TableFormat, Validate, ValidationError,
};

use crate::air_conditioner::scale_by_capacity;
use crate::categories::{AcType, ClimateZone, InstallationType};
use crate::coefficients::CoefficientTable;
use crate::error::{check_len, ActivityError, ActivityResult};

/// Baseline coefficients and equivalent hours for reference energy use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEnergyTables {
    /// Baseline AEER coefficients for cooling.
    #[serde(alias = "AEER")]
    pub aeer: CoefficientTable,
    /// Baseline ACOP coefficients for heating.
    #[serde(alias = "ACOP")]
    pub acop: CoefficientTable,
    /// Equivalent cooling hours per climate zone.
    pub cooling_hours: BTreeMap<ClimateZone, f64>,
    /// Equivalent heating hours per climate zone.
    pub heating_hours: BTreeMap<ClimateZone, f64>,
}

impl ReferenceEnergyTables {
    /// Parses and validates tables from YAML.
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        let tables: Self =
            serde_yaml::from_str(text).map_err(|e| ConfigError::parse(TableFormat::Yaml, e))?;
        tables.validate_or_error()?;
        Ok(tables)
    }

    /// Reads and validates a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = read_file(path)?;
        let tables = Self::from_yaml(&text)?;
        log::debug!(
            "Loaded reference energy tables from {} ({} AEER, {} ACOP cells)",
            path.display(),
            tables.aeer.len(),
            tables.acop.len()
        );
        Ok(tables)
    }

    /// Returns the reference cooling energy use of each unit:
    /// `capacity * cooling_hours[zone] * AEER[installation][ac_type][band]`.
    ///
    /// # Errors
    ///
    /// - [`ActivityError::UnknownClimateZone`] if a zone has no cooling hours
    /// - [`LookupError::UnknownCategory`](deemed_math::LookupError::UnknownCategory)
    ///   if a unit's AEER cell is missing
    pub fn reference_cooling_energy_use(
        &self,
        cooling_capacity: ArrayView1<'_, f64>,
        zone: &[ClimateZone],
        ac_type: &[AcType],
        installation: &[InstallationType],
    ) -> ActivityResult<Array1<f64>> {
        check_len("climate zones", cooling_capacity.len(), zone.len())?;
        scale_by_capacity(&self.aeer, cooling_capacity, ac_type, installation, |i| {
            hours("cooling", &self.cooling_hours, zone[i])
        })
    }

    /// Returns the reference heating energy use of each unit:
    /// `capacity * heating_hours[zone] * ACOP[installation][ac_type][band]`.
    pub fn reference_heating_energy_use(
        &self,
        heating_capacity: ArrayView1<'_, f64>,
        zone: &[ClimateZone],
        ac_type: &[AcType],
        installation: &[InstallationType],
    ) -> ActivityResult<Array1<f64>> {
        check_len("climate zones", heating_capacity.len(), zone.len())?;
        scale_by_capacity(&self.acop, heating_capacity, ac_type, installation, |i| {
            hours("heating", &self.heating_hours, zone[i])
        })
    }
}

fn hours(
    kind: &'static str,
    table: &BTreeMap<ClimateZone, f64>,
    zone: ClimateZone,
) -> ActivityResult<f64> {
    table
        .get(&zone)
        .copied()
        .ok_or_else(|| ActivityError::UnknownClimateZone {
            kind,
            zone: zone.key().to_string(),
        })
}

impl Validate for ReferenceEnergyTables {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .aeer
            .validate()
            .into_iter()
            .chain(self.acop.validate())
            .collect();

        for (kind, table) in [
            ("cooling_hours", &self.cooling_hours),
            ("heating_hours", &self.heating_hours),
        ] {
            for (zone, value) in table {
                if !(value.is_finite() && *value >= 0.0) {
                    errors.push(ValidationError::new(
                        format!("{kind}.{}", zone.key()),
                        format!("must be non-negative and finite, got {value}"),
                    ));
                }
            }
        }

        errors
    }
}
