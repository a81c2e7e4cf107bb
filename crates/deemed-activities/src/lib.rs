//! # Deemed Activities
//!
//! Deemed savings calculations for individual scheme activities, built on
//! the table lookups of `deemed-math` and the parameters of `deemed-config`.
//!
//! - **Motors**: baseline and existing motor efficiency
//! - **Air conditioners**: capacity bands, baseline power input, peak demand savings
//! - **Appliance removal**: peak demand savings of a removed refrigerator or freezer
//! - **Reference energy use**: cooling and heating reference use by climate zone
//!
//! Every calculation takes one element per building and returns one result
//! per building, in the same order.
//!
//! ## Example
//!
//! ```rust
//! use deemed_activities::prelude::*;
//! use deemed_math::BreakpointTable;
//! use ndarray::array;
//!
//! let table = BreakpointTable::builder(vec![0.73, 1.1, 1.5])
//!     .row("poles_2", vec![72.1, 75.0, 77.2])
//!     .row("poles_4", vec![72.1, 75.0, 77.2])
//!     .build()
//!     .unwrap();
//!
//! let baseline = motors::baseline_motor_efficiency(
//!     &table,
//!     array![1.1, 1.3].view(),
//!     &[MotorPoles::Poles2, MotorPoles::Poles4],
//! )
//! .unwrap();
//! assert!((baseline[0] - 75.0).abs() < 1e-12);
//!
//! let existing = motors::existing_motor_efficiency(
//!     array![88.0, -999.0].view(),
//!     baseline.view(),
//! )
//! .unwrap();
//! assert_eq!(existing[0], 88.0);
//! assert_eq!(existing[1], baseline[1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod air_conditioner;
pub mod categories;
pub mod coefficients;
pub mod constants;
pub mod d16;
pub mod error;
pub mod motors;
pub mod rooa;

pub use air_conditioner::BaselinePowerTable;
pub use categories::{AcType, CapacityBand, ClimateZone, InstallationType, MotorPoles};
pub use coefficients::CoefficientTable;
pub use constants::SchemeConstants;
pub use d16::ReferenceEnergyTables;
pub use error::{ActivityError, ActivityResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::air_conditioner::{self, BaselinePowerTable};
    pub use crate::categories::{AcType, CapacityBand, ClimateZone, InstallationType, MotorPoles};
    pub use crate::constants::SchemeConstants;
    pub use crate::d16::ReferenceEnergyTables;
    pub use crate::error::{ActivityError, ActivityResult};
    pub use crate::{motors, rooa};
}
