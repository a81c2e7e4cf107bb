//! Deemed Savings Configuration Layer
//!
//! This crate loads the breakpoint tables that parameterise deemed energy
//! savings calculations, and organises them into a dated parameter store.
//!
//! # Features
//!
//! - **Table Formats**: YAML, JSON, TOML and CSV table files
//! - **Layouts**: Configurable boundary column and edge policy per table
//! - **Dated Versions**: Each table version applies from an effective date
//! - **Manifests**: One file lists every table of a parameter set
//! - **Validation**: Malformed tables are rejected when loaded, not when queried
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use deemed_config::{parse_table, ParameterStore, TableFormat, TableLayout};
//!
//! let yaml = r#"
//! description: Baseline motor efficiency (%)
//! rated_output: [0.73, 1.1, 1.5]
//! poles_2: [72.1, 75.0, 77.2]
//! poles_4: [72.1, 75.0, 77.2]
//! "#;
//!
//! let layout = TableLayout::with_boundary_key("rated_output");
//! let table = parse_table("motors", yaml, TableFormat::Yaml, &layout).unwrap();
//!
//! let effective = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
//! let store = ParameterStore::builder()
//!     .insert("motors_baseline_efficiency", effective, table)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let motors = store.table_at("motors_baseline_efficiency", today).unwrap();
//! assert_eq!(motors.row_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod format;
mod loader;
mod manifest;
mod source;
mod store;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use format::TableFormat;
pub use loader::{load_table, parse_table, read_file};
pub use manifest::{Manifest, ManifestEntry};
pub use source::{Column, TableLayout, TableSource, DEFAULT_BOUNDARY_KEY};
pub use store::{ParameterStore, ParameterStoreBuilder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::format::TableFormat;
    pub use crate::loader::{load_table, parse_table};
    pub use crate::source::TableLayout;
    pub use crate::store::ParameterStore;
}
