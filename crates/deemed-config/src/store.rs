//! Dated parameter stores.
//!
//! A [`ParameterStore`] holds every version of every table, each tagged
//! with the date from which it applies. The store is built once and is
//! read-only afterwards, so it can be shared across threads behind an
//! `Arc`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use deemed_math::BreakpointTable;

use crate::error::{ConfigError, ConfigResult};
use crate::loader::load_table;
use crate::manifest::Manifest;
use crate::source::TableLayout;

type Versions = BTreeMap<NaiveDate, Arc<BreakpointTable>>;

/// Read-only registry of dated breakpoint tables.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    tables: BTreeMap<String, Versions>,
}

impl ParameterStore {
    /// Starts a new store.
    pub fn builder() -> ParameterStoreBuilder {
        ParameterStoreBuilder::default()
    }

    /// Loads every table listed in a manifest file.
    ///
    /// Table paths are resolved relative to the manifest's directory.
    pub fn from_manifest(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let manifest = Manifest::load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        manifest
            .tables
            .iter()
            .try_fold(Self::builder(), |builder, entry| {
                builder.load(
                    &entry.name,
                    entry.effective_from,
                    base.join(&entry.path),
                    &entry.layout()?,
                )
            })?
            .build()
    }

    /// Returns the version of `name` in force on `date`: the one with the
    /// latest effective date not after `date`.
    pub fn table_at(&self, name: &str, date: NaiveDate) -> ConfigResult<Arc<BreakpointTable>> {
        self.versions_of(name)?
            .range(..=date)
            .next_back()
            .map(|(_, table)| Arc::clone(table))
            .ok_or_else(|| ConfigError::NotInForce {
                name: name.to_string(),
                date,
            })
    }

    /// Returns the most recent version of `name`.
    pub fn latest(&self, name: &str) -> ConfigResult<Arc<BreakpointTable>> {
        self.versions_of(name)?
            .values()
            .next_back()
            .map(Arc::clone)
            .ok_or_else(|| ConfigError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns the effective dates of `name`, oldest first.
    pub fn versions(&self, name: &str) -> ConfigResult<Vec<NaiveDate>> {
        Ok(self.versions_of(name)?.keys().copied().collect())
    }

    /// Returns the table names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Returns true if a table of this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns the number of table names.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the store holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn versions_of(&self, name: &str) -> ConfigResult<&Versions> {
        self.tables.get(name).ok_or_else(|| ConfigError::NotFound {
            name: name.to_string(),
        })
    }
}

/// Builder for [`ParameterStore`].
#[derive(Debug, Default)]
pub struct ParameterStoreBuilder {
    tables: BTreeMap<String, Versions>,
}

impl ParameterStoreBuilder {
    /// Adds a table version.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Duplicate`] if `name` already has a version with
    /// this effective date.
    pub fn insert(
        mut self,
        name: impl Into<String>,
        effective_from: NaiveDate,
        table: impl Into<Arc<BreakpointTable>>,
    ) -> ConfigResult<Self> {
        let name = name.into();
        let versions = self.tables.entry(name.clone()).or_default();
        if versions.contains_key(&effective_from) {
            return Err(ConfigError::Duplicate {
                name,
                effective_from,
            });
        }
        versions.insert(effective_from, table.into());
        Ok(self)
    }

    /// Loads a table file and adds it as a version.
    pub fn load(
        self,
        name: impl Into<String>,
        effective_from: NaiveDate,
        path: impl AsRef<Path>,
        layout: &TableLayout,
    ) -> ConfigResult<Self> {
        let table = load_table(path, layout)?;
        self.insert(name, effective_from, table)
    }

    /// Finishes the store.
    pub fn build(self) -> ConfigResult<ParameterStore> {
        let versions: usize = self.tables.values().map(BTreeMap::len).sum();
        log::info!(
            "Built parameter store: {} tables, {} versions",
            self.tables.len(),
            versions
        );
        Ok(ParameterStore {
            tables: self.tables,
        })
    }
}
