//! Reading breakpoint tables from text and files.

use std::fs;
use std::path::Path;

use deemed_math::BreakpointTable;

use crate::error::{ConfigError, ConfigResult};
use crate::format::TableFormat;
use crate::source::{TableLayout, TableSource};

/// Parses a table from text in the given format.
///
/// `name` is only used for error messages.
pub fn parse_table(
    name: &str,
    text: &str,
    format: TableFormat,
    layout: &TableLayout,
) -> ConfigResult<BreakpointTable> {
    TableSource::parse(text, format)?.into_table(name, layout)
}

/// Loads a table from a file, inferring the format from its extension.
///
/// The table is named after the file stem in error messages.
pub fn load_table(path: impl AsRef<Path>, layout: &TableLayout) -> ConfigResult<BreakpointTable> {
    let path = path.as_ref();
    let format = TableFormat::from_path(path)?;
    let text = read_file(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let table = parse_table(name, &text, format, layout)?;
    log::debug!(
        "Loaded table '{}' from {} ({} rows, {} boundaries)",
        name,
        path.display(),
        table.row_count(),
        table.boundaries().len()
    );
    Ok(table)
}

/// Reads a whole file as text, reporting failures as [`ConfigError::Io`].
pub fn read_file(path: impl AsRef<Path>) -> ConfigResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
