//! Rarefaction output writers.

pub mod error;
pub mod format;
pub mod json;
pub mod rows;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use rarefaction_model::RarefactionTable;

pub use error::{OutputError, Result};
pub use format::OutputFormat;
pub use json::{JsonRank, JsonTable, write_json};
pub use rows::{format_rate, table_rows, write_rows};

/// Write `table` in `format` to any writer.
pub fn write_table<W: Write>(table: &RarefactionTable, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Rows => write_rows(table, writer),
        OutputFormat::Json => write_json(table, writer),
    }
}

/// Create (or truncate) `path` and write `table` to it.
pub fn write_table_to_path(table: &RarefactionTable, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_table(table, format, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), format = %format, samples = table.len(), "wrote rarefaction table");
    Ok(())
}
