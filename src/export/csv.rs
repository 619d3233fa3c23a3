// src/export/csv.rs

use crate::core::table::Table;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// UTF-8 CSV: header row then every row, all fields as text.
pub(crate) fn export_csv(table: &Table, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    Ok(())
}
