//! Session bootstrap: read the source spreadsheet into a [`Table`].
//!
//! The date column is rewritten with the configured format (unreadable
//! dates become blank) and the `Marked` column is added when missing.

mod cell;
mod csv;
pub(crate) mod excel_date;
mod xlsx;

pub use cell::Cell;

use crate::config::Config;
use crate::core::table::Table;
use crate::errors::{AppError, AppResult};
use crate::utils::path::extension_of;
use std::collections::HashMap;
use std::path::Path;

/// Header plus body cells, straight from the reader.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Load `path` (xlsx/xlsm/xlsb/xls/ods or csv) and shape it for marking.
    pub fn load(path: &Path, cfg: &Config) -> AppResult<Table> {
        if !path.is_file() {
            return Err(AppError::MissingFile(path.display().to_string()));
        }

        let raw = match extension_of(path).as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => xlsx::read_workbook(path)?,
            Some("csv") => csv::read_csv(path)?,
            _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
        };

        Ok(Self::shape(raw, cfg))
    }

    /// Turn raw cells into a table: name the header, drop blank rows,
    /// reformat the date column, add `Marked`.
    pub fn shape(raw: RawSheet, cfg: &Config) -> Table {
        let columns = header_names(&raw.header);
        let date_col = columns.iter().position(|c| *c == cfg.date_column);

        let rows = raw
            .rows
            .into_iter()
            .filter(|row| !row.iter().all(Cell::is_empty))
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if Some(i) == date_col {
                            excel_date::format_date_cell(cell, &cfg.date_format)
                        } else {
                            cell.to_text()
                        }
                    })
                    .collect()
            })
            .collect();

        Table::from_parts(columns, rows, &cfg.id_column, &cfg.marked_column)
    }
}

/// Blank header cells become `Unnamed: <i>`; repeated names get `.1`, `.2`...
fn header_names(header: &[Cell]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let text = cell.to_text().trim().to_string();
            let base = if text.is_empty() {
                format!("Unnamed: {i}")
            } else {
                text
            };
            let n = seen.entry(base.clone()).or_insert(0);
            let name = if *n == 0 {
                base
            } else {
                format!("{base}.{n}")
            };
            *n += 1;
            name
        })
        .collect()
}
