// src/import/csv.rs

use crate::errors::AppResult;
use crate::import::RawSheet;
use crate::import::cell::Cell;
use csv::ReaderBuilder;
use std::path::Path;

/// Read a comma-separated file with a header row. Ragged rows are accepted.
pub(crate) fn read_csv(path: &Path) -> AppResult<RawSheet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
            text_cell(h)
        })
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(text_cell).collect());
    }

    Ok(RawSheet { header, rows })
}

fn text_cell(s: &str) -> Cell {
    if s.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(s.to_string())
    }
}
