// src/import/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::import::RawSheet;
use crate::import::cell::Cell;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Read the first worksheet of a workbook; its first row is the header.
pub(crate) fn read_workbook(path: &Path) -> AppResult<RawSheet> {
    let mut workbook = open_workbook_auto(path).map_err(to_app_error)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Spreadsheet("no sheets found in workbook".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(to_app_error)?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .map(|r| r.iter().map(data_to_cell).collect::<Vec<_>>())
        .ok_or(AppError::EmptyInput)?;

    let body = rows
        .map(|r| r.iter().map(data_to_cell).collect())
        .collect();

    Ok(RawSheet { header, rows: body })
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Spreadsheet(e.to_string())
}
