use crate::import::excel_date::excel_serial_to_datetime;
use chrono::Timelike;

/// A cell as read from the source file, before it becomes table text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Excel date/time serial number.
    DateTime(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text form kept in the table and written back on export.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => float_to_text(*f),
            Cell::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
            Cell::DateTime(serial) => match excel_serial_to_datetime(*serial) {
                Some(dt) if dt.num_seconds_from_midnight() == 0 => {
                    dt.format("%Y-%m-%d").to_string()
                }
                Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
                None => float_to_text(*serial),
            },
        }
    }
}

/// Whole floats print without the trailing `.0` so ids read as typed.
fn float_to_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}
