// src/import/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::import::cell::Cell;

/// Excel serial → date/time. Serial 0 is 1899-12-30, the usual 1900 system
/// epoch once Lotus' phantom leap day is accounted for.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..2_958_466.0).contains(&serial) {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::milliseconds(millis))
}

/// Textual date(time) layouts accepted in the date column.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

pub(crate) fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Best-effort date of a cell; anything unparseable is `None`.
pub(crate) fn cell_to_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(serial) | Cell::Float(serial) => {
            excel_serial_to_datetime(*serial).map(|dt| dt.date())
        }
        Cell::Int(i) => excel_serial_to_datetime(*i as f64).map(|dt| dt.date()),
        Cell::Text(s) => parse_date_text(s),
        Cell::Empty | Cell::Bool(_) => None,
    }
}

/// Reformat a date cell with `format`, or blank it when it cannot be read.
pub(crate) fn format_date_cell(cell: &Cell, format: &str) -> String {
    cell_to_date(cell)
        .map(|d| d.format(format).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_epoch() {
        let dt = excel_serial_to_datetime(1.0).expect("serial 1");
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1899, 12, 31).expect("date"));
        assert!(excel_serial_to_datetime(-1.0).is_none());
        assert!(excel_serial_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn text_layouts() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).expect("date");
        for s in [
            "2024-03-05",
            "2024-03-05 10:30:00",
            "2024-03-05T10:30:00",
            "05/03/2024",
            "05-03-2024",
            "05/03/2024 08:00",
        ] {
            assert_eq!(parse_date_text(s), Some(d), "input {s}");
        }
        assert_eq!(parse_date_text("mañana"), None);
    }

    #[test]
    fn formatting_blanks_garbage() {
        assert_eq!(
            format_date_cell(&Cell::Text("2024-03-05 10:30:00".into()), "%d/%m/%Y"),
            "05/03/2024"
        );
        assert_eq!(format_date_cell(&Cell::DateTime(45000.25), "%d/%m/%Y"), "15/03/2023");
        assert_eq!(format_date_cell(&Cell::Text("n/a".into()), "%d/%m/%Y"), "");
        assert_eq!(format_date_cell(&Cell::Empty, "%d/%m/%Y"), "");
    }
}
