// src/export/xlsx.rs

use crate::core::table::Table;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Plain decimal numbers; codes with leading zeros stay text.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(0|[1-9]\d*)(\.\d+)?$").expect("static regex"));

const MAX_COL_WIDTH: usize = 60;

/// Digits an f64 holds exactly; longer numbers are written as text.
const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// Styled XLSX export with auto-sized columns.
pub(crate) fn export_xlsx(table: &Table, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.columns().iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let marked_col = table.marked_column_index();
    let id_col = table.id_column_index();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, values) in table.rows().iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            let as_text = col == marked_col || Some(col) == id_col;
            write_xlsx_cell(worksheet, row, col as u16, value, band_color, as_text)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(MAX_COL_WIDTH) as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    Ok(())
}

/// Write one cell: plain numbers as numbers, everything else as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    force_text: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if !force_text && is_exact_number(s) {
        if let Ok(num) = s.parse::<f64>() {
            worksheet
                .write_with_format(row, col, num, &base.set_align(FormatAlign::Right))
                .map_err(to_export_error)?;
            return Ok(());
        }
    }

    if s.is_empty() {
        worksheet
            .write_blank(row, col, &base)
            .map_err(to_export_error)?;
    } else {
        worksheet
            .write_with_format(row, col, s, &base)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Plain decimal that survives the trip through an f64 unchanged.
fn is_exact_number(s: &str) -> bool {
    if !NUMERIC.is_match(s) {
        return false;
    }
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').len() <= MAX_SIGNIFICANT_DIGITS
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_detection_keeps_codes_as_text() {
        assert!(NUMERIC.is_match("1234"));
        assert!(NUMERIC.is_match("-12.50"));
        assert!(NUMERIC.is_match("0"));
        assert!(!NUMERIC.is_match("0123"));
        assert!(!NUMERIC.is_match("AB1234"));
        assert!(!NUMERIC.is_match("NaN"));
        assert!(!NUMERIC.is_match("1e5"));
        assert!(!NUMERIC.is_match(""));
    }

    #[test]
    fn long_numbers_stay_text() {
        assert!(is_exact_number("123456789012345"));
        assert!(is_exact_number("0.123456789012345"));
        assert!(!is_exact_number("1234567890123456"));
        assert!(!is_exact_number("12345678901234567890"));
        assert!(!is_exact_number("0123"));
    }

    #[test]
    fn long_ids_round_trip() {
        use calamine::{Data, Reader, open_workbook_auto};

        let table = Table::from_parts(
            vec!["Nº".into(), "Referencia".into(), "Importe".into()],
            vec![vec![
                "12345678901234567890".into(),
                "98765432109876543210".into(),
                "42".into(),
            ]],
            "Nº",
            "Marked",
        );
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ids.xlsx");
        export_xlsx(&table, &path).expect("export");

        let mut wb = open_workbook_auto(&path).expect("open xlsx");
        let range = wb.worksheet_range("Sheet1").expect("sheet");
        let row: Vec<Data> = range.rows().nth(1).expect("row").to_vec();
        assert_eq!(row[0], Data::String("12345678901234567890".into()));
        assert_eq!(row[2], Data::String("98765432109876543210".into()));
        assert_eq!(row[3], Data::Float(42.0));
    }
}
