//! Table rendering utilities for CLI outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct TextTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Optional ANSI colour per cell, applied after padding.
    pub colors: Vec<Vec<Option<&'static str>>>,
}

impl TextTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Columns sized to fit their header and every cell, capped at `max_width`.
    pub fn fit(headers: &[String], rows: &[Vec<String>], max_width: usize) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let widest = rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .chain(std::iter::once(h.width()))
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.clone(),
                    width: widest.min(max_width),
                }
            })
            .collect();
        Self::new(columns)
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.add_colored_row(row, Vec::new());
    }

    pub fn add_colored_row(&mut self, row: Vec<String>, colors: Vec<Option<&'static str>>) {
        self.rows.push(row);
        self.colors.push(colors);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = pad(row.get(i).map(String::as_str).unwrap_or(""), col.width);
                match self.colors.get(r).and_then(|c| c.get(i)).copied().flatten() {
                    Some(color) => out.push_str(&format!("{color}{cell}{}", super::colors::RESET)),
                    None => out.push_str(&cell),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Truncate to `width` display columns (with `…`) and pad with spaces.
pub fn pad(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    if s.width() > width {
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        used += 1;
    } else {
        out.push_str(s);
        used = s.width();
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
