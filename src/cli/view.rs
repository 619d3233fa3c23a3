//! Console rendering of the table and its counters.

use crate::config::Config;
use crate::core::table::Table;
use crate::models::{Preset, Summary};
use crate::utils::colors::color_for_marked;
use crate::utils::table::TextTable;

const MAX_CELL_WIDTH: usize = 32;

pub fn summary_line(summary: &Summary, check_mark: &str) -> String {
    format!(
        "📊 Total: {} | {check_mark} Marked: {} | 📝 Annotated: {}",
        summary.total, summary.marked, summary.annotated
    )
}

pub fn print_summary(summary: &Summary, check_mark: &str) {
    println!("{}", summary_line(summary, check_mark));
}

/// Render the rows matching `filter` (all rows when `None`), at most
/// `cfg.show_rows` of them unless `all`.
pub fn render_table(table: &Table, cfg: &Config, filter: Option<&str>, all: bool) -> String {
    let positions = table.filter(filter.unwrap_or(""));
    let limit = if all { positions.len() } else { cfg.show_rows };
    let shown: Vec<usize> = positions.iter().copied().take(limit).collect();

    let rows: Vec<Vec<String>> = shown
        .iter()
        .filter_map(|&p| table.row(p).map(<[String]>::to_vec))
        .collect();

    let mut header = vec!["#".to_string()];
    header.extend(table.columns().iter().cloned());

    let numbered: Vec<Vec<String>> = shown
        .iter()
        .zip(rows)
        .map(|(p, mut row)| {
            row.insert(0, (p + 1).to_string());
            row
        })
        .collect();

    let mut text = TextTable::fit(&header, &numbered, MAX_CELL_WIDTH);
    let marked_col = table.marked_column_index() + 1;
    for row in numbered {
        let colors = (0..row.len())
            .map(|i| (i == marked_col).then(|| color_for_marked(&row[i], &cfg.check_mark)))
            .collect();
        text.add_colored_row(row, colors);
    }

    let mut out = text.render();
    if positions.len() > shown.len() {
        out.push_str(&format!(
            "… {} more row(s) (use `show --all`)\n",
            positions.len() - shown.len()
        ));
    }
    if positions.is_empty() {
        out.push_str("(no rows)\n");
    }
    out
}

pub fn presets_line() -> String {
    Preset::ALL
        .iter()
        .map(Preset::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
