use crate::core::table::Table;
use serde::Serialize;

/// Row counters shown next to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub marked: usize,
    pub annotated: usize,
}

impl Summary {
    /// `marked` counts the check mark only; any other non-empty value is an
    /// annotation.
    pub fn of(table: &Table, check_mark: &str) -> Self {
        let mut marked = 0;
        let mut annotated = 0;
        for value in table.marked_values() {
            if value == check_mark {
                marked += 1;
            } else if !value.is_empty() {
                annotated += 1;
            }
        }
        Self {
            total: table.len(),
            marked,
            annotated,
        }
    }
}
