//! Working copy of the loaded spreadsheet.
//!
//! The table owns every cell as a string. Only the `Marked` column is ever
//! written after load; the remaining columns are carried through to export
//! untouched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    id_col: Option<usize>,
    marked_col: usize,
}

impl Table {
    /// Build a table from a header and raw rows.
    ///
    /// Short rows are padded and long rows truncated to the header width.
    /// When `marked_column` is missing it is inserted right after
    /// `id_column`, or appended when there is no id column either.
    pub fn from_parts(
        mut columns: Vec<String>,
        mut rows: Vec<Vec<String>>,
        id_column: &str,
        marked_column: &str,
    ) -> Self {
        let width = columns.len();
        for row in rows.iter_mut() {
            row.resize(width, String::new());
        }

        let id_col = columns.iter().position(|c| c == id_column);

        let marked_col = match columns.iter().position(|c| c == marked_column) {
            Some(idx) => idx,
            None => {
                let idx = id_col.map(|i| i + 1).unwrap_or(width);
                columns.insert(idx, marked_column.to_string());
                for row in rows.iter_mut() {
                    row.insert(idx, String::new());
                }
                idx
            }
        };

        Self {
            columns,
            rows,
            id_col,
            marked_col,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, pos: usize) -> Option<&[String]> {
        self.rows.get(pos).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_id_column(&self) -> bool {
        self.id_col.is_some()
    }

    pub fn id_column_index(&self) -> Option<usize> {
        self.id_col
    }

    pub fn marked_column_index(&self) -> usize {
        self.marked_col
    }

    /// Identifying field of a row, empty when the table has no id column.
    pub fn id_of(&self, pos: usize) -> &str {
        match (self.id_col, self.rows.get(pos)) {
            (Some(c), Some(row)) => row[c].as_str(),
            _ => "",
        }
    }

    pub fn marked(&self, pos: usize) -> &str {
        self.rows
            .get(pos)
            .map(|row| row[self.marked_col].as_str())
            .unwrap_or("")
    }

    /// Positions of every row whose uppercased id contains `code`.
    ///
    /// Never mutates. An empty `code` matches every row, so callers that go
    /// on to write must reject empty codes first.
    pub fn match_code(&self, code: &str) -> Vec<usize> {
        if self.id_col.is_none() {
            return Vec::new();
        }
        (0..self.rows.len())
            .filter(|&pos| self.id_of(pos).to_uppercase().contains(code))
            .collect()
    }

    /// Overwrite `Marked` on exactly the given positions.
    pub fn set_marked(&mut self, positions: &[usize], value: &str) {
        let col = self.marked_col;
        for &pos in positions {
            if let Some(row) = self.rows.get_mut(pos) {
                row[col] = value.to_string();
            }
        }
    }

    /// Snapshot of `Marked` for the given positions, in the order given.
    pub fn get_marked(&self, positions: &[usize]) -> Vec<(usize, String)> {
        positions
            .iter()
            .filter(|&&pos| pos < self.rows.len())
            .map(|&pos| (pos, self.marked(pos).to_string()))
            .collect()
    }

    /// Write back a snapshot taken with [`Table::get_marked`].
    pub fn restore_marked(&mut self, snapshot: &[(usize, String)]) {
        let col = self.marked_col;
        for (pos, value) in snapshot {
            if let Some(row) = self.rows.get_mut(*pos) {
                row[col] = value.clone();
            }
        }
    }

    /// Positions whose id or `Marked` value contains `query`, ignoring case.
    /// An empty query keeps every row.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return (0..self.rows.len()).collect();
        }
        (0..self.rows.len())
            .filter(|&pos| {
                self.id_of(pos).to_lowercase().contains(&needle)
                    || self.marked(pos).to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Iterate over the `Marked` column.
    pub fn marked_values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row[self.marked_col].as_str())
    }
}
