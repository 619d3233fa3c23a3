//! Undo stack for apply operations.

/// `Marked` values of the rows touched by one apply, taken before the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    prior: Vec<(usize, String)>,
}

impl HistoryEntry {
    pub fn new(prior: Vec<(usize, String)>) -> Self {
        Self { prior }
    }

    pub fn prior(&self) -> &[(usize, String)] {
        &self.prior
    }

    pub fn len(&self) -> usize {
        self.prior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prior.is_empty()
    }
}

/// Unbounded LIFO of [`HistoryEntry`]; each undo pops exactly one.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
