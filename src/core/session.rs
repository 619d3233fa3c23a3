//! Explicit session context: the loaded table, its undo history and the
//! activity log. Created when a file is loaded and dropped when the shell
//! exits; every engine call receives it by `&mut`.

use crate::config::Config;
use crate::core::history::History;
use crate::core::table::Table;
use crate::models::Summary;
use crate::models::log_entry::LogEntry;

pub const DEFAULT_CHECK_MARK: &str = "✔️";
pub const DEFAULT_MIN_CODE_LEN: usize = 4;
pub const DEFAULT_MAX_CODE_LEN: usize = 14;

/// Validation bounds and the value written for a plain mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkRules {
    pub min_len: usize,
    pub max_len: usize,
    pub check_mark: String,
}

impl Default for MarkRules {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_CODE_LEN,
            max_len: DEFAULT_MAX_CODE_LEN,
            check_mark: DEFAULT_CHECK_MARK.to_string(),
        }
    }
}

impl From<&Config> for MarkRules {
    fn from(cfg: &Config) -> Self {
        Self {
            min_len: cfg.min_code_len,
            max_len: cfg.max_code_len,
            check_mark: cfg.check_mark.clone(),
        }
    }
}

impl MarkRules {
    pub fn accepts(&self, code: &str) -> bool {
        (self.min_len..=self.max_len).contains(&code.chars().count())
    }
}

#[derive(Debug)]
pub struct Session {
    pub table: Table,
    pub history: History,
    pub rules: MarkRules,
    log: Vec<LogEntry>,
}

impl Session {
    pub fn new(table: Table, rules: MarkRules) -> Self {
        Self {
            table,
            history: History::new(),
            rules,
            log: Vec::new(),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.table, &self.rules.check_mark)
    }

    pub fn log(&mut self, operation: &str, target: &str, message: &str) {
        self.log.push(LogEntry::now(operation, target, message));
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.log
    }
}
