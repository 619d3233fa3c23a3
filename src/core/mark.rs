//! Code matching and annotation: apply, batch apply, clear and undo.

use crate::core::history::HistoryEntry;
use crate::core::normalize::normalize;
use crate::core::session::Session;
use crate::models::{BatchReport, Outcome, UndoResult};

pub struct MarkLogic;

impl MarkLogic {
    /// Mark every row whose id contains the normalized `raw` code.
    ///
    /// An empty `annotation` writes the check mark, anything else is written
    /// verbatim. Invalid and unmatched codes leave the table and the history
    /// untouched.
    pub fn apply(session: &mut Session, raw: &str, annotation: &str) -> Outcome {
        let code = normalize(raw);

        if !session.rules.accepts(&code) {
            return Outcome::Invalid {
                code,
                min: session.rules.min_len,
                max: session.rules.max_len,
            };
        }

        let positions = session.table.match_code(&code);
        if positions.is_empty() {
            return Outcome::NotFound { code };
        }

        let prior = session.table.get_marked(&positions);
        session.history.push(HistoryEntry::new(prior));

        let count = positions.len();
        let outcome = if annotation.is_empty() {
            let mark = session.rules.check_mark.clone();
            session.table.set_marked(&positions, &mark);
            Outcome::MarkedOk { code, count }
        } else {
            session.table.set_marked(&positions, annotation);
            Outcome::AnnotatedOk {
                code,
                annotation: annotation.to_string(),
                count,
            }
        };

        session.log("apply", raw.trim(), &outcome.to_string());
        outcome
    }

    /// Apply the same annotation to each non-blank line of `text`, in order.
    pub fn apply_batch(session: &mut Session, text: &str, annotation: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            report.push(Self::apply(session, line, annotation));
        }
        report
    }

    /// Remove the mark from every row whose id contains `raw`.
    ///
    /// Only trims and uppercases the input, with no length bounds, and does
    /// not record history: a clear cannot be undone.
    pub fn clear(session: &mut Session, raw: &str) -> Outcome {
        let code = raw.trim().to_uppercase();

        if code.is_empty() {
            return Outcome::Invalid {
                code,
                min: session.rules.min_len,
                max: session.rules.max_len,
            };
        }

        let positions = session.table.match_code(&code);
        if positions.is_empty() {
            return Outcome::NotFound { code };
        }

        session.table.set_marked(&positions, "");
        let outcome = Outcome::Cleared {
            code,
            count: positions.len(),
        };
        session.log("clear", raw.trim(), &outcome.to_string());
        outcome
    }

    /// Restore the values overwritten by the most recent apply.
    pub fn undo(session: &mut Session) -> UndoResult {
        match session.history.pop() {
            None => UndoResult::NothingToUndo,
            Some(entry) => {
                session.table.restore_marked(entry.prior());
                let result = UndoResult::UndoOk {
                    restored: entry.len(),
                };
                session.log("undo", "", &result.to_string());
                result
            }
        }
    }
}
