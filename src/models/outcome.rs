//! Results of engine operations as shown to the user.
//!
//! None of these are errors in the `AppError` sense: every variant is a
//! normal, recoverable answer that the shell prints with a matching style.

use serde::Serialize;
use std::fmt;

/// Visual treatment of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Normalized code outside the accepted length bounds.
    Invalid { code: String, min: usize, max: usize },
    /// No row id contains the code.
    NotFound { code: String },
    AnnotatedOk {
        code: String,
        annotation: String,
        count: usize,
    },
    MarkedOk { code: String, count: usize },
    Cleared { code: String, count: usize },
}

impl Outcome {
    pub fn severity(&self) -> Severity {
        match self {
            Outcome::Invalid { .. } => Severity::Error,
            Outcome::NotFound { .. } => Severity::Warning,
            Outcome::AnnotatedOk { .. } | Outcome::MarkedOk { .. } | Outcome::Cleared { .. } => {
                Severity::Success
            }
        }
    }

    /// Outcomes that should draw the user's attention (audible alert).
    pub fn is_attention(&self) -> bool {
        matches!(self, Outcome::Invalid { .. } | Outcome::NotFound { .. })
    }

    pub fn is_success(&self) -> bool {
        self.severity() == Severity::Success
    }

    /// Rows written by this outcome, 0 for attention outcomes.
    pub fn count(&self) -> usize {
        match self {
            Outcome::AnnotatedOk { count, .. }
            | Outcome::MarkedOk { count, .. }
            | Outcome::Cleared { count, .. } => *count,
            Outcome::Invalid { .. } | Outcome::NotFound { .. } => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Invalid { code, min, max } => write!(
                f,
                "The code '{code}' is not valid (it must have between {min} and {max} characters)."
            ),
            Outcome::NotFound { code } => write!(f, "No row found for '{code}'."),
            Outcome::AnnotatedOk {
                code,
                annotation,
                count,
            } => write!(
                f,
                "Code '{code}' → annotation '{annotation}' applied to {count} row(s)."
            ),
            Outcome::MarkedOk { code, count } => {
                write!(f, "Code '{code}' marked on {count} row(s).")
            }
            Outcome::Cleared { code, count } => {
                write!(f, "Mark removed from {count} row(s) with code '{code}'.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UndoResult {
    UndoOk { restored: usize },
    NothingToUndo,
}

impl UndoResult {
    pub fn severity(&self) -> Severity {
        match self {
            UndoResult::UndoOk { .. } => Severity::Success,
            UndoResult::NothingToUndo => Severity::Info,
        }
    }
}

impl fmt::Display for UndoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoResult::UndoOk { restored } => {
                write!(f, "Last change undone ({restored} row(s) restored).")
            }
            UndoResult::NothingToUndo => write!(f, "Nothing to undo."),
        }
    }
}

/// Ordered outcomes of one pasted list of codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    /// True when any outcome is `Invalid` or `NotFound`.
    pub attention: bool,
}

impl BatchReport {
    pub fn push(&mut self, outcome: Outcome) {
        self.attention |= outcome.is_attention();
        self.outcomes.push(outcome);
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of codes that wrote at least one row.
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Every message joined by newlines, in input order.
    pub fn message(&self) -> String {
        self.outcomes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
