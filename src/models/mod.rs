pub mod log_entry;
pub mod outcome;
pub mod preset;
pub mod summary;

pub use outcome::{BatchReport, Outcome, Severity, UndoResult};
pub use preset::Preset;
pub use summary::Summary;
