use chrono::Local;

/// One line of the in-memory session activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn now(operation: &str, target: &str, message: &str) -> Self {
        Self {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}
