/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Colour of a `Marked` value:
/// check mark → green, annotation → yellow, empty → grey.
pub fn color_for_marked(value: &str, check_mark: &str) -> &'static str {
    if value.is_empty() {
        GREY
    } else if value == check_mark {
        GREEN
    } else {
        YELLOW
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
