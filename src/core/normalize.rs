//! Canonical form of a user-typed code.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Uppercase, trim and strip every whitespace run.
///
/// `normalize(normalize(x)) == normalize(x)` for any input.
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    WHITESPACE.replace_all(&upper, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_strips_spaces() {
        assert_eq!(normalize("  ab 12\t34x "), "AB1234X");
        assert_eq!(normalize("ab\n99"), "AB99");
    }

    #[test]
    fn idempotent() {
        for s in ["", " ", "ab 1", "ÄbÇ d", "x\u{00a0}y", "ß tt", "AB1234X"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }
}
