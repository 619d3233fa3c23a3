use crate::core::session::Session;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));

const OP_WIDTH_LIMIT: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Colour per logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "apply" => Colour::Green,
        "clear" => Colour::Red,
        "undo" => Colour::Yellow,
        "load" => Colour::Blue,
        "export" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the activity log: one line per entry, the operation coloured and
    /// the `op (target)` column capped at 60 visible characters.
    pub fn render(session: &Session) -> Vec<String> {
        let entries: Vec<(usize, String, String, String, &str)> = session
            .log_entries()
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (i + 1, date, e.operation.clone(), op_target, e.message.as_str())
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);
        let id_w = entries.len().to_string().len();
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(0);

        entries
            .into_iter()
            .map(|(id, date, operation, op_target, message)| {
                let color = color_for_operation(&operation);

                let visible = if op_target.chars().count() > OP_WIDTH_LIMIT {
                    let mut s: String = op_target.chars().take(OP_WIDTH_LIMIT - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                // only the operation word is coloured
                let colored = match visible.split_once(' ') {
                    Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };

                let padding =
                    " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}")
            })
            .collect()
    }

    pub fn print_log(session: &Session) {
        if session.log_entries().is_empty() {
            info("The activity log is empty.");
            return;
        }

        println!("📜 Session log:\n");
        for line in Self::render(session) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MarkRules;
    use crate::core::table::Table;

    #[test]
    fn render_truncates_long_targets() {
        let table = Table::from_parts(vec!["Nº".into()], vec![], "Nº", "Marked");
        let mut session = Session::new(table, MarkRules::default());
        session.log("load", "pedidos.xlsx", "3 rows");
        session.log("apply", &"X".repeat(80), "nothing");

        let lines = LogLogic::render(&session);
        assert_eq!(lines.len(), 2);

        let plain = strip_ansi(&lines[1]);
        assert!(plain.starts_with("2: "));
        assert!(plain.contains("apply (XXXX"));
        assert!(plain.contains("... => nothing"));
        assert!(strip_ansi(&lines[0]).contains("load (pedidos.xlsx)"));
    }
}
