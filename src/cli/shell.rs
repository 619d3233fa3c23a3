//! Interactive shell: one command per line on top of a loaded session.

use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::mark::MarkLogic;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Preset;
use crate::models::preset::resolve_annotation;
use crate::ui::messages::{self, error, info};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Terminates a pasted list of codes.
const PASTE_END: &str = ".";

#[derive(Parser, Debug)]
#[command(multicall = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    /// Mark rows whose code contains CODE (a bare line does the same)
    Mark {
        #[arg(required = true, num_args = 1..)]
        code: Vec<String>,

        #[arg(long, short = 'n', help = "Free-text annotation (wins over --preset)")]
        note: Option<String>,

        #[arg(long, short = 'p', value_parser = Preset::parse)]
        preset: Option<Preset>,
    },

    /// Paste several codes, one per line, ending with a line containing "."
    Paste {
        #[arg(long, short = 'n')]
        note: Option<String>,

        #[arg(long, short = 'p', value_parser = Preset::parse)]
        preset: Option<Preset>,
    },

    /// Remove the mark from rows whose code contains CODE (cannot be undone)
    Unmark {
        #[arg(required = true, num_args = 1..)]
        code: Vec<String>,
    },

    /// Undo the last mark
    Undo,

    /// Print the table, optionally filtered by code or mark
    Show {
        filter: Option<String>,

        #[arg(long)]
        all: bool,
    },

    /// Print the row counters
    Summary,

    /// List quick annotation presets
    Presets,

    /// Print this session's activity log
    Log,

    /// Write <NAME>.xlsx and <NAME>.csv
    Export {
        name: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

const COMMAND_NAMES: [&str; 12] = [
    "mark", "paste", "unmark", "undo", "show", "summary", "presets", "log", "export", "quit",
    "exit", "help",
];

/// Split a line on whitespace, keeping "double quoted" runs together.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}

/// What the loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    session: &'a mut Session,
    cfg: &'a Config,
    export_dir: PathBuf,
}

impl<'a> Shell<'a> {
    pub fn new(session: &'a mut Session, cfg: &'a Config, export_dir: PathBuf) -> Self {
        Self {
            session,
            cfg,
            export_dir,
        }
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        info("Type a code to mark it, or `help` for the list of commands.");

        loop {
            print!("rmarker> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                println!();
                break;
            }

            match self.handle_line(line.trim(), input) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                // a failed export or similar must not end the session
                Err(e) => error(e),
            }
        }

        Ok(())
    }

    fn handle_line<R: BufRead>(&mut self, line: &str, input: &mut R) -> AppResult<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let mut words = match split_words(line) {
            Ok(w) => w,
            Err(e) => {
                messages::warning(e);
                return Ok(Flow::Continue);
            }
        };

        if !COMMAND_NAMES.contains(&words[0].to_lowercase().as_str()) {
            words.insert(0, "mark".to_string());
        } else {
            words[0] = words[0].to_lowercase();
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(p) => p,
            Err(e) => {
                // help output is also reported through clap's error type
                print!("{}", e.render().ansi());
                return Ok(Flow::Continue);
            }
        };

        self.execute(parsed.command, input)
    }

    fn execute<R: BufRead>(&mut self, command: ShellCommand, input: &mut R) -> AppResult<Flow> {
        match command {
            ShellCommand::Mark { code, note, preset } => {
                let annotation = resolve_annotation(note.as_deref(), preset);
                let outcome = MarkLogic::apply(self.session, &code.join(" "), &annotation);
                messages::outcome(&outcome);
                if outcome.is_attention() {
                    self.alert();
                }
                self.print_summary();
            }
            ShellCommand::Paste { note, preset } => {
                let annotation = resolve_annotation(note.as_deref(), preset);
                let text = read_pasted(input)?;
                let report = MarkLogic::apply_batch(self.session, &text, &annotation);
                if report.is_empty() {
                    info("No codes pasted.");
                }
                for outcome in &report.outcomes {
                    messages::outcome(outcome);
                }
                if report.attention {
                    self.alert();
                }
                self.print_summary();
            }
            ShellCommand::Unmark { code } => {
                let outcome = MarkLogic::clear(self.session, &code.join(" "));
                messages::outcome(&outcome);
                self.print_summary();
            }
            ShellCommand::Undo => {
                let result = MarkLogic::undo(self.session);
                messages::undo_result(&result);
                self.print_summary();
            }
            ShellCommand::Show { filter, all } => {
                print!(
                    "{}",
                    super::view::render_table(&self.session.table, self.cfg, filter.as_deref(), all)
                );
            }
            ShellCommand::Summary => self.print_summary(),
            ShellCommand::Presets => info(format!("Presets: {}", super::view::presets_line())),
            ShellCommand::Log => LogLogic::print_log(self.session),
            ShellCommand::Export { name, force } => {
                let name = name.unwrap_or_else(|| self.cfg.default_export_name.clone());
                let paths = ExportLogic::export_with_input(
                    &self.session.table,
                    &name,
                    &self.export_dir,
                    force,
                    input,
                )?;
                let written: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                self.session.log("export", &name, &written.join(", "));
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn print_summary(&self) {
        super::view::print_summary(&self.session.summary(), &self.cfg.check_mark);
    }

    fn alert(&self) {
        if self.cfg.alert_bell {
            messages::bell();
        }
    }
}

/// Collect lines until a lone "." or end of input.
fn read_pasted<R: BufRead>(input: &mut R) -> AppResult<String> {
    info("Paste the codes, one per line; finish with a line containing only \".\"");

    let mut text = String::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim() == PASTE_END {
            break;
        }
        text.push_str(&line);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MarkRules;
    use crate::core::table::Table;
    use std::io::Cursor;

    fn session() -> Session {
        let table = Table::from_parts(
            vec!["Nº".into()],
            vec![
                vec!["AB1234X".into()],
                vec!["AB9999Y".into()],
                vec!["CD0001Z".into()],
            ],
            "Nº",
            "Marked",
        );
        Session::new(table, MarkRules::default())
    }

    fn quiet_config() -> Config {
        Config {
            alert_bell: false,
            ..Config::default()
        }
    }

    #[test]
    fn words_respect_quotes() {
        assert_eq!(
            split_words(r#"mark ab12 -n "pago parcial""#).expect("split"),
            ["mark", "ab12", "-n", "pago parcial"]
        );
        assert_eq!(split_words(r#"x """#).expect("split"), ["x", ""]);
        assert!(split_words(r#"mark "open"#).is_err());
    }

    #[test]
    fn parses_commands() {
        let parsed = ShellLine::try_parse_from(["mark", "ab12", "-p", "tpv-fisico"]).expect("parse");
        assert_eq!(
            parsed.command,
            ShellCommand::Mark {
                code: vec!["ab12".into()],
                note: None,
                preset: Some(Preset::TpvFisico),
            }
        );
        let parsed = ShellLine::try_parse_from(["exit"]).expect("parse");
        assert_eq!(parsed.command, ShellCommand::Quit);
        assert!(ShellLine::try_parse_from(["mark", "x", "-p", "nope"]).is_err());
    }

    #[test]
    fn scripted_session() {
        let mut s = session();
        let cfg = quiet_config();
        let dir = tempfile::tempdir().expect("tempdir");

        let script = "ab1234\n\
                      mark cd 0001 -n \"revisar\" -p COBRADO\n\
                      paste -p anulado\n\
                      ab9999\n\
                      \n\
                      zzzz\n\
                      .\n\
                      undo\n\
                      unmark cd0001z\n\
                      bogus --flag\n\
                      export salida\n\
                      quit\n\
                      ab9999\n";

        {
            let mut shell = Shell::new(&mut s, &cfg, dir.path().to_path_buf());
            shell.run(&mut Cursor::new(script)).expect("run");
        }

        assert_eq!(s.table.marked(0), "✔️");
        // the paste was undone, the unmark is permanent
        assert_eq!(s.table.marked(1), "");
        assert_eq!(s.table.marked(2), "");
        assert_eq!(s.history.depth(), 2);

        let csv = std::fs::read_to_string(dir.path().join("salida.csv")).expect("csv");
        assert!(csv.contains("AB1234X,✔️"));

        let ops: Vec<&str> = s.log_entries().iter().map(|e| e.operation.as_str()).collect();
        assert_eq!(ops, ["apply", "apply", "apply", "undo", "clear", "export"]);
    }

    #[test]
    fn overwrite_answer_comes_from_the_shell_input() {
        let mut s = session();
        let cfg = quiet_config();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("salida.csv"), "old").expect("write");

        let script = "ab1234\n\
                      export salida\n\
                      n\n\
                      ab9999\n\
                      export salida\n\
                      y\n\
                      quit\n";

        {
            let mut shell = Shell::new(&mut s, &cfg, dir.path().to_path_buf());
            shell.run(&mut Cursor::new(script)).expect("run");
        }

        // the "n" answered the prompt instead of being taken as a code
        assert_eq!(s.table.marked(1), "✔️");
        let csv = std::fs::read_to_string(dir.path().join("salida.csv")).expect("csv");
        assert!(csv.contains("AB9999Y,✔️"));

        let ops: Vec<&str> = s.log_entries().iter().map(|e| e.operation.as_str()).collect();
        assert_eq!(ops, ["apply", "apply", "export"]);
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut s = session();
        let cfg = quiet_config();
        let dir = tempfile::tempdir().expect("tempdir");
        let mut shell = Shell::new(&mut s, &cfg, dir.path().to_path_buf());
        shell.run(&mut Cursor::new("ab1234")).expect("run");
        assert_eq!(s.table.marked(0), "✔️");
    }
}
