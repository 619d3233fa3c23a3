use crate::cli::parser::Commands;
use crate::cli::shell::Shell;
use crate::cli::view::print_summary;
use crate::config::Config;
use crate::core::session::{MarkRules, Session};
use crate::errors::AppResult;
use crate::import::ImportLogic;
use crate::ui::messages::{header, info, warning};
use std::io;
use std::path::Path;

/// Load `file` into a fresh session and log the load.
pub fn open(file: &Path, cfg: &Config) -> AppResult<Session> {
    let table = ImportLogic::load(file, cfg)?;
    let mut session = Session::new(table, MarkRules::from(cfg));

    let rows = session.table.len();
    session.log(
        "load",
        &file.display().to_string(),
        &format!("{rows} row(s), {} column(s)", session.table.columns().len()),
    );

    if !session.table.has_id_column() {
        warning(format!(
            "Column '{}' not found: no code will match.",
            cfg.id_column
        ));
    }

    Ok(session)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { file, dir } = cmd {
        let mut session = open(file, cfg)?;

        header(format!("rmarker: {}", file.display()));
        info(format!("{} row(s) loaded.", session.table.len()));
        print_summary(&session.summary(), &cfg.check_mark);

        let stdin = io::stdin();
        let mut input = stdin.lock();
        Shell::new(&mut session, cfg, dir.clone()).run(&mut input)?;
    }
    Ok(())
}
