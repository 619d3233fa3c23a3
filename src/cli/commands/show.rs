use crate::cli::commands::session::open;
use crate::cli::parser::Commands;
use crate::cli::view::{print_summary, render_table};
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { file, filter, all } = cmd {
        let session = open(file, cfg)?;
        print!("{}", render_table(&session.table, cfg, filter.as_deref(), *all));
        print_summary(&session.summary(), &cfg.check_mark);
    }
    Ok(())
}
