//! rmarker library root.
//! Exposes the CLI parser, the high-level run() function, and the marking
//! engine so it can be driven without the shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
        Commands::Batch { .. } => cli::commands::batch::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());

    // init must work even when the existing file is broken
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
