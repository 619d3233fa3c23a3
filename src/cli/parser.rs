use crate::models::Preset;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rmarker
#[derive(Parser)]
#[command(
    name = "rmarker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mark and annotate spreadsheet rows by code, with undo and xlsx/csv export",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default settings
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Load a spreadsheet and mark rows interactively
    Session {
        /// Spreadsheet to load (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[arg(long, value_name = "DIR", default_value = ".", help = "Directory for exports")]
        dir: PathBuf,
    },

    /// Apply a list of codes in one go and export the result
    Batch {
        /// Spreadsheet to load (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[arg(
            long,
            value_name = "FILE",
            help = "File with one code per line (default: read stdin)"
        )]
        codes: Option<PathBuf>,

        #[arg(long, short = 'n', help = "Free-text annotation (wins over --preset)")]
        note: Option<String>,

        #[arg(long, short = 'p', value_parser = Preset::parse, help = "Quick annotation preset")]
        preset: Option<Preset>,

        #[arg(long, short = 'o', value_name = "NAME", help = "Export file name, without extension")]
        out: Option<String>,

        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        #[arg(long, short = 'f', help = "Overwrite existing export files")]
        force: bool,

        #[arg(long, help = "Print a JSON report instead of messages")]
        json: bool,
    },

    /// Print the loaded table and its summary
    Show {
        file: PathBuf,

        #[arg(long, short = 'q', help = "Only rows whose code or mark contains this text")]
        filter: Option<String>,

        #[arg(long, help = "Print every row")]
        all: bool,
    },
}
