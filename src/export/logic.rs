// src/export/logic.rs

use crate::core::table::Table;
use crate::errors::AppResult;
use crate::export::{ExportFormat, notify_export_success};
use crate::export::csv::export_csv;
use crate::export::fs_utils::{ensure_writable_with, validate_name};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::info;
use crate::utils::path::with_extension;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Writes a table to every export format.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the table as `<dir>/<name>.xlsx` and `<dir>/<name>.csv`.
    ///
    /// Every target is checked for overwrite before anything is written, so
    /// a refused prompt leaves both files untouched. Returns the written
    /// paths in format order.
    pub fn export(table: &Table, name: &str, dir: &Path, force: bool) -> AppResult<Vec<PathBuf>> {
        let stdin = io::stdin();
        Self::export_with(table, name, dir, force, true, &mut stdin.lock())
    }

    /// Same as [`ExportLogic::export`] without progress messages.
    pub fn export_quiet(
        table: &Table,
        name: &str,
        dir: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let stdin = io::stdin();
        Self::export_with(table, name, dir, force, false, &mut stdin.lock())
    }

    /// Same as [`ExportLogic::export`], reading the overwrite answer from
    /// `input` instead of stdin. Callers that already hold the stdin lock
    /// must use this one.
    pub fn export_with_input<R: BufRead>(
        table: &Table,
        name: &str,
        dir: &Path,
        force: bool,
        input: &mut R,
    ) -> AppResult<Vec<PathBuf>> {
        Self::export_with(table, name, dir, force, true, input)
    }

    fn export_with<R: BufRead>(
        table: &Table,
        name: &str,
        dir: &Path,
        force: bool,
        announce: bool,
        input: &mut R,
    ) -> AppResult<Vec<PathBuf>> {
        let name = validate_name(name)?;

        let targets: Vec<(ExportFormat, PathBuf)> = ExportFormat::ALL
            .iter()
            .map(|f| (*f, with_extension(dir, name, f.as_str())))
            .collect();

        for (_, path) in &targets {
            ensure_writable_with(path, force, input)?;
        }

        for (format, path) in &targets {
            if announce {
                info(format!("Exporting to {}: {}", format.label(), path.display()));
            }
            Self::write(table, *format, path)?;
            if announce {
                notify_export_success(format.label(), path);
            }
        }

        Ok(targets.into_iter().map(|(_, p)| p).collect())
    }

    pub fn write(table: &Table, format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Xlsx => export_xlsx(table, path),
            ExportFormat::Csv => export_csv(table, path),
        }
    }
}
