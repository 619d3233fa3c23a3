// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that an export base name is usable as a plain file name.
pub(crate) fn validate_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control)
    {
        return Err(AppError::InvalidExportName(name.to_string()));
    }
    Ok(name)
}

/// Check whether a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file otherwise → ask, reading the answer from `input`
pub(crate) fn ensure_writable_with<R: BufRead>(
    path: &Path,
    force: bool,
    input: &mut R,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "export cancelled: '{}' not overwritten (use --force)",
            path.display()
        )))
    }
}
