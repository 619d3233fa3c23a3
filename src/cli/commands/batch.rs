use crate::cli::commands::session::open;
use crate::cli::parser::Commands;
use crate::cli::view::print_summary;
use crate::config::Config;
use crate::core::mark::MarkLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::preset::resolve_annotation;
use crate::models::{BatchReport, Summary};
use crate::ui::messages::{self, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: String,
    annotation: &'a str,
    report: &'a BatchReport,
    summary: Summary,
    exported: Vec<String>,
}

fn read_codes(codes: Option<&Path>) -> AppResult<String> {
    match codes {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| AppError::Other(format!("cannot read codes file {}: {e}", path.display()))),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Handle `batch`: load, apply every code as one pasted list, export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        file,
        codes,
        note,
        preset,
        out,
        dir,
        force,
        json,
    } = cmd
    {
        let text = read_codes(codes.as_deref())?;
        let mut session = open(file, cfg)?;

        let annotation = resolve_annotation(note.as_deref(), *preset);
        let report = MarkLogic::apply_batch(&mut session, &text, &annotation);

        if !*json {
            if report.is_empty() {
                info("No codes to apply.");
            }
            for outcome in &report.outcomes {
                messages::outcome(outcome);
            }
            if report.attention && cfg.alert_bell {
                messages::bell();
            }
            print_summary(&session.summary(), &cfg.check_mark);
        }

        let name = out.clone().unwrap_or_else(|| cfg.default_export_name.clone());
        let paths = if *json {
            // keep stdout clean JSON: export messages are only printed in text mode
            ExportLogic::export_quiet(&session.table, &name, dir, *force)?
        } else {
            ExportLogic::export(&session.table, &name, dir, *force)?
        };

        if *json {
            let payload = JsonReport {
                source: file.display().to_string(),
                annotation: &annotation,
                report: &report,
                summary: session.summary(),
                exported: paths.iter().map(|p| p.display().to_string()).collect(),
            };
            let text = serde_json::to_string_pretty(&payload)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{text}");
        }
    }
    Ok(())
}
