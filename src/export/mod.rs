// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::StandingExport;

use crate::cli::parser::OutputFormat;
use crate::errors::{AppError, AppResult};
use crate::models::GroupStandings;
use crate::ui::messages::success;
use fs_utils::ensure_writable;
use json_csv::{export_csv, export_json};
use std::fs::File;
use std::io;
use std::path::Path;

/// Write standings as CSV or JSON, to `file` or to stdout.
pub fn write_standings(
    groups: &[GroupStandings],
    format: OutputFormat,
    file: Option<&Path>,
    force: bool,
) -> AppResult<()> {
    let label = match format {
        OutputFormat::Csv => "CSV",
        OutputFormat::Json => "JSON",
        OutputFormat::Table => {
            return Err(AppError::Export(
                "table output is printed, not exported".to_string(),
            ));
        }
    };

    match file {
        Some(path) => {
            ensure_writable(path, force)?;
            let out = File::create(path)?;
            match format {
                OutputFormat::Csv => export_csv(groups, out)?,
                _ => export_json(groups, out)?,
            }
            success(format!("{label} export completed: {}", path.display()));
        }
        None => {
            let out = io::stdout().lock();
            match format {
                OutputFormat::Csv => export_csv(groups, out)?,
                _ => export_json(groups, out)?,
            }
        }
    }

    Ok(())
}

/// Flat rows as they appear in the CSV export.
pub fn standings_rows(groups: &[GroupStandings]) -> Vec<StandingExport> {
    model::flatten(groups)
}
