use crate::config::CompanyAverage;
use crate::core::stats::StatsLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_time_records;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RecordExport, stats_rows};
use crate::export::{ExportFormat, ExportWhat};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the selected dataset to `file`. Returns the number of rows written.
    pub fn export(
        pool: &DbPool,
        what: ExportWhat,
        format: ExportFormat,
        file: &str,
        mode: CompanyAverage,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        // Rows are gathered before the overwrite prompt: an empty export never asks.
        let written = match what {
            ExportWhat::Records => {
                let rows: Vec<RecordExport> = load_all_time_records(&pool.conn)?
                    .iter()
                    .map(|(name, rec)| RecordExport::from_record(name, rec))
                    .collect();

                if rows.is_empty() {
                    warning("No time records to export.");
                    return Ok(0);
                }
                ensure_writable(path, force)?;
                write_rows(&rows, format, path)?
            }
            ExportWhat::Stats => {
                let rows = stats_rows(&StatsLogic::report(pool, mode)?);
                ensure_writable(path, force)?;
                write_rows(&rows, format, path)?
            }
        };

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} rows of {} as {}", written, what.as_str(), format.as_str()),
        );

        Ok(written)
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}
