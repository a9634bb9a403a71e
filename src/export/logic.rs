use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export time entries.
    ///
    /// - `file`: absolute path of the output file (`~` is expanded)
    /// - `range`: `None` or `"all"` for everything, otherwise a period
    ///   such as `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `start:end`
    ///
    /// Returns the number of exported entries.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let rows: Vec<EntryExport> = load_entries_between(&pool.conn, bounds)?
            .iter()
            .map(EntryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} entries to {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
