use crate::config::Config;
use crate::db::labels::load_labels;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::label::find_by_name;
use crate::models::time_entry::{Mood, TimeEntry};
use crate::ui::messages::warning;
use crate::utils::time::require_time;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Resolve the label typed by the user against the taxonomy.
///
/// Empty → configured default. A known label is returned with its stored
/// spelling; an unknown one is kept as typed, with a warning.
pub(crate) fn resolve_label(conn: &Connection, cfg: &Config, raw: Option<&str>) -> AppResult<String> {
    let name = match raw.map(str::trim) {
        None | Some("") => return Ok(cfg.default_label.clone()),
        Some(n) => n,
    };

    let labels = load_labels(conn)?;
    match find_by_name(&labels, name) {
        Some(l) => Ok(l.name.clone()),
        None => {
            if !name.eq_ignore_ascii_case(&cfg.default_label) {
                warning(format!(
                    "Label '{}' is not defined (see `daylog label list`).",
                    name
                ));
            }
            Ok(name.to_string())
        }
    }
}

pub(crate) fn validate_mood(mood: Option<&str>, intensity: Option<u8>) -> AppResult<Option<Mood>> {
    match (mood, intensity) {
        (None, None) => Ok(None),
        (None, Some(_)) => Err(AppError::Other("--intensity requires --mood".into())),
        (Some(m), i) => {
            let intensity = i.unwrap_or(3);
            if !(1..=5).contains(&intensity) {
                return Err(AppError::Other(format!(
                    "mood intensity must be 1-5, got {}",
                    intensity
                )));
            }
            Ok(Some(Mood {
                mood: m.trim().to_string(),
                intensity,
                notes: None,
            }))
        }
    }
}

/// Values collected from the command line for a new entry.
pub struct NewEntry<'a> {
    pub date: NaiveDate,
    pub start: &'a str,
    pub end: Option<&'a str>,
    pub activity: &'a str,
    pub label: Option<&'a str>,
    pub mood: Option<&'a str>,
    pub intensity: Option<u8>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate, normalize and store a new entry; returns it with its id.
    ///
    /// Nothing is written when a time does not parse.
    pub fn apply(pool: &mut DbPool, cfg: &Config, input: NewEntry<'_>) -> AppResult<TimeEntry> {
        let start = require_time(input.start)?;
        let end = input.end.map(require_time).transpose()?;

        if input.activity.trim().is_empty() {
            return Err(AppError::Other("activity must not be empty".into()));
        }

        let label = resolve_label(&pool.conn, cfg, input.label)?;
        let mood = validate_mood(input.mood, input.intensity)?;

        let mut entry = TimeEntry::new(input.date, start, end, input.activity, &label);
        entry.mood = mood;
        entry.id = insert_entry(&pool.conn, &entry)?;

        ttlog_or_warn(
            &pool.conn,
            "add",
            &entry.date_str(),
            &format!(
                "#{} {} - {} {} [{}]",
                entry.id,
                entry.start_time,
                entry.end_time.as_deref().unwrap_or("--:--"),
                entry.activity,
                entry.label
            ),
        );

        Ok(entry)
    }
}
