use crate::config::Config;
use crate::core::add::{resolve_label, validate_mood};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entry, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::require_time;
use chrono::NaiveDate;

/// Fields to change on an existing entry; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct EntryPatch<'a> {
    pub date: Option<NaiveDate>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    pub clear_end: bool,
    pub activity: Option<&'a str>,
    pub label: Option<&'a str>,
    pub mood: Option<&'a str>,
    pub intensity: Option<u8>,
}

impl EntryPatch<'_> {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && !self.clear_end
            && self.activity.is_none()
            && self.label.is_none()
            && self.mood.is_none()
            && self.intensity.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        id: i64,
        patch: EntryPatch<'_>,
    ) -> AppResult<TimeEntry> {
        if patch.is_empty() {
            return Err(AppError::Other("nothing to change".into()));
        }
        if patch.clear_end && patch.end.is_some() {
            return Err(AppError::Other("--end and --clear-end are exclusive".into()));
        }

        let mut entry = load_entry(&pool.conn, id)?;

        if let Some(d) = patch.date {
            entry.date = d;
        }
        if let Some(s) = patch.start {
            entry.start_time = require_time(s)?;
        }
        if let Some(e) = patch.end {
            entry.end_time = Some(require_time(e)?);
        }
        if patch.clear_end {
            entry.end_time = None;
        }
        if let Some(a) = patch.activity {
            if a.trim().is_empty() {
                return Err(AppError::Other("activity must not be empty".into()));
            }
            entry.activity = a.trim().to_string();
        }
        if patch.label.is_some() {
            entry.label = resolve_label(&pool.conn, cfg, patch.label)?;
        }
        if patch.mood.is_some() || patch.intensity.is_some() {
            entry.mood = validate_mood(patch.mood, patch.intensity)?;
        }

        update_entry(&pool.conn, &entry)?;

        ttlog_or_warn(
            &pool.conn,
            "edit",
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
