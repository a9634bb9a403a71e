use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entries_by_date, delete_entry, load_entries_by_date};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry of `date` (when `id` is given) or the whole day.
    /// Returns the number of deleted entries.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, id: Option<i64>) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let entries = load_entries_by_date(&pool.conn, &date)?;

        if entries.is_empty() {
            return Err(AppError::NoEntriesForDate(date_str));
        }

        let deleted = match id {
            Some(id) => {
                let entry = entries
                    .iter()
                    .find(|e| e.id == id)
                    .ok_or(AppError::EntryNotFound(id))?;
                delete_entry(&pool.conn, entry.id)?;
                ttlog_or_warn(
                    &pool.conn,
                    "del",
                    &date_str,
                    &format!("Deleted entry #{} ({})", entry.id, entry.activity),
                );
                1
            }
            None => {
                let n = delete_entries_by_date(&pool.conn, &date)?;
                ttlog_or_warn(
                    &pool.conn,
                    "del",
                    &date_str,
                    &format!("Deleted all {} entries", n),
                );
                n
            }
        };

        Ok(deleted)
    }
}
