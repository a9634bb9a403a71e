use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{Mood, TimeEntry};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_ENTRIES: &str = "SELECT id, date, start_time, end_time, activity, label, mood, created_at
     FROM time_entries";

pub fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    // A corrupt mood blob must not hide the entry itself.
    let mood_raw: Option<String> = row.get("mood")?;
    let mood = mood_raw.and_then(|raw| match serde_json::from_str::<Mood>(&raw) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("ignoring unreadable mood {:?}: {}", raw, e);
            None
        }
    });

    Ok(TimeEntry {
        id: row.get("id")?,
        date,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        activity: row.get("activity")?,
        label: row.get("label")?,
        mood,
        created_at: row.get("created_at")?,
    })
}

fn mood_to_db(mood: &Option<Mood>) -> AppResult<Option<String>> {
    mood.as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(AppError::from)
}

/// Sort a day's entries the way every view shows them: by start time,
/// insertion order for ties.
fn sort_chronologically(entries: &mut [TimeEntry]) {
    entries.sort_by_key(|e| (e.date, e.start_minutes().unwrap_or(u32::MAX)));
}

fn collect(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    sort_chronologically(&mut out);
    Ok(out)
}

pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<TimeEntry>> {
    let date_str = date.format("%Y-%m-%d").to_string();
    collect(
        conn,
        &format!("{SELECT_ENTRIES} WHERE date = ?1 ORDER BY id ASC"),
        &[&date_str],
    )
}

/// Entries between two dates (inclusive); `None` loads the whole archive.
pub fn load_entries_between(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TimeEntry>> {
    match bounds {
        None => collect(conn, &format!("{SELECT_ENTRIES} ORDER BY date ASC, id ASC"), &[]),
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();
            collect(
                conn,
                &format!(
                    "{SELECT_ENTRIES} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, id ASC"
                ),
                &[&start_str, &end_str],
            )
        }
    }
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<TimeEntry> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::EntryNotFound(id))
}

/// Insert a new entry and return its id.
pub fn insert_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO time_entries (date, start_time, end_time, activity, label, mood, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.date_str(),
            entry.start_time,
            entry.end_time,
            entry.activity,
            entry.label,
            mood_to_db(&entry.mood)?,
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id and created_at)
pub fn update_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE time_entries
         SET date = ?1, start_time = ?2, end_time = ?3,
             activity = ?4, label = ?5, mood = ?6
         WHERE id = ?7",
        params![
            entry.date_str(),
            entry.start_time,
            entry.end_time,
            entry.activity,
            entry.label,
            mood_to_db(&entry.mood)?,
            entry.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn delete_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();
    Ok(conn.execute("DELETE FROM time_entries WHERE date = ?1", [date_str])?)
}
