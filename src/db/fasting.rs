use crate::errors::{AppError, AppResult};
use crate::models::fasting::FastingPlan;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

/// Store the plan for its date, replacing any previous one.
pub fn save_plan(conn: &Connection, plan: &FastingPlan) -> AppResult<()> {
    conn.execute(
        "INSERT INTO fasting (date, window_hours, start_hour) VALUES (?1, ?2, ?3)
         ON CONFLICT(date) DO UPDATE SET
             window_hours = excluded.window_hours,
             start_hour = excluded.start_hour",
        params![
            plan.date.format("%Y-%m-%d").to_string(),
            plan.window_hours,
            plan.start_hour
        ],
    )?;
    Ok(())
}

pub fn load_plan(conn: &Connection, date: &NaiveDate) -> AppResult<Option<FastingPlan>> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let row: Option<(u32, u32)> = conn
        .query_row(
            "SELECT window_hours, start_hour FROM fasting WHERE date = ?1",
            [&date_str],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        Some((window, start)) => FastingPlan::new(*date, window, start)
            .map(Some)
            .map_err(|e| AppError::Other(format!("stored fasting plan for {}: {}", date_str, e))),
        None => Ok(None),
    }
}
