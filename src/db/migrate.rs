use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `time_entries` table; times are stored as canonical text.
fn create_time_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT,
            activity    TEXT NOT NULL DEFAULT '',
            label       TEXT NOT NULL DEFAULT 'unknown',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_entries_date ON time_entries(date);
        CREATE INDEX IF NOT EXISTS idx_time_entries_label ON time_entries(label);
        "#,
    )?;
    Ok(())
}

fn create_labels_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS labels (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            color      TEXT NOT NULL DEFAULT '#000000',
            parent_id  INTEGER REFERENCES labels(id)
        );
        "#,
    )?;
    Ok(())
}

fn create_fasting_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS fasting (
            date          TEXT PRIMARY KEY,
            window_hours  INTEGER NOT NULL CHECK(window_hours BETWEEN 1 AND 24),
            start_hour    INTEGER NOT NULL CHECK(start_hour BETWEEN 0 AND 23)
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Entries gained an optional mood (JSON: mood, intensity, notes).
fn migrate_add_mood_column(conn: &Connection) -> AppResult<Option<String>> {
    let version = "20250412_0002_add_mood_to_time_entries";

    if is_applied(conn, version)? {
        return Ok(None);
    }

    if !column_exists(conn, "time_entries", "mood")? {
        conn.execute("ALTER TABLE time_entries ADD COLUMN mood TEXT;", [])
            .map_err(|e| AppError::Migration(format!("Failed to add 'mood' column: {}", e)))?;
    }

    mark_applied(conn, version, "Added mood column to time_entries")?;

    Ok(Some(format!(
        "Migration applied: {} → added 'mood' to time_entries",
        version
    )))
}

/// Public entry point: run all pending migrations.
///
/// Safe to call on every open; returns what was done (empty when the schema
/// was already current).
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    let mut applied = Vec::new();

    ensure_log_table(conn)?;

    for (table, create) in [
        (
            "time_entries",
            create_time_entries_table as fn(&Connection) -> AppResult<()>,
        ),
        ("labels", create_labels_table),
        ("fasting", create_fasting_table),
    ] {
        if !table_exists(conn, table)? {
            create(conn)?;
            applied.push(format!("Created {} table.", table));
        }
    }

    if let Some(msg) = migrate_add_mood_column(conn)? {
        applied.push(msg);
    }

    for step in &applied {
        log::info!("{}", step);
    }

    Ok(applied)
}
