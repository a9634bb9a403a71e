use crate::errors::{AppError, AppResult};
use crate::models::label::Label;
use rusqlite::{Connection, Row, params};

fn row_to_label(row: &Row) -> rusqlite::Result<Label> {
    Ok(Label {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        parent_id: row.get("parent_id")?,
    })
}

pub fn load_labels(conn: &Connection) -> AppResult<Vec<Label>> {
    let mut stmt = conn.prepare("SELECT id, name, color, parent_id FROM labels ORDER BY id ASC")?;
    let rows = stmt.query_map([], row_to_label)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_label(
    conn: &Connection,
    name: &str,
    color: &str,
    parent_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO labels (name, color, parent_id) VALUES (?1, ?2, ?3)",
        params![name, color, parent_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_label(conn: &Connection, label: &Label) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE labels SET name = ?1, color = ?2, parent_id = ?3 WHERE id = ?4",
        params![label.name, label.color, label.parent_id, label.id],
    )?;
    if changed == 0 {
        return Err(AppError::LabelNotFound(label.name.clone()));
    }
    Ok(())
}

pub fn delete_label(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM labels WHERE id = ?1", [id])?;
    Ok(())
}
