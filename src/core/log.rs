use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_TARGET_MAX: usize = 60;

static ANSI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "label_add" => Colour::Green,
        "del" | "label_del" => Colour::Red,
        "edit" | "label_edit" => Colour::Yellow,
        "recover" => Colour::Cyan,
        "fasting" => Colour::Blue,
        "export" => Colour::RGB(120, 120, 255),
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Keep only the operation word coloured, truncating the rest to
/// `OP_TARGET_MAX` visible characters.
fn render_op_target(operation: &str, target: &str) -> String {
    let color = color_for_operation(operation);

    let visible = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let visible = if visible.chars().count() > OP_TARGET_MAX {
        let mut s: String = visible.chars().take(OP_TARGET_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("The internal log is empty.");
            return Ok(());
        }

        let lines: Vec<(i64, String, String, String)> = rows
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(r.date);
                let op_target = render_op_target(&r.operation, &r.target);
                (r.id, date, op_target, r.message)
            })
            .collect();

        let id_w = lines.iter().map(|l| l.0.to_string().len()).max().unwrap_or(1);
        let date_w = lines.iter().map(|l| l.1.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|l| strip_ansi(&l.2).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in lines {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_targets_are_truncated_without_counting_colour_codes() {
        let out = render_op_target("add", &"x".repeat(100));
        assert_eq!(strip_ansi(&out).chars().count(), OP_TARGET_MAX);
        assert!(strip_ansi(&out).ends_with("..."));
    }
}
