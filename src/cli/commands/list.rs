use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::separator;
use crate::utils::table::{Column, Table};
use crate::utils::time::{INVALID_TIME, format_duration, span_minutes};
use std::collections::BTreeMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let bounds = if *now {
            let t = date::today();
            Some((t, t))
        } else {
            date::resolve_period(period.as_deref())?
        };

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries_between(&pool.conn, bounds)?;

        if entries.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        let mut by_day: BTreeMap<_, Vec<&TimeEntry>> = BTreeMap::new();
        for e in &entries {
            by_day.entry(e.date).or_default().push(e);
        }

        for (day, day_entries) in by_day {
            header(day.format("%A %Y-%m-%d"));
            println!("{}", render_day(&day_entries));
            println!("{}", separator(&cfg.separator_char, 78));
        }
    }
    Ok(())
}

fn duration_of(e: &TimeEntry) -> String {
    match (e.start_minutes(), e.end_minutes()) {
        (Some(s), Some(end)) => format_duration(span_minutes(s, end)),
        (Some(_), None) => "…".to_string(),
        _ => INVALID_TIME.to_string(),
    }
}

fn render_day(entries: &[&TimeEntry]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Start", 8),
        Column::new("End", 8),
        Column::new("Time", 7),
        Column::new("Label", 14),
        Column::new("Activity", 30),
    ]);

    for e in entries {
        let mut activity = e.activity.clone();
        if let Some(m) = &e.mood {
            activity = format!("{} ({} {}/5)", activity, m.mood, m.intensity);
        }
        table.add_row(vec![
            e.id.to_string(),
            e.start_time.clone(),
            e.end_time.clone().unwrap_or_else(|| INVALID_TIME.to_string()),
            duration_of(e),
            e.label.clone(),
            activity,
        ]);
    }

    // Open entries show a greyed "--:--".
    table
        .render()
        .lines()
        .map(|line| line.replacen(INVALID_TIME, &colorize_optional(INVALID_TIME), 1))
        .collect::<Vec<_>>()
        .join("\n")
}
