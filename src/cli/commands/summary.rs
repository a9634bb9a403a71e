use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summary::{share, totals_by_label};
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::percent;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_duration;
use chrono::NaiveDate;

/// Days covered by the period; without bounds, the span of the entries.
pub(crate) fn period_days(
    bounds: Option<(NaiveDate, NaiveDate)>,
    entries: &[TimeEntry],
) -> Vec<NaiveDate> {
    let (from, to) = match bounds {
        Some(b) => b,
        None => match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Vec::new(),
        },
    };
    // Future days have nothing logged yet.
    date::days_between(from, to.min(date::today().max(from)))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let bounds = date::resolve_period(period.as_deref())?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries_between(&pool.conn, bounds)?;

        if entries.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        let days = period_days(bounds, &entries);
        let totals = totals_by_label(&entries, days.len() as u32, &cfg.label_order);

        if let (Some(first), Some(last)) = (days.first(), days.last()) {
            header(format!("Time per label, {} → {}", first, last));
        }

        let mut table = Table::new(vec![
            Column::new("Label", 18),
            Column::new("Time", 10),
            Column::new("Share", 7),
        ]);
        for t in &totals {
            table.add_row(vec![
                t.label.clone(),
                format_duration(t.minutes),
                percent(share(&totals, t.minutes)),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
