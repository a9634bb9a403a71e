use crate::cli::commands::summary::period_days;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::coverage::coverage_report;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_coverage};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_left, percent};
use crate::utils::time::format_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Coverage { period } = cmd {
        let bounds = date::resolve_period(period.as_deref())?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries_between(&pool.conn, bounds)?;

        let days = period_days(bounds, &entries);
        if days.is_empty() {
            info("Nothing to measure for the selected period.");
            return Ok(());
        }

        let report = coverage_report(&entries, &days, cfg.daily_active_minutes);

        header(format!(
            "Logged share of a {} day",
            format_duration(cfg.daily_active_minutes)
        ));

        for d in &report.days {
            println!(
                "  {}  {:>8}  {}{}{}",
                d.date,
                format_duration(d.tracked_minutes),
                color_for_coverage(d.percentage),
                pad_left(&percent(d.percentage), 6),
                RESET
            );
        }

        println!(
            "{} {}{}{} over {} day(s)",
            bold("Overall"),
            color_for_coverage(report.total_percentage),
            percent(report.total_percentage),
            RESET,
            report.days.len()
        );
    }
    Ok(())
}
