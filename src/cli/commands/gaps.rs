use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::gaps::{Gap, find_gaps, total_gap_minutes};
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_by_date;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::date;
use crate::utils::time::format_duration;

pub(crate) fn format_gap(g: &Gap) -> String {
    format!(
        "{} – {}  ({})",
        g.start.format("%I:%M %p"),
        g.end.format("%I:%M %p"),
        format_duration(g.duration_minutes())
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gaps { date: day, min } = cmd {
        let d = date::resolve_date(day.as_deref())?;
        let min_gap = min.unwrap_or(cfg.min_gap_minutes);

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries_by_date(&pool.conn, &d)?;
        let gaps = find_gaps(&entries, d, date::now(), min_gap);

        header(format!("Unlogged time on {}", d));

        if gaps.is_empty() {
            success("No gaps: the day is fully logged.");
            return Ok(());
        }

        for g in &gaps {
            println!("  {}", format_gap(g));
        }
        println!(
            "\n{} gap(s), {} unlogged",
            gaps.len(),
            format_duration(total_gap_minutes(&gaps))
        );
    }
    Ok(())
}
