use crate::cli::commands::gaps::format_gap;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summary::share;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_by_date;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::{header, info};
use crate::utils::colors::{LANE_PALETTE, RESET, color_for_coverage};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_right, percent, separator};
use crate::utils::time::{MINUTES_PER_DAY, format_duration, minutes_to_time};

/// One character per half hour.
const SLOT_MINUTES: u32 = 30;
const BAR_WIDTH: usize = (MINUTES_PER_DAY / SLOT_MINUTES) as usize;

fn ruler() -> String {
    let mut out = String::with_capacity(BAR_WIDTH);
    let mut i = 0;
    while i < BAR_WIDTH {
        if i % 6 == 0 {
            let label = format!("{}", i / 2);
            out.push_str(&label);
            i += label.len();
        } else {
            out.push(' ');
            i += 1;
        }
    }
    out
}

/// One bar per lane; a slot fills every half hour it touches.
pub(crate) fn lane_bars(summary: &DaySummary) -> Vec<String> {
    let mut bars = vec![vec!['·'; BAR_WIDTH]; summary.lane_count()];

    for (_, slot) in &summary.slots {
        let from = (slot.start_minutes / SLOT_MINUTES) as usize;
        let to = slot.end_minutes.min(MINUTES_PER_DAY).div_ceil(SLOT_MINUTES) as usize;
        for cell in bars[slot.lane].iter_mut().take(to.max(from + 1).min(BAR_WIDTH)).skip(from) {
            *cell = '█';
        }
    }

    bars.into_iter().map(|b| b.into_iter().collect()).collect()
}

fn print_summary(summary: &DaySummary, cfg: &Config) {
    header(summary.date.format("%A %Y-%m-%d"));

    if summary.slots.is_empty() {
        info("No entries for this day.");
    } else {
        println!("       {}", ruler());
        for (lane, bar) in lane_bars(summary).iter().enumerate() {
            let color = LANE_PALETTE[lane % LANE_PALETTE.len()];
            println!("lane {} {}{}{}", lane, color, bar, RESET);
        }
        println!();

        for (entry, slot) in &summary.slots {
            let color = LANE_PALETTE[slot.lane % LANE_PALETTE.len()];
            println!(
                "  {}[{}]{} {} – {}  {} {}",
                color,
                slot.lane,
                RESET,
                minutes_to_time(slot.start_minutes),
                minutes_to_time(slot.end_minutes),
                pad_right(&entry.label, 14),
                entry.activity
            );
        }
    }

    println!("{}", separator(&cfg.separator_char, 56));
    println!("{}", bold("Gaps"));
    if summary.gaps.is_empty() {
        println!("  none");
    }
    for g in &summary.gaps {
        println!("  {}", format_gap(g));
    }

    println!("{}", bold("Time per label"));
    for t in &summary.totals {
        println!(
            "  {} {:>8}  {:>6}",
            pad_right(&t.label, 16),
            format_duration(t.minutes),
            percent(share(&summary.totals, t.minutes))
        );
    }

    let cov = &summary.coverage;
    println!(
        "{} {}{}{} ({} logged)",
        bold("Coverage"),
        color_for_coverage(cov.percentage),
        percent(cov.percentage),
        RESET,
        format_duration(cov.tracked_minutes)
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timeline { date: day } = cmd {
        let d = date::resolve_date(day.as_deref())?;

        let pool = DbPool::new(&cfg.database)?;
        let entries = load_entries_by_date(&pool.conn, &d)?;

        let summary = Core::build_day_summary(&entries, d, date::now(), cfg);
        print_summary(&summary, cfg);
    }
    Ok(())
}
