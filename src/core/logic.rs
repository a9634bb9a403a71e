use crate::config::Config;
use crate::core::calculator::{coverage, gaps, layout, summary};
use crate::models::{day_summary::DaySummary, time_entry::TimeEntry};
use chrono::{NaiveDate, NaiveDateTime};

pub struct Core;

impl Core {
    /// Gather the timeline, gaps, label totals and coverage of one day.
    ///
    /// `entries` may contain other days; they are ignored.
    pub fn build_day_summary(
        entries: &[TimeEntry],
        date: NaiveDate,
        now: NaiveDateTime,
        cfg: &Config,
    ) -> DaySummary {
        let day_entries: Vec<TimeEntry> = entries
            .iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();

        // Entries with unreadable start times stay out of the layout.
        let (placeable, intervals): (Vec<&TimeEntry>, Vec<_>) = day_entries
            .iter()
            .filter_map(|e| e.to_interval().map(|i| (e, i)))
            .unzip();

        let slots = layout::layout(&intervals)
            .into_iter()
            .map(|slot| (placeable[slot.index].clone(), slot))
            .collect();

        DaySummary {
            date,
            slots,
            gaps: gaps::find_gaps(&day_entries, date, now, cfg.min_gap_minutes),
            totals: summary::totals_by_label(&day_entries, 1, &cfg.label_order),
            coverage: coverage::day_coverage(&day_entries, date, cfg.daily_active_minutes),
        }
    }
}
