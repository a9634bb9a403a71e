//! Module responsible for finding the unlogged stretches ("gaps") of a day.

use crate::models::time_entry::TimeEntry;
use crate::utils::time::MINUTES_PER_DAY;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Gaps shorter than this are not worth reporting.
pub const MIN_GAP_MINUTES: u32 = 5;

/// A maximal stretch of a day with no covering entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl Gap {
    fn between(day_start: NaiveDateTime, start_minutes: u32, end_minutes: u32) -> Self {
        Self {
            start: day_start + Duration::minutes(start_minutes as i64),
            end: day_start + Duration::minutes(end_minutes as i64),
            start_minutes,
            end_minutes,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }

    /// True when `[start, end)` lies entirely inside this gap.
    pub fn contains(&self, start_minutes: u32, end_minutes: u32) -> bool {
        start_minutes >= self.start_minutes
            && end_minutes <= self.end_minutes
            && start_minutes < end_minutes
    }
}

/// Find the gaps of `day` among `entries`.
///
/// - only entries dated `day` are considered, sorted by start time;
/// - an entry without an end time covers nothing past its start;
/// - the analysis stops at the current minute when `day` is today, at
///   midnight for any other day.
///
/// Entries crossing midnight are not special-cased here: their end only
/// moves the cursor when it is later than the cursor.
pub fn find_gaps(
    entries: &[TimeEntry],
    day: NaiveDate,
    now: NaiveDateTime,
    min_gap_minutes: u32,
) -> Vec<Gap> {
    let day_start = day.and_time(chrono::NaiveTime::MIN);
    let window_end = if day == now.date() {
        now.hour() * 60 + now.minute()
    } else {
        MINUTES_PER_DAY
    };

    let mut spans: Vec<(u32, u32)> = entries
        .iter()
        .filter(|e| e.date == day)
        .filter_map(|e| {
            let Some(start) = e.start_minutes() else {
                log::warn!(
                    "skipping entry #{} with unreadable start time {:?}",
                    e.id,
                    e.start_time
                );
                return None;
            };
            Some((start, e.end_minutes().unwrap_or(start)))
        })
        .collect();
    spans.sort_by_key(|(start, _)| *start);

    let mut gaps = Vec::new();
    let mut cursor = 0u32;

    for (start, end) in spans {
        if start >= cursor && start - cursor >= min_gap_minutes {
            gaps.push(Gap::between(day_start, cursor, start));
        }
        cursor = cursor.max(end);
    }

    if window_end >= cursor && window_end - cursor >= min_gap_minutes {
        gaps.push(Gap::between(day_start, cursor, window_end));
    }

    log::debug!("{} gap(s) found for {}", gaps.len(), day);
    gaps
}

/// Total unlogged minutes across `gaps`.
pub fn total_gap_minutes(gaps: &[Gap]) -> u32 {
    gaps.iter().map(Gap::duration_minutes).sum()
}
