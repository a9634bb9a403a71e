//! How much of each waking day has been logged.

use crate::models::time_entry::TimeEntry;
use crate::utils::time::MINUTES_PER_DAY;
use chrono::NaiveDate;
use serde::Serialize;

/// Default length of the waking day the coverage is measured against.
pub const DAILY_ACTIVE_MINUTES: u32 = 16 * 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCoverage {
    pub date: NaiveDate,
    pub tracked_minutes: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub days: Vec<DayCoverage>,
    pub total_tracked_minutes: u32,
    pub total_percentage: f64,
}

fn capped_percentage(tracked: u32, available: u32) -> f64 {
    if available == 0 {
        return 0.0;
    }
    (tracked as f64 * 100.0 / available as f64).min(100.0)
}

/// Distinct minutes of `day` covered by at least one closed entry.
///
/// Overlapping entries are counted once. An entry whose end is before its
/// start is clipped at midnight.
pub fn tracked_minutes(entries: &[TimeEntry], day: NaiveDate) -> u32 {
    let mut covered = vec![false; MINUTES_PER_DAY as usize];

    for entry in entries.iter().filter(|e| e.date == day) {
        let (Some(start), Some(mut end)) = (entry.start_minutes(), entry.end_minutes()) else {
            continue;
        };
        if end < start {
            end = MINUTES_PER_DAY;
        }
        for minute in covered.iter_mut().take(end as usize).skip(start as usize) {
            *minute = true;
        }
    }

    covered.iter().filter(|c| **c).count() as u32
}

pub fn day_coverage(entries: &[TimeEntry], day: NaiveDate, active_minutes: u32) -> DayCoverage {
    let tracked = tracked_minutes(entries, day);
    DayCoverage {
        date: day,
        tracked_minutes: tracked,
        percentage: capped_percentage(tracked, active_minutes),
    }
}

pub fn coverage_report(
    entries: &[TimeEntry],
    days: &[NaiveDate],
    active_minutes: u32,
) -> CoverageReport {
    let days: Vec<DayCoverage> = days
        .iter()
        .map(|d| day_coverage(entries, *d, active_minutes))
        .collect();

    let total: u32 = days.iter().map(|d| d.tracked_minutes).sum();
    let available = days.len() as u32 * active_minutes;

    CoverageReport {
        total_tracked_minutes: total,
        total_percentage: capped_percentage(total, available),
        days,
    }
}
