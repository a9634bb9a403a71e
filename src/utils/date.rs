//! Date helpers: today's date, `YYYY[-MM[-DD]]` periods and day ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local wall-clock time, the reference "now" for gap analysis.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a date argument, accepting the keywords `today` and `yesterday`.
pub fn resolve_date(s: Option<&str>) -> AppResult<NaiveDate> {
    match s.map(str::trim) {
        None | Some("today") => Ok(today()),
        Some("yesterday") => today()
            .pred_opt()
            .ok_or_else(|| AppError::InvalidDate("yesterday".into())),
        Some(other) => parse_date(other).ok_or_else(|| AppError::InvalidDate(other.to_string())),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn single_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (ys, ms) = p.split_once('-')?;
            let y: i32 = ys.parse().ok()?;
            let m: u32 = ms.parse().ok()?;
            let last = month_last_day(y, m)?;
            Some((
                NaiveDate::from_ymd_opt(y, m, 1)?,
                NaiveDate::from_ymd_opt(y, m, last)?,
            ))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse a period filter into inclusive date bounds.
///
/// Supported:
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - ranges `start:end` of the same shape (e.g. `2025-06:2025-08`)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid());
        }

        let (from, _) = single_bounds(start).ok_or_else(invalid)?;
        let (_, to) = single_bounds(end).ok_or_else(invalid)?;

        if from > to {
            return Err(invalid());
        }
        return Ok((from, to));
    }

    single_bounds(p.trim()).ok_or_else(invalid)
}

/// Resolve an optional `--period` flag.
///
/// `None` means the current month, `all` disables date filtering.
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => parse_period(p).map(Some),
        None => {
            let t = today();
            let current = format!("{:04}-{:02}", t.year(), t.month());
            parse_period(&current).map(Some)
        }
    }
}

/// Every day in `[start, end]`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
