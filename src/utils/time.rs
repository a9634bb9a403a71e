//! Time utilities: normalizing free-form clock times into the canonical
//! "HH:MM AM/PM" form, minute arithmetic and duration formatting.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Returned by [`sanitize_time`] when the input cannot be read as a clock time.
/// Never accepted by [`time_to_minutes`] or [`is_valid_time`].
pub const INVALID_TIME: &str = "--:--";

static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2}) (AM|PM)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Parse a human-entered clock time into minutes since midnight.
///
/// Accepts "9am", "9:00 am", "13:00", "1300", "13", "1 PM", "11:59 PM", ...
fn parse_clock_minutes(input: &str) -> Option<u32> {
    let lowered = input.trim().to_lowercase();

    let (body, period) = if let Some(b) = lowered.strip_suffix("am") {
        (b, Some(Period::Am))
    } else if let Some(b) = lowered.strip_suffix("pm") {
        (b, Some(Period::Pm))
    } else {
        (lowered.as_str(), None)
    };

    let mut body = body.trim().to_string();

    // military shorthand: "1300" -> "13:00"
    if body.len() == 4 && body.bytes().all(|b| b.is_ascii_digit()) {
        body.insert(2, ':');
    }

    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) => (h.trim(), m.trim()),
        None => (body.as_str(), "00"),
    };

    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minutes.len() > 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut hour: u32 = hours.parse().ok()?;
    let minute: u32 = if minutes.is_empty() {
        0
    } else {
        minutes.parse().ok()?
    };

    if hour > 23 || minute > 59 {
        return None;
    }

    let mut is_pm = period == Some(Period::Pm);
    let is_am = period == Some(Period::Am);

    // No marker and hour >= 12: read it as 24-hour input
    if period.is_none() && hour >= 12 {
        is_pm = true;
        if hour > 12 {
            hour -= 12;
        }
    }

    if is_pm && hour < 12 {
        hour += 12;
    }
    if is_am && hour == 12 {
        hour = 0;
    }

    Some(hour * 60 + minute)
}

/// Normalize any supported time notation into "HH:MM AM/PM".
///
/// Malformed input does not fail: it yields [`INVALID_TIME`], which the
/// validator rejects. Callers are expected to check [`is_valid_time`] before
/// persisting anything.
pub fn sanitize_time(input: &str) -> String {
    match parse_clock_minutes(input) {
        Some(minutes) => minutes_to_time(minutes),
        None => INVALID_TIME.to_string(),
    }
}

/// Minutes since midnight for a canonical "HH:MM AM/PM" string.
pub fn time_to_minutes(canonical: &str) -> Option<u32> {
    let caps = CANONICAL.captures(canonical.trim())?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    if hour > 12 || minute > 59 {
        return None;
    }

    match &caps[3] {
        "PM" if hour != 12 => hour += 12,
        "AM" if hour == 12 => hour = 0,
        _ => {}
    }

    Some(hour * 60 + minute)
}

/// True when `input` normalizes to a real clock time.
pub fn is_valid_time(input: &str) -> bool {
    time_to_minutes(&sanitize_time(input)).is_some_and(|m| m < MINUTES_PER_DAY)
}

/// Canonical "HH:MM AM/PM" for a minute offset (wraps at midnight).
pub fn minutes_to_time(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / 60;
    let minute = minutes % 60;

    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    let period = if hour >= 12 { "PM" } else { "AM" };

    format!("{:02}:{:02} {}", display, minute, period)
}

/// Length of `[start, end)` in minutes; an end before the start crosses midnight.
pub fn span_minutes(start: u32, end: u32) -> u32 {
    if end < start {
        end + MINUTES_PER_DAY - start
    } else {
        end - start
    }
}

/// "Xh Ym" for durations of an hour or more, "Ym" otherwise.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Normalize a required time argument or fail with `InvalidTime`.
pub fn require_time(input: &str) -> AppResult<String> {
    if !is_valid_time(input) {
        return Err(AppError::InvalidTime(input.to_string()));
    }
    Ok(sanitize_time(input))
}

