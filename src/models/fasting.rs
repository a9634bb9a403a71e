use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_to_time, time_to_minutes};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Intermittent-fasting plan for one day: an eating window of
/// `window_hours` starting at `start_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastingPlan {
    pub date: NaiveDate,
    pub window_hours: u32, // 1..=24
    pub start_hour: u32,   // 0..=23
}

/// Eating window used when a day has no plan yet: 8 hours from 8 PM.
pub const DEFAULT_WINDOW_HOURS: u32 = 8;
pub const DEFAULT_START_HOUR: u32 = 20;

/// Plan as written in JSON files (`{"windowHours": 8, "startHour": 20}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanFile {
    window_hours: u32,
    start_hour: u32,
}

/// Older plans stored the window length and a clock time instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFastingPlan {
    pub hours: u32,
    pub start_time: String,
}

impl FastingPlan {
    pub fn new(date: NaiveDate, window_hours: u32, start_hour: u32) -> AppResult<Self> {
        if !(1..=24).contains(&window_hours) {
            return Err(AppError::InvalidFasting(format!(
                "eating window must be 1-24 hours, got {}",
                window_hours
            )));
        }
        if start_hour > 23 {
            return Err(AppError::InvalidFasting(format!(
                "start hour must be 0-23, got {}",
                start_hour
            )));
        }
        Ok(Self {
            date,
            window_hours,
            start_hour,
        })
    }

    /// Convert the legacy shape; only the hour of `start_time` is kept.
    pub fn from_legacy(date: NaiveDate, legacy: &LegacyFastingPlan) -> AppResult<Self> {
        let minutes = time_to_minutes(&legacy.start_time)
            .ok_or_else(|| AppError::InvalidTime(legacy.start_time.clone()))?;
        Self::new(date, legacy.hours, minutes / 60)
    }

    /// Read a JSON plan in either the current or the legacy shape.
    pub fn from_json(date: NaiveDate, raw: &str) -> AppResult<Self> {
        if let Ok(p) = serde_json::from_str::<PlanFile>(raw) {
            return Self::new(date, p.window_hours, p.start_hour);
        }
        let legacy: LegacyFastingPlan = serde_json::from_str(raw)?;
        Self::from_legacy(date, &legacy)
    }

    pub fn fasting_hours(&self) -> u32 {
        24 - self.window_hours
    }

    /// Eating window as canonical times; the end may fall on the next day.
    pub fn eating_window(&self) -> (String, String) {
        let start = self.start_hour * 60;
        let end = start + self.window_hours * 60;
        (minutes_to_time(start), minutes_to_time(end))
    }

    pub fn is_eating_at(&self, minute_of_day: u32) -> bool {
        let start = self.start_hour * 60;
        let end = start + self.window_hours * 60;
        (start..end).contains(&minute_of_day) || (start..end).contains(&(minute_of_day + 24 * 60))
    }
}
