use super::interval::TimeInterval;
use crate::utils::time::time_to_minutes;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Optional self-reported mood attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub mood: String,
    pub intensity: u8, // 1-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub date: NaiveDate,          // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
    pub start_time: String,       // ⇔ time_entries.start_time ("HH:MM AM/PM")
    pub end_time: Option<String>, // ⇔ time_entries.end_time (NULL = open)
    pub activity: String,
    pub label: String,
    pub mood: Option<Mood>,       // ⇔ time_entries.mood (JSON)
    pub created_at: String,       // ⇔ time_entries.created_at (ISO8601)
}

impl TimeEntry {
    /// Build a not-yet-persisted entry (`id = 0`).
    /// Times are expected in canonical form.
    pub fn new(
        date: NaiveDate,
        start_time: String,
        end_time: Option<String>,
        activity: &str,
        label: &str,
    ) -> Self {
        Self {
            id: 0,
            date,
            start_time,
            end_time,
            activity: activity.trim().to_string(),
            label: label.trim().to_string(),
            mood: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_minutes(&self) -> Option<u32> {
        time_to_minutes(&self.start_time)
    }

    pub fn end_minutes(&self) -> Option<u32> {
        self.end_time.as_deref().and_then(time_to_minutes)
    }

    /// The minute-level view used by the calculators.
    /// `None` when the stored start time is not canonical.
    pub fn to_interval(&self) -> Option<TimeInterval> {
        Some(TimeInterval {
            start_minutes: self.start_minutes()?,
            end_minutes: self.end_minutes(),
            label: self.label.clone(),
            activity: self.activity.clone(),
        })
    }
}
