use crate::models::time_entry::TimeEntry;
use crate::utils::time::{span_minutes, time_to_minutes};
use serde::Serialize;

/// Flat view of an entry, one row per entry in CSV and JSON alike.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: Option<u32>,
    pub activity: String,
    pub label: String,
    pub mood: String,
    pub mood_intensity: Option<u8>,
    pub created_at: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        let duration = match (
            time_to_minutes(&e.start_time),
            e.end_time.as_deref().and_then(time_to_minutes),
        ) {
            (Some(s), Some(end)) => Some(span_minutes(s, end)),
            _ => None,
        };

        Self {
            id: e.id,
            date: e.date_str(),
            start_time: e.start_time.clone(),
            end_time: e.end_time.clone().unwrap_or_default(),
            duration_minutes: duration,
            activity: e.activity.clone(),
            label: e.label.clone(),
            mood: e.mood.as_ref().map(|m| m.mood.clone()).unwrap_or_default(),
            mood_intensity: e.mood.as_ref().map(|m| m.intensity),
            created_at: e.created_at.clone(),
        }
    }
}
