use serde::Serialize;

/// One logged activity on one calendar day, in minutes since midnight.
///
/// `end_minutes` is `None` for an open entry; calculators infer it.
/// An end lower than the start denotes an interval crossing midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    pub start_minutes: u32,
    pub end_minutes: Option<u32>,
    pub label: String,
    pub activity: String,
}

impl TimeInterval {
    pub fn new(start_minutes: u32, end_minutes: Option<u32>, label: &str, activity: &str) -> Self {
        Self {
            start_minutes,
            end_minutes,
            label: label.to_string(),
            activity: activity.to_string(),
        }
    }
}
