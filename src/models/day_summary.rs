use crate::core::calculator::coverage::DayCoverage;
use crate::core::calculator::gaps::Gap;
use crate::core::calculator::layout::LayoutSlot;
use crate::core::calculator::summary::LabelTotal;
use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;

/// Everything the `timeline` view shows for one day.
#[derive(Debug)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Entries of the day in layout order, paired with their lane.
    pub slots: Vec<(TimeEntry, LayoutSlot)>,
    pub gaps: Vec<Gap>,
    pub totals: Vec<LabelTotal>,
    pub coverage: DayCoverage,
}

impl DaySummary {
    pub fn lane_count(&self) -> usize {
        self.slots
            .iter()
            .map(|(_, s)| s.lane + 1)
            .max()
            .unwrap_or(0)
    }
}
