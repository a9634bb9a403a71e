//! Lane assignment for the timeline view: overlapping entries are pushed
//! into side-by-side lanes so they never render on top of each other.

use crate::models::interval::TimeInterval;
use crate::utils::time::MINUTES_PER_DAY;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSlot {
    /// Position of the interval in the input slice.
    pub index: usize,
    pub start_minutes: u32,
    /// Resolved end; may exceed 1440 for an interval crossing midnight.
    pub end_minutes: u32,
    pub lane: usize,
}

impl LayoutSlot {
    fn overlaps(&self, start: u32, end: u32) -> bool {
        start < self.end_minutes && self.start_minutes < end
    }
}

/// Assign a lane to every interval of a single day.
///
/// Slots come back in chronological order (ties keep input order), one per
/// input interval. A missing end is taken from the next entry's start, or
/// the end of the day for the last entry.
pub fn layout(intervals: &[TimeInterval]) -> Vec<LayoutSlot> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| intervals[i].start_minutes);

    let mut placed: Vec<LayoutSlot> = Vec::with_capacity(order.len());

    for (pos, &i) in order.iter().enumerate() {
        let current = &intervals[i];
        let start = current.start_minutes;

        let end = match current.end_minutes {
            Some(end) if end < start => end + MINUTES_PER_DAY,
            Some(end) => end,
            None => order
                .get(pos + 1)
                .map(|&next| intervals[next].start_minutes)
                .unwrap_or(MINUTES_PER_DAY),
        };

        let mut lane = 0;
        while placed
            .iter()
            .any(|slot| slot.lane == lane && slot.overlaps(start, end))
        {
            lane += 1;
        }

        placed.push(LayoutSlot {
            index: i,
            start_minutes: start,
            end_minutes: end,
            lane,
        });
    }

    placed
}
