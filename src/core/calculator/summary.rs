//! Per-label time totals (the data behind the "time spent per activity" view).

use crate::models::time_entry::TimeEntry;
use crate::utils::time::{MINUTES_PER_DAY, span_minutes};
use serde::Serialize;
use std::collections::HashMap;

pub const UNLOGGED_LABEL: &str = "Unlogged Time";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelTotal {
    pub label: String,
    pub minutes: u32,
}

/// Sum logged minutes per label over `entries` spanning `days` days.
///
/// An open entry runs to the end of its day; an end before the start
/// crosses midnight. Whatever is left of `days * 1440` minutes is reported
/// under [`UNLOGGED_LABEL`]. Labels listed in `order` come first (in that
/// order), the rest alphabetically, unlogged time last.
pub fn totals_by_label(entries: &[TimeEntry], days: u32, order: &[String]) -> Vec<LabelTotal> {
    let mut by_label: HashMap<String, u32> = HashMap::new();

    for entry in entries {
        let Some(start) = entry.start_minutes() else {
            continue;
        };
        let end = entry.end_minutes().unwrap_or(MINUTES_PER_DAY);
        *by_label.entry(entry.label.clone()).or_default() += span_minutes(start, end);
    }

    let logged: u32 = by_label.values().sum();

    let rank = |label: &str| {
        order
            .iter()
            .position(|o| o.eq_ignore_ascii_case(label))
            .unwrap_or(usize::MAX)
    };

    let mut totals: Vec<LabelTotal> = by_label
        .into_iter()
        .map(|(label, minutes)| LabelTotal { label, minutes })
        .collect();
    totals.sort_by(|a, b| {
        rank(&a.label)
            .cmp(&rank(&b.label))
            .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
    });

    let available = days * MINUTES_PER_DAY;
    if available > logged {
        totals.push(LabelTotal {
            label: UNLOGGED_LABEL.to_string(),
            minutes: available - logged,
        });
    }

    totals
}

/// Share of `minutes` over the total of `totals`, in percent.
pub fn share(totals: &[LabelTotal], minutes: u32) -> f64 {
    let all: u32 = totals.iter().map(|t| t.minutes).sum();
    if all == 0 {
        0.0
    } else {
        minutes as f64 * 100.0 / all as f64
    }
}
