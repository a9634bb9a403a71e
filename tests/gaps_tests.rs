mod common;
use common::{at, day, entry};
use daylog::core::calculator::gaps::{MIN_GAP_MINUTES, find_gaps, total_gap_minutes};

#[test]
fn test_gaps_until_now_on_the_current_day() {
    let entries = vec![
        entry("2025-03-10", "09:00 AM", Some("10:00 AM"), "Work"),
        entry("2025-03-10", "10:30 AM", Some("11:00 AM"), "Work"),
    ];

    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-10", 12, 0), MIN_GAP_MINUTES);

    let spans: Vec<(u32, u32)> = gaps.iter().map(|g| (g.start_minutes, g.end_minutes)).collect();
    assert_eq!(spans, vec![(0, 540), (600, 630), (660, 720)]);

    assert_eq!(gaps[0].start, at("2025-03-10", 0, 0));
    assert_eq!(gaps[1].start, at("2025-03-10", 10, 0));
    assert_eq!(gaps[2].end, at("2025-03-10", 12, 0));
}

#[test]
fn test_past_day_runs_to_midnight() {
    let entries = vec![entry("2025-03-10", "09:00 AM", Some("05:00 PM"), "Work")];

    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-12", 8, 0), 5);

    assert_eq!(gaps.len(), 2);
    assert_eq!((gaps[1].start_minutes, gaps[1].end_minutes), (1020, 1440));
    assert_eq!(gaps[1].end, at("2025-03-11", 0, 0));
    assert_eq!(total_gap_minutes(&gaps), 540 + 420);
}

#[test]
fn test_empty_day_is_one_gap() {
    let gaps = find_gaps(&[], day("2025-03-10"), at("2025-03-11", 9, 0), 5);
    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].start_minutes, gaps[0].end_minutes), (0, 1440));
}

#[test]
fn test_future_day_runs_to_midnight() {
    let gaps = find_gaps(&[], day("2025-03-12"), at("2025-03-11", 9, 0), 5);
    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].start_minutes, gaps[0].end_minutes), (0, 1440));
}

#[test]
fn test_future_day_with_entries() {
    let entries = vec![entry("2025-03-12", "09:00 AM", Some("10:00 AM"), "Work")];

    let gaps = find_gaps(&entries, day("2025-03-12"), at("2025-03-11", 9, 0), 5);

    let spans: Vec<(u32, u32)> = gaps.iter().map(|g| (g.start_minutes, g.end_minutes)).collect();
    assert_eq!(spans, vec![(0, 540), (600, 1440)]);
    assert_eq!(gaps[1].end, at("2025-03-13", 0, 0));
}

#[test]
fn test_day_long_entry_leaves_no_gap() {
    let entries = vec![entry("2025-03-10", "12:00 AM", Some("11:59 PM"), "Work")];
    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-11", 9, 0), MIN_GAP_MINUTES);
    assert!(gaps.is_empty());
}

#[test]
fn test_short_gaps_are_dropped() {
    let entries = vec![
        entry("2025-03-10", "12:00 AM", Some("09:00 AM"), "Sleep"),
        entry("2025-03-10", "09:04 AM", Some("11:59 PM"), "Life"),
    ];
    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-11", 0, 0), 5);
    assert!(gaps.is_empty(), "4 and 1 minute gaps are below the threshold");

    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-11", 0, 0), 1);
    assert_eq!(gaps.len(), 2);
}

#[test]
fn test_open_entry_covers_only_its_start() {
    let entries = vec![
        entry("2025-03-10", "09:00 AM", None, "Work"),
        entry("2025-03-10", "10:00 AM", Some("11:00 AM"), "Work"),
    ];
    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-10", 11, 0), 5);
    let spans: Vec<(u32, u32)> = gaps.iter().map(|g| (g.start_minutes, g.end_minutes)).collect();
    assert_eq!(spans, vec![(0, 540), (540, 600)]);
}

#[test]
fn test_contained_entry_does_not_move_the_cursor_back() {
    let entries = vec![
        entry("2025-03-10", "09:00 AM", Some("05:00 PM"), "Work"),
        entry("2025-03-10", "10:00 AM", Some("11:00 AM"), "Coding"),
    ];
    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-11", 0, 0), 5);
    let spans: Vec<(u32, u32)> = gaps.iter().map(|g| (g.start_minutes, g.end_minutes)).collect();
    assert_eq!(spans, vec![(0, 540), (1020, 1440)]);
}

#[test]
fn test_other_days_are_ignored() {
    let entries = vec![
        entry("2025-03-09", "12:00 AM", Some("11:59 PM"), "Work"),
        entry("2025-03-10", "12:00 AM", Some("11:00 PM"), "Work"),
    ];
    let gaps = find_gaps(&entries, day("2025-03-10"), at("2025-03-11", 0, 0), 5);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].start_minutes, 1380);
}

#[test]
fn test_gap_contains() {
    let gaps = find_gaps(&[], day("2025-03-10"), at("2025-03-10", 12, 0), 5);
    let g = &gaps[0];
    assert!(g.contains(0, 720));
    assert!(g.contains(60, 120));
    assert!(!g.contains(700, 730));
    assert!(!g.contains(120, 60));
}
