mod common;
use common::{at, day, entry};
use daylog::core::calculator::gaps::find_gaps;
use daylog::core::prompts::{
    UNPARSED_ACTIVITY, entry_prompt, gap_windows, parse_entry_response, parse_recovery_response,
    recovery_prompt,
};
use daylog::models::label::Label;

fn labels() -> Vec<Label> {
    vec![
        Label {
            id: 1,
            name: "Work".into(),
            color: "#000000".into(),
            parent_id: None,
        },
        Label {
            id: 2,
            name: "Coding".into(),
            color: "#000000".into(),
            parent_id: Some(1),
        },
    ]
}

#[test]
fn test_entry_prompt_lists_labels_and_current_time() {
    let payload = entry_prompt("coded since 9", &labels(), Some("I am a developer"), at("2025-06-01", 14, 5));
    let text = payload.system_text();

    assert!(text.starts_with("User context: I am a developer"));
    assert!(text.contains("\"Coding\" (subcategory of \"Work\")"));
    assert!(text.contains("02:05 PM"));
    assert!(text.contains("coded since 9"));
    assert_eq!(payload.messages.len(), 1);
}

#[test]
fn test_parse_entry_response_normalizes_fields() {
    let raw = r#"{"startTime": "9am", "endTime": "10:30 AM", "activity": "Refactoring", "label": "coding"}"#;
    let draft = parse_entry_response(raw, &labels(), "unknown").expect("parse");

    assert_eq!(draft.start_time, "09:00 AM");
    assert_eq!(draft.end_time, "10:30 AM");
    assert_eq!(draft.activity, "Refactoring");
    assert_eq!(draft.label, "Coding");
}

#[test]
fn test_parse_entry_response_fills_in_defaults() {
    let raw = "```json\n{\"label\": \"Gardening\"}\n```";
    let draft = parse_entry_response(raw, &labels(), "unknown").expect("parse");

    assert_eq!(draft.start_time, "12:00 AM");
    assert_eq!(draft.end_time, "12:00 AM");
    assert_eq!(draft.activity, UNPARSED_ACTIVITY);
    assert_eq!(draft.label, "unknown");
}

#[test]
fn test_parse_entry_response_rejects_broken_json() {
    assert!(parse_entry_response("not json", &labels(), "unknown").is_err());
}

#[test]
fn test_recovery_prompt_shows_gap_windows() {
    let entries = vec![entry("2025-06-01", "09:00 AM", Some("10:00 AM"), "Work")];
    let gaps = find_gaps(&entries, day("2025-06-01"), at("2025-06-01", 12, 0), 5);

    assert_eq!(gap_windows(&gaps), "12:00 AM–09:00 AM, 10:00 AM–12:00 PM");

    let payload = recovery_prompt(&gaps, &labels(), Some("I walked the dog"));
    assert!(payload.system_text().contains("[12:00 AM–09:00 AM, 10:00 AM–12:00 PM]"));
    assert!(payload.system_text().contains("\"Work\", \"Coding\""));
    assert_eq!(payload.messages[1].role, "user");
    assert_eq!(payload.messages[1].content, "I walked the dog");
}

#[test]
fn test_recovery_drafts_must_fit_inside_a_gap() {
    let entries = vec![entry("2025-06-01", "09:00 AM", Some("10:00 AM"), "Work")];
    let gaps = find_gaps(&entries, day("2025-06-01"), at("2025-06-01", 12, 0), 5);

    let raw = r#"[
        {"startTime": "10:15 AM", "endTime": "11:00 AM", "activity": "Dog walk", "label": "Errands"},
        {"startTime": "08:30 AM", "endTime": "09:30 AM", "activity": "Overlaps", "label": "Work"},
        {"startTime": "11:00 AM", "endTime": "10:30 AM", "activity": "Backwards", "label": "Work"},
        {"startTime": "soon", "endTime": "11:00 AM", "activity": "Vague", "label": "Work"},
        {"startTime": "06:00", "endTime": "07:00", "activity": "Breakfast", "label": "Coding"},
        {"endTime": "07:00 AM", "activity": "No start"}
    ]"#;

    let outcome = parse_recovery_response(raw, &gaps, &labels(), "unknown").expect("parse");

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.accepted[0].activity, "Dog walk");
    assert_eq!(outcome.accepted[0].label, "unknown");
    assert_eq!(outcome.accepted[1].start_time, "06:00 AM");
    assert_eq!(outcome.accepted[1].label, "Coding");

    assert_eq!(outcome.rejected.len(), 4);
    assert!(outcome.rejected[0].reason.contains("outside"));
    assert!(outcome.rejected[1].reason.contains("not before"));
    assert!(outcome.rejected[2].reason.contains("invalid startTime"));
    assert!(outcome.rejected[3].reason.contains("missing startTime"));
}

#[test]
fn test_recovery_answer_that_is_not_an_array_yields_nothing() {
    let gaps = find_gaps(&[], day("2025-06-01"), at("2025-06-02", 0, 0), 5);
    let outcome = parse_recovery_response(r#"{"startTime": "01:00 AM"}"#, &gaps, &labels(), "unknown")
        .expect("parse");
    assert!(outcome.accepted.is_empty());
    assert!(outcome.rejected.is_empty());
}

#[test]
fn test_recovery_block_may_end_at_midnight() {
    let entries = vec![entry("2025-06-01", "12:00 AM", Some("10:00 PM"), "Work")];
    let gaps = find_gaps(&entries, day("2025-06-01"), at("2025-06-03", 9, 0), 5);
    assert_eq!(gap_windows(&gaps), "10:00 PM–12:00 AM");

    let raw = r#"[{"startTime": "10:00 PM", "endTime": "12:00 AM", "activity": "Reading", "label": "Work"}]"#;
    let outcome = parse_recovery_response(raw, &gaps, &labels(), "unknown").expect("parse");

    assert!(outcome.rejected.is_empty());
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].start_time, "10:00 PM");
    assert_eq!(outcome.accepted[0].end_time, "12:00 AM");
}
