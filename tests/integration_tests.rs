use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add, init_db, init_db_with_data, rti, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('time_entries', 'labels', 'fasting', 'log')",
            [],
            |r| r.get(0),
        )
        .expect("count tables");
    assert_eq!(count, 4);
}

#[test]
fn test_add_normalizes_times() {
    let db_path = setup_test_db("add_normalizes_times");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "2025-09-01", "1300", "2359", "--activity", "Deep work",
        ])
        .assert()
        .success()
        .stdout(contains("01:00 PM - 11:59 PM"));

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("01:00 PM").and(contains("Deep work")).and(contains("unknown")));
}

#[test]
fn test_add_rejects_invalid_time() {
    let db_path = setup_test_db("add_rejects_invalid_time");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "2025-09-01", "25:00", "--activity", "Nope",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time: 25:00"));

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("No entries"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("add_rejects_invalid_date");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "add", "2025-13-40", "9am", "--activity", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_gaps_of_a_past_day() {
    let db_path = setup_test_db("gaps_of_a_past_day");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "gaps", "2025-09-01"])
        .assert()
        .success()
        .stdout(
            contains("12:00 AM – 09:00 AM")
                .and(contains("10:30 AM – 01:00 PM"))
                .and(contains("03:00 PM – 12:00 AM"))
                .and(contains("3 gap(s)")),
        );
}

#[test]
fn test_gaps_threshold_flag() {
    let db_path = setup_test_db("gaps_threshold_flag");
    init_db(&db_path);
    add(&db_path, "2025-09-02", "12:00 AM", Some("11:50 PM"), "Long day", "Life");

    rti()
        .args(["--db", &db_path, "gaps", "2025-09-02", "--min", "15"])
        .assert()
        .success()
        .stdout(contains("No gaps"));

    rti()
        .args(["--db", &db_path, "gaps", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("11:50 PM – 12:00 AM"));
}

#[test]
fn test_timeline_shows_lanes_and_totals() {
    let db_path = setup_test_db("timeline_shows_lanes");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "timeline", "2025-09-01"])
        .assert()
        .success()
        .stdout(
            contains("lane 0")
                .and(contains("lane 1"))
                .and(contains("Phone call"))
                .and(contains("Unlogged Time"))
                .and(contains("Coverage")),
        );
}

#[test]
fn test_edit_and_clear_end() {
    let db_path = setup_test_db("edit_and_clear_end");
    init_db(&db_path);
    add(&db_path, "2025-09-03", "9am", Some("10am"), "Reading", "Life");

    rti()
        .args(["--db", &db_path, "edit", "1", "--end", "11:15", "--activity", "Reading a book"])
        .assert()
        .success()
        .stdout(contains("11:15 AM").and(contains("Reading a book")));

    rti()
        .args(["--db", &db_path, "edit", "1", "--clear-end"])
        .assert()
        .success()
        .stdout(contains("in progress"));

    rti()
        .args(["--db", &db_path, "edit", "42", "--start", "8am"])
        .assert()
        .failure()
        .stderr(contains("#42 not found"));
}

#[test]
fn test_delete_entry_and_day() {
    let db_path = setup_test_db("delete_entry_and_day");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "del", "2025-09-01", "--id", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #2"));

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Feature work").not().and(contains("Phone call")));

    rti()
        .args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 entries"));

    rti()
        .args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entries found for date 2025-09-01"));
}

#[test]
fn test_summary_and_coverage() {
    let db_path = setup_test_db("summary_and_coverage");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "summary", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(
            contains("Work")
                .and(contains("1h 30m"))
                .and(contains("Coding"))
                .and(contains("2h 0m"))
                .and(contains("Unlogged Time")),
        );

    // 09:00-10:30 and 13:00-15:00, the call inside the latter counted once.
    rti()
        .args(["--db", &db_path, "coverage", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("3h 30m").and(contains("over 1 day(s)")));
}

#[test]
fn test_labels_and_consistency_check() {
    let db_path = setup_test_db("labels_and_check");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "label", "add", "Work", "--color", "#3366ff"])
        .assert()
        .success();
    rti()
        .args(["--db", &db_path, "label", "add", "Work meeting", "--parent", "Work"])
        .assert()
        .success();
    rti()
        .args(["--db", &db_path, "label", "add", "work"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rti()
        .args(["--db", &db_path, "label", "list"])
        .assert()
        .success()
        .stdout(contains("Work | Work meeting"));

    rti()
        .args(["--db", &db_path, "label", "check"])
        .assert()
        .success()
        .stdout(contains("repeats its parent's name"));

    rti()
        .args(["--db", &db_path, "label", "del", "Work"])
        .assert()
        .failure()
        .stderr(contains("still has sub-labels"));
}

#[test]
fn test_unknown_label_is_kept_with_a_warning() {
    let db_path = setup_test_db("unknown_label_warning");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "add", "2025-09-04", "8am", "9am", "--activity", "Pottery", "--label", "Hobby",
        ])
        .assert()
        .success()
        .stdout(contains("Label 'Hobby' is not defined").and(contains("[Hobby]")));
}

#[test]
fn test_fasting_plan() {
    let db_path = setup_test_db("fasting_plan");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "fasting", "2025-09-05"])
        .assert()
        .success()
        .stdout(contains("No fasting plan"));

    rti()
        .args(["--db", &db_path, "fasting", "2025-09-05", "--window", "6", "--start", "12"])
        .assert()
        .success()
        .stdout(contains("12:00 PM – 06:00 PM").and(contains("18h")));

    rti()
        .args(["--db", &db_path, "fasting", "2025-09-05", "--window", "30"])
        .assert()
        .failure()
        .stderr(contains("Invalid fasting plan"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("add")).and(contains("Phone call")));
}

#[test]
fn test_prompt_payloads() {
    let db_path = setup_test_db("prompt_payloads");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "prompt", "entry", "had lunch at noon"])
        .assert()
        .success()
        .stdout(contains("\"role\": \"system\"").and(contains("had lunch at noon")));

    rti()
        .args(["--db", &db_path, "prompt", "recover", "2025-09-01", "--text", "gym"])
        .assert()
        .success()
        .stdout(contains("10:30 AM–01:00 PM").and(contains("\"content\": \"gym\"")));
}
