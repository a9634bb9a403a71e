use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_recover_stores_only_drafts_inside_gaps() {
    let db_path = setup_test_db("recover_inside_gaps");
    init_db_with_data(&db_path);

    let response = temp_out("recover_inside_gaps", "json");
    fs::write(
        &response,
        r#"[
            {"startTime": "11:00 AM", "endTime": "12:00 PM", "activity": "Groceries", "label": "Life"},
            {"startTime": "10:00 AM", "endTime": "11:00 AM", "activity": "Overlap", "label": "Work"}
        ]"#,
    )
    .expect("write response");

    rti()
        .args(["--db", &db_path, "recover", "2025-09-01", "--response", &response])
        .assert()
        .success()
        .stdout(
            contains("Groceries")
                .and(contains("rejected 10:00 AM - 11:00 AM Overlap"))
                .and(contains("1 entr(ies) recovered, 1 rejected")),
        );

    rti()
        .args(["--db", &db_path, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Overlap").not()));
}

#[test]
fn test_recover_rejects_broken_json() {
    let db_path = setup_test_db("recover_broken_json");
    init_db_with_data(&db_path);

    let response = temp_out("recover_broken_json", "json");
    fs::write(&response, "I could not do that").expect("write response");

    rti()
        .args(["--db", &db_path, "recover", "2025-09-01", "--response", &response])
        .assert()
        .failure()
        .stderr(contains("Invalid JSON payload"));
}

#[test]
fn test_prompt_parse_stores_the_entry() {
    let db_path = setup_test_db("prompt_parse_stores");
    init_db_with_data(&db_path);

    let response = temp_out("prompt_parse_stores", "json");
    fs::write(
        &response,
        r#"{"startTime": "06:00 PM", "endTime": "07:00 PM", "activity": "Dinner", "label": "Cooking"}"#,
    )
    .expect("write response");

    rti()
        .args(["--db", &db_path, "prompt", "parse", "2025-09-01", "--response", &response])
        .assert()
        .success()
        .stdout(contains("06:00 PM - 07:00 PM Dinner [unknown]"));
}
