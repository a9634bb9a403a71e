#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use daylog::models::time_entry::TimeEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary runner with a private configuration directory, so the user's
/// own `~/.daylog` is never read or written.
pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("daylog");
    let mut dir = env::temp_dir();
    dir.push("daylog_test_config");
    cmd.env(daylog::config::CONFIG_DIR_ENV, dir);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daylog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI (test mode: no config file written).
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI and expect success.
pub fn add(db_path: &str, date: &str, start: &str, end: Option<&str>, activity: &str, label: &str) {
    let mut args = vec!["--db", db_path, "add", date, start];
    if let Some(e) = end {
        args.push(e);
    }
    args.extend(["--activity", activity, "--label", label]);
    rti().args(&args).assert().success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// 2025-09-01 has a morning block, a gap, and two overlapping afternoon entries.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add(db_path, "2025-09-01", "09:00", Some("10:30"), "Standup and email", "Work");
    add(db_path, "2025-09-01", "1pm", Some("3pm"), "Feature work", "Coding");
    add(db_path, "2025-09-01", "14:00", Some("14:45"), "Phone call", "Social");
    add(db_path, "2025-09-15", "7am", Some("8am"), "Run", "Exercise");
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn at(date: &str, hh: u32, mm: u32) -> NaiveDateTime {
    day(date).and_hms_opt(hh, mm, 0).expect("valid test time")
}

/// In-memory entry with canonical times (`end` may be `None`).
pub fn entry(date: &str, start: &str, end: Option<&str>, label: &str) -> TimeEntry {
    TimeEntry::new(
        day(date),
        daylog::utils::sanitize_time(start),
        end.map(daylog::utils::sanitize_time),
        "test activity",
        label,
    )
}
