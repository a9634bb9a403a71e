mod common;
use common::day;
use daylog::db::fasting::{load_plan, save_plan};
use daylog::db::pool::DbPool;
use daylog::models::fasting::FastingPlan;

#[test]
fn test_eating_window_wraps_midnight() {
    let plan = FastingPlan::new(day("2025-02-01"), 8, 20).expect("plan");
    assert_eq!(
        plan.eating_window(),
        ("08:00 PM".to_string(), "04:00 AM".to_string())
    );
    assert_eq!(plan.fasting_hours(), 16);
    assert!(plan.is_eating_at(21 * 60));
    assert!(plan.is_eating_at(60));
    assert!(!plan.is_eating_at(12 * 60));
}

#[test]
fn test_out_of_range_plans_are_refused() {
    assert!(FastingPlan::new(day("2025-02-01"), 0, 10).is_err());
    assert!(FastingPlan::new(day("2025-02-01"), 25, 10).is_err());
    assert!(FastingPlan::new(day("2025-02-01"), 8, 24).is_err());
}

#[test]
fn test_legacy_shape_converts() {
    let plan = FastingPlan::from_json(day("2025-02-01"), r#"{"hours": 6, "startTime": "12:00 PM"}"#)
        .expect("legacy");
    assert_eq!((plan.window_hours, plan.start_hour), (6, 12));

    let plan = FastingPlan::from_json(day("2025-02-01"), r#"{"windowHours": 10, "startHour": 9}"#)
        .expect("current");
    assert_eq!((plan.window_hours, plan.start_hour), (10, 9));

    assert!(FastingPlan::from_json(day("2025-02-01"), r#"{"hours": 6}"#).is_err());
}

#[test]
fn test_plans_are_stored_per_day() {
    let pool = DbPool::in_memory().expect("db");
    let d = day("2025-02-01");

    assert_eq!(load_plan(&pool.conn, &d).expect("load"), None);

    save_plan(&pool.conn, &FastingPlan::new(d, 8, 20).expect("plan")).expect("save");
    save_plan(&pool.conn, &FastingPlan::new(d, 6, 11).expect("plan")).expect("replace");

    let stored = load_plan(&pool.conn, &d).expect("load").expect("some");
    assert_eq!((stored.window_hours, stored.start_hour), (6, 11));
}
