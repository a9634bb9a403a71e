use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::fasting::{load_plan, save_plan};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::fasting::{DEFAULT_START_HOUR, DEFAULT_WINDOW_HOURS, FastingPlan};
use crate::ui::messages::{header, info, success};
use crate::utils::date;
use chrono::Timelike;
use std::fs;

fn print_plan(plan: &FastingPlan) {
    let (from, to) = plan.eating_window();
    header(format!("Fasting plan for {}", plan.date));
    println!(
        "  Eating window: {} – {} ({}h)",
        from, to, plan.window_hours
    );
    println!("  Fasting:       {}h", plan.fasting_hours());

    if plan.date == date::today() {
        let now = date::now();
        let state = if plan.is_eating_at(now.hour() * 60 + now.minute()) {
            "eating window open"
        } else {
            "fasting"
        };
        println!("  Right now:     {}", state);
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fasting {
        date: day,
        window,
        start,
        import,
    } = cmd
    {
        let d = date::resolve_date(day.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let existing = load_plan(&pool.conn, &d)?;

        let updated = if let Some(file) = import {
            Some(FastingPlan::from_json(d, &fs::read_to_string(file)?)?)
        } else if window.is_some() || start.is_some() {
            let (w, s) = existing
                .as_ref()
                .map(|p| (p.window_hours, p.start_hour))
                .unwrap_or((DEFAULT_WINDOW_HOURS, DEFAULT_START_HOUR));
            Some(FastingPlan::new(d, window.unwrap_or(w), start.unwrap_or(s))?)
        } else {
            None
        };

        match (updated, existing) {
            (Some(plan), _) => {
                save_plan(&pool.conn, &plan)?;
                ttlog_or_warn(
                    &pool.conn,
                    "fasting",
                    &d.to_string(),
                    &format!("window {}h from {}:00", plan.window_hours, plan.start_hour),
                );
                success("Fasting plan saved.");
                print_plan(&plan);
            }
            (None, Some(plan)) => print_plan(&plan),
            (None, None) => info(format!(
                "No fasting plan for {} (set one with --window/--start).",
                d
            )),
        }
    }
    Ok(())
}
