use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Log a new activity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        activity,
        label,
        mood,
        intensity,
    } = cmd
    {
        let d = date::resolve_date(Some(date))?;
        let mut pool = DbPool::new(&cfg.database)?;

        let entry = AddLogic::apply(
            &mut pool,
            cfg,
            NewEntry {
                date: d,
                start,
                end: end.as_deref(),
                activity,
                label: label.as_deref(),
                mood: mood.as_deref(),
                intensity: *intensity,
            },
        )?;

        success(format!(
            "Entry #{} added for {}: {} - {} {} [{}]",
            entry.id,
            entry.date_str(),
            entry.start_time,
            entry.end_time.as_deref().unwrap_or("in progress"),
            entry.activity,
            entry.label
        ));
    }

    Ok(())
}
