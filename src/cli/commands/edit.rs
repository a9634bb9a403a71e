use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryPatch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: new_date,
        start,
        end,
        clear_end,
        activity,
        label,
        mood,
        intensity,
    } = cmd
    {
        let new_date = match new_date {
            Some(d) => Some(date::resolve_date(Some(d))?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let entry = EditLogic::apply(
            &mut pool,
            cfg,
            *id,
            EntryPatch {
                date: new_date,
                start: start.as_deref(),
                end: end.as_deref(),
                clear_end: *clear_end,
                activity: activity.as_deref(),
                label: label.as_deref(),
                mood: mood.as_deref(),
                intensity: *intensity,
            },
        )?;

        success(format!(
            "Entry #{} updated: {} {} - {} {} [{}]",
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
