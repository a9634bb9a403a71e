use crate::cli::parser::{Commands, PromptAction};
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::core::calculator::gaps::find_gaps;
use crate::core::prompts::{entry_prompt, parse_entry_response, recovery_prompt};
use crate::db::labels::load_labels;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_by_date;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Prompt { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let labels = load_labels(&pool.conn)?;

    match action {
        PromptAction::Entry { text, about } => {
            let payload = entry_prompt(text, &labels, about.as_deref(), date::now());
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        PromptAction::Parse { date: day, response } => {
            let d = date::resolve_date(Some(day))?;
            let raw = fs::read_to_string(response)?;
            let draft = parse_entry_response(&raw, &labels, &cfg.default_label)?;

            let entry = AddLogic::apply(
                &mut pool,
                cfg,
                NewEntry {
                    date: d,
                    start: draft.start_time.as_str(),
                    end: Some(draft.end_time.as_str()),
                    activity: draft.activity.as_str(),
                    label: Some(draft.label.as_str()),
                    mood: None,
                    intensity: None,
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
        PromptAction::Recover { date: day, text } => {
            let d = date::resolve_date(Some(day))?;
            let entries = load_entries_by_date(&pool.conn, &d)?;
            let gaps = find_gaps(&entries, d, date::now(), cfg.min_gap_minutes);

            if gaps.is_empty() {
                info(format!("{} has no gaps to recover.", d));
                return Ok(());
            }

            let payload = recovery_prompt(&gaps, &labels, text.as_deref());
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
