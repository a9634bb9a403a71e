use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recover::RecoverLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recover { date: day, response } = cmd {
        let d = date::resolve_date(Some(day))?;
        let raw = fs::read_to_string(response)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let (stored, outcome) = RecoverLogic::apply(&mut pool, cfg, d, &raw, date::now())?;

        for e in &stored {
            success(format!(
                "#{} {} - {} {} [{}]",
                e.id,
                e.start_time,
                e.end_time.as_deref().unwrap_or("--:--"),
                e.activity,
                e.label
            ));
        }
        for r in &outcome.rejected {
            warning(format!(
                "rejected {} - {} {}: {}",
                r.draft.start_time.as_deref().unwrap_or("?"),
                r.draft.end_time.as_deref().unwrap_or("?"),
                r.draft.activity.as_deref().unwrap_or(""),
                r.reason
            ));
        }

        info(format!(
            "{} entr(ies) recovered, {} rejected.",
            stored.len(),
            outcome.rejected.len()
        ));
    }
    Ok(())
}
