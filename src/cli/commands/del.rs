use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        id,
        yes,
    } = cmd
    {
        let d = date::resolve_date(Some(date_str))?;

        let prompt = match id {
            Some(i) => format!("Delete entry #{} of {}? This action is irreversible.", i, d),
            None => format!("Delete ALL entries of {}? This action is irreversible.", d),
        };

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let n = DeleteLogic::apply(&mut pool, d, *id)?;

        match id {
            Some(i) => success(format!("Entry #{} of {} has been deleted.", i, d)),
            None => success(format!("{} entries of {} have been deleted.", n, d)),
        }
    }

    Ok(())
}
