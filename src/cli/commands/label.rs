use crate::cli::parser::{Commands, LabelAction};
use crate::config::Config;
use crate::core::labels::{LabelLogic, check_consistency, tree};
use crate::db::labels::load_labels;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::swatch;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Label { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        LabelAction::Add {
            name,
            color,
            parent,
        } => {
            let label =
                LabelLogic::add(&mut pool, name, color.as_deref(), parent.as_deref())?;
            success(format!("Label '{}' created ({}).", label.name, label.color));
        }
        LabelAction::List => {
            let labels = load_labels(&pool.conn)?;
            if labels.is_empty() {
                info("No labels defined yet.");
                return Ok(());
            }
            header("Labels");
            for (root, children) in tree(&labels) {
                println!("{} {}", swatch(&root.color), root.name);
                for child in children {
                    println!("   └ {} {}", swatch(&child.color), child.display_name(&labels));
                }
            }
        }
        LabelAction::Edit {
            name,
            rename,
            color,
        } => {
            let label =
                LabelLogic::update(&mut pool, name, rename.as_deref(), color.as_deref())?;
            success(format!("Label '{}' updated ({}).", label.name, label.color));
        }
        LabelAction::Del { name } => {
            let label = LabelLogic::remove(&mut pool, name)?;
            success(format!("Label '{}' deleted.", label.name));
        }
        LabelAction::Check => {
            let labels = load_labels(&pool.conn)?;
            let issues = check_consistency(&labels);
            if issues.is_empty() {
                success("Labels are consistent.");
            } else {
                for issue in &issues {
                    warning(issue);
                }
                info(format!("{} issue(s) found.", issues.len()));
            }
        }
    }

    Ok(())
}
