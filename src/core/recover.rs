use crate::config::Config;
use crate::core::calculator::gaps::find_gaps;
use crate::core::prompts::{RecoveryOutcome, parse_recovery_response};
use crate::db::labels::load_labels;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_entries_by_date};
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use chrono::{NaiveDate, NaiveDateTime};

pub struct RecoverLogic;

impl RecoverLogic {
    /// Validate a recovery answer against the current gaps of `date` and
    /// store the accepted drafts.
    ///
    /// Returns the stored entries and the full validation outcome.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        raw_response: &str,
        now: NaiveDateTime,
    ) -> AppResult<(Vec<TimeEntry>, RecoveryOutcome)> {
        let entries = load_entries_by_date(&pool.conn, &date)?;
        let gaps = find_gaps(&entries, date, now, cfg.min_gap_minutes);
        let labels = load_labels(&pool.conn)?;

        let outcome = parse_recovery_response(raw_response, &gaps, &labels, &cfg.default_label)?;

        let tx = pool.conn.transaction()?;
        let mut stored = Vec::with_capacity(outcome.accepted.len());
        for draft in &outcome.accepted {
            let mut entry = draft.clone().into_entry(date);
            entry.id = insert_entry(&tx, &entry)?;
            stored.push(entry);
        }
        tx.commit()?;

        ttlog_or_warn(
            &pool.conn,
            "recover",
            &date.format("%Y-%m-%d").to_string(),
            &format!(
                "{} accepted, {} rejected",
                outcome.accepted.len(),
                outcome.rejected.len()
            ),
        );

        Ok((stored, outcome))
    }
}
