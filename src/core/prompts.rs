//! Prompt payloads for a chat-completion model and validation of its answers.
//!
//! Nothing here talks to the network: the caller ships the payload to the
//! model of its choice and hands the raw answer back.

use crate::core::calculator::gaps::Gap;
use crate::errors::AppResult;
use crate::models::label::{Label, find_by_name};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::{MINUTES_PER_DAY, minutes_to_time, sanitize_time, time_to_minutes};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Placeholder used when the model does not return an activity.
pub const UNPARSED_ACTIVITY: &str = "Error Parsing";

/// Fallback time when the model omits one.
const MIDNIGHT: &str = "12:00 AM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    pub messages: Vec<ChatMessage>,
}

impl ChatPayload {
    fn new(system: String, user: Option<&str>) -> Self {
        let mut messages = vec![ChatMessage {
            role: "system".into(),
            content: system,
        }];
        if let Some(u) = user.filter(|u| !u.trim().is_empty()) {
            messages.push(ChatMessage {
                role: "user".into(),
                content: u.trim().to_string(),
            });
        }
        Self { messages }
    }

    pub fn system_text(&self) -> &str {
        &self.messages[0].content
    }
}

/// Entry fields as the model spells them. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDraft {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// A validated suggestion, ready to become a [`TimeEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDraft {
    pub start_time: String,
    pub end_time: String,
    pub activity: String,
    pub label: String,
}

impl EntryDraft {
    pub fn into_entry(self, date: NaiveDate) -> TimeEntry {
        TimeEntry::new(
            date,
            self.start_time,
            Some(self.end_time),
            &self.activity,
            &self.label,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedDraft {
    pub draft: RawDraft,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryOutcome {
    pub accepted: Vec<EntryDraft>,
    pub rejected: Vec<RejectedDraft>,
}

/// `"Name"` or `"Child" (subcategory of "Parent")`, comma separated.
fn describe_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|l| match l.parent(labels) {
            Some(p) => format!("\"{}\" (subcategory of \"{}\")", l.name, p.name),
            None => format!("\"{}\"", l.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Models like to wrap JSON in a markdown fence.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn known_label(labels: &[Label], raw: Option<&str>, default_label: &str) -> String {
    raw.and_then(|name| find_by_name(labels, name))
        .map(|l| l.name.clone())
        .unwrap_or_else(|| default_label.to_string())
}

/// Payload asking the model to turn one free-text line into an entry.
pub fn entry_prompt(
    text: &str,
    labels: &[Label],
    about_me: Option<&str>,
    now: NaiveDateTime,
) -> ChatPayload {
    let current = minutes_to_time(now.hour() * 60 + now.minute());
    let context = match about_me.map(str::trim) {
        Some(a) if !a.is_empty() => format!("User context: {a}\n\n"),
        _ => String::new(),
    };

    let system = format!(
        "{context}Extract the start time, end time and activity from this text: \"{text}\".\n\
         Match it to one of these categories: [{labels}].\n\
         \n\
         When a subcategory fits, always pick it over its parent category.\n\
         \n\
         Times:\n\
         - \"now\" means {current}.\n\
         - \"in X minutes/hours\" is X after {current}.\n\
         - \"later\" is one hour after {current}.\n\
         - \"this afternoon\" is 03:00 PM, \"tonight\" is 08:00 PM.\n\
         - Always answer with a clock time in \"HH:MM AM/PM\" format, never an expression.\n\
         \n\
         Return JSON only, in this format:\n\
         {{\"startTime\": \"HH:MM AM/PM\", \"endTime\": \"HH:MM AM/PM\", \"activity\": \"description\", \"label\": \"category\"}}",
        text = text.trim(),
        labels = describe_labels(labels),
    );

    ChatPayload::new(system, None)
}

/// Turn the model's answer to [`entry_prompt`] into a draft.
///
/// Missing times become midnight, a missing activity becomes
/// [`UNPARSED_ACTIVITY`], a label outside the taxonomy becomes
/// `default_label`. Only unparsable JSON is an error.
pub fn parse_entry_response(raw: &str, labels: &[Label], default_label: &str) -> AppResult<EntryDraft> {
    let draft: RawDraft = serde_json::from_str(strip_code_fence(raw))?;

    let time_or_midnight = |t: &Option<String>| {
        t.as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(sanitize_time)
            .unwrap_or_else(|| MIDNIGHT.to_string())
    };

    Ok(EntryDraft {
        start_time: time_or_midnight(&draft.start_time),
        end_time: time_or_midnight(&draft.end_time),
        activity: draft
            .activity
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(UNPARSED_ACTIVITY)
            .to_string(),
        label: known_label(labels, draft.label.as_deref(), default_label),
    })
}

/// `"09:00 AM–10:30 AM"` for every gap, comma separated.
pub fn gap_windows(gaps: &[Gap]) -> String {
    gaps.iter()
        .map(|g| {
            format!(
                "{}–{}",
                g.start.format("%I:%M %p"),
                g.end.format("%I:%M %p")
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Payload asking the model to fill the gaps of a day from the user's
/// recollection.
pub fn recovery_prompt(gaps: &[Gap], labels: &[Label], user_text: Option<&str>) -> ChatPayload {
    let names = labels
        .iter()
        .map(|l| format!("\"{}\"", l.name))
        .collect::<Vec<_>>()
        .join(", ");

    let system = format!(
        "You convert a description of how the user spent their time into a JSON array \
         of timeline blocks. Each block has: startTime, endTime, activity, label. \
         Times use the \"HH:MM AM/PM\" format and every block must lie completely inside \
         one of the missing windows [{}]. Allowed labels: [{}]. Split sequential \
         activities inside one window into separate blocks. Output ONLY valid JSON.",
        gap_windows(gaps),
        names
    );

    ChatPayload::new(system, user_text)
}

fn check_recovery_draft(
    draft: &RawDraft,
    gaps: &[Gap],
    labels: &[Label],
    default_label: &str,
) -> Result<EntryDraft, String> {
    let start = draft
        .start_time
        .as_deref()
        .map(sanitize_time)
        .ok_or("missing startTime")?;
    let end = draft
        .end_time
        .as_deref()
        .map(sanitize_time)
        .ok_or("missing endTime")?;

    let start_min = time_to_minutes(&start).ok_or_else(|| format!("invalid startTime {:?}", draft.start_time))?;
    let mut end_min = time_to_minutes(&end).ok_or_else(|| format!("invalid endTime {:?}", draft.end_time))?;

    // A gap closing at midnight is offered as "... 12:00 AM".
    if end_min == 0 && start_min > 0 {
        end_min = MINUTES_PER_DAY;
    }

    if start_min >= end_min {
        return Err(format!("{start} is not before {end}"));
    }
    if !gaps.iter().any(|g| g.contains(start_min, end_min)) {
        return Err(format!("{start}–{end} is outside every gap"));
    }

    Ok(EntryDraft {
        start_time: start,
        end_time: end,
        activity: draft
            .activity
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(UNPARSED_ACTIVITY)
            .to_string(),
        label: known_label(labels, draft.label.as_deref(), default_label),
    })
}

/// Validate the model's answer to [`recovery_prompt`].
///
/// A JSON value that is not an array yields nothing; each element is
/// accepted or rejected on its own.
pub fn parse_recovery_response(
    raw: &str,
    gaps: &[Gap],
    labels: &[Label],
    default_label: &str,
) -> AppResult<RecoveryOutcome> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(raw))?;

    let serde_json::Value::Array(items) = value else {
        log::warn!("recovery answer is not a JSON array, ignoring it");
        return Ok(RecoveryOutcome::default());
    };

    let mut outcome = RecoveryOutcome::default();
    for item in items {
        let draft: RawDraft = match serde_json::from_value(item) {
            Ok(d) => d,
            Err(e) => {
                outcome.rejected.push(RejectedDraft {
                    draft: RawDraft::default(),
                    reason: format!("not an entry object: {e}"),
                });
                continue;
            }
        };

        match check_recovery_draft(&draft, gaps, labels, default_label) {
            Ok(ok) => outcome.accepted.push(ok),
            Err(reason) => outcome.rejected.push(RejectedDraft { draft, reason }),
        }
    }

    Ok(outcome)
}
