//! Label taxonomy: one level of nesting, unique names, and the consistency
//! check that reports what slipped through (older databases, manual edits).

use crate::db::labels::{delete_label, insert_label, load_labels, update_label};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::label::{DEFAULT_LABEL_COLOR, Label, find_by_name};
use crate::utils::colors::parse_hex_color;
use std::collections::BTreeMap;
use std::fmt;

/// A problem found by [`check_consistency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelIssue {
    /// Several labels share a name, ignoring case and surrounding spaces.
    Duplicate(Vec<String>),
    /// A sub-label named exactly like its parent.
    SameAsParent { child: String },
    /// A sub-label whose name contains its parent's, e.g. "Work | Work meeting".
    RepeatsParent { child: String, parent: String },
    /// A sub-label pointing to a parent that does not exist (or is nested itself).
    BrokenParent { child: String },
}

impl fmt::Display for LabelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelIssue::Duplicate(names) => {
                write!(f, "duplicate labels: {}", names.join(", "))
            }
            LabelIssue::SameAsParent { child } => {
                write!(f, "sub-label '{}' has the same name as its parent", child)
            }
            LabelIssue::RepeatsParent { child, parent } => write!(
                f,
                "sub-label '{}' repeats its parent's name '{}'",
                child, parent
            ),
            LabelIssue::BrokenParent { child } => {
                write!(f, "sub-label '{}' has no valid top-level parent", child)
            }
        }
    }
}

/// Inspect the whole taxonomy; an empty result means it is consistent.
pub fn check_consistency(labels: &[Label]) -> Vec<LabelIssue> {
    let mut issues = Vec::new();

    let mut by_key: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for l in labels {
        by_key.entry(l.key()).or_default().push(l.display_name(labels));
    }
    for names in by_key.into_values() {
        if names.len() > 1 {
            issues.push(LabelIssue::Duplicate(names));
        }
    }

    for child in labels.iter().filter(|l| !l.is_root()) {
        let parent = match child.parent(labels) {
            Some(p) if p.is_root() => p,
            _ => {
                issues.push(LabelIssue::BrokenParent {
                    child: child.name.clone(),
                });
                continue;
            }
        };

        if child.key() == parent.key() {
            issues.push(LabelIssue::SameAsParent {
                child: child.display_name(labels),
            });
        } else if child.key().contains(&parent.key()) {
            issues.push(LabelIssue::RepeatsParent {
                child: child.display_name(labels),
                parent: parent.name.clone(),
            });
        }
    }

    issues
}

/// Top-level labels, each with its sub-labels, in creation order.
pub fn tree(labels: &[Label]) -> Vec<(&Label, Vec<&Label>)> {
    labels
        .iter()
        .filter(|l| l.is_root())
        .map(|root| {
            let children = labels
                .iter()
                .filter(|l| l.parent_id == Some(root.id))
                .collect();
            (root, children)
        })
        .collect()
}

fn validate_color(color: Option<&str>) -> AppResult<String> {
    match color {
        None => Ok(DEFAULT_LABEL_COLOR.to_string()),
        Some(c) if parse_hex_color(c).is_some() => Ok(c.to_string()),
        Some(c) => Err(AppError::InvalidLabel(format!(
            "color must be #RRGGBB, got '{}'",
            c
        ))),
    }
}

fn resolve_parent<'a>(labels: &'a [Label], name: Option<&str>) -> AppResult<Option<&'a Label>> {
    let Some(name) = name else {
        return Ok(None);
    };
    let parent =
        find_by_name(labels, name).ok_or_else(|| AppError::LabelNotFound(name.to_string()))?;
    if !parent.is_root() {
        return Err(AppError::InvalidLabel(format!(
            "'{}' is already a sub-label; labels nest one level only",
            parent.name
        )));
    }
    Ok(Some(parent))
}

pub struct LabelLogic;

impl LabelLogic {
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        color: Option<&str>,
        parent: Option<&str>,
    ) -> AppResult<Label> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidLabel("name must not be empty".into()));
        }

        let labels = load_labels(&pool.conn)?;
        if let Some(existing) = find_by_name(&labels, name) {
            return Err(AppError::InvalidLabel(format!(
                "'{}' already exists",
                existing.display_name(&labels)
            )));
        }

        let color = validate_color(color)?;
        let parent_id = resolve_parent(&labels, parent)?.map(|p| p.id);

        let id = insert_label(&pool.conn, name, &color, parent_id)?;
        let label = Label {
            id,
            name: name.to_string(),
            color,
            parent_id,
        };

        let mut all = labels;
        all.push(label.clone());
        ttlog_or_warn(&pool.conn, "label_add", name, &label.display_name(&all));

        Ok(label)
    }

    /// Rename and/or recolor an existing label.
    pub fn update(
        pool: &mut DbPool,
        name: &str,
        new_name: Option<&str>,
        color: Option<&str>,
    ) -> AppResult<Label> {
        let labels = load_labels(&pool.conn)?;
        let mut label = find_by_name(&labels, name)
            .cloned()
            .ok_or_else(|| AppError::LabelNotFound(name.to_string()))?;

        if let Some(n) = new_name.map(str::trim) {
            if n.is_empty() {
                return Err(AppError::InvalidLabel("name must not be empty".into()));
            }
            if let Some(other) = find_by_name(&labels, n)
                && other.id != label.id
            {
                return Err(AppError::InvalidLabel(format!("'{}' already exists", other.name)));
            }
            label.name = n.to_string();
        }
        if color.is_some() {
            label.color = validate_color(color)?;
        }

        update_label(&pool.conn, &label)?;
        ttlog_or_warn(
            &pool.conn,
            "label_edit",
            name,
            &format!("{} {}", label.name, label.color),
        );

        Ok(label)
    }

    /// Remove a label. Labels that still have sub-labels are kept.
    pub fn remove(pool: &mut DbPool, name: &str) -> AppResult<Label> {
        let labels = load_labels(&pool.conn)?;
        let label = find_by_name(&labels, name)
            .cloned()
            .ok_or_else(|| AppError::LabelNotFound(name.to_string()))?;

        let children: Vec<&str> = labels
            .iter()
            .filter(|l| l.parent_id == Some(label.id))
            .map(|l| l.name.as_str())
            .collect();
        if !children.is_empty() {
            return Err(AppError::InvalidLabel(format!(
                "'{}' still has sub-labels: {}",
                label.name,
                children.join(", ")
            )));
        }

        delete_label(&pool.conn, label.id)?;
        ttlog_or_warn(&pool.conn, "label_del", &label.name, "Label deleted");

        Ok(label)
    }
}
