use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL_COLOR: &str = "#000000";

/// User-defined category, nested at most one level (`parent_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub parent_id: Option<i64>,
}

impl Label {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Case- and whitespace-insensitive key used for comparisons.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn parent<'a>(&self, all: &'a [Label]) -> Option<&'a Label> {
        let pid = self.parent_id?;
        all.iter().find(|l| l.id == pid)
    }

    /// "Parent | Child" for sub-labels, the bare name otherwise.
    pub fn display_name(&self, all: &[Label]) -> String {
        match self.parent(all) {
            Some(p) => format!("{} | {}", p.name, self.name),
            None => self.name.clone(),
        }
    }
}

/// Look a label up by name, ignoring case.
pub fn find_by_name<'a>(labels: &'a [Label], name: &str) -> Option<&'a Label> {
    let key = name.trim().to_lowercase();
    labels.iter().find(|l| l.key() == key)
}
