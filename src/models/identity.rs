use super::raw_context::RawContext;
use serde::Serialize;
use std::fmt;

/// Grouping key: raw records sharing it are treated as one task.
///
/// Ordering is derived so maps keyed by identity iterate reproducibly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalIdentity {
    pub name: String,
    pub parent_id: String,
}

impl LogicalIdentity {
    pub fn new(name: &str, parent_id: &str) -> Self {
        Self {
            name: name.to_string(),
            parent_id: parent_id.to_string(),
        }
    }

    pub fn of(record: &RawContext) -> Self {
        Self::new(&record.name, &record.parent_id)
    }
}

impl fmt::Display for LogicalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parent_id)
    }
}
