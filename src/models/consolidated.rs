use super::time_spent::TimeSpent;
use crate::utils::time::sk_format;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merged, de-duplicated representation of a task, placed in the output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedContext {
    pub name: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    /// Id of the earliest member record.
    pub context_id: String,
    /// Ids of every member record, in member order.
    #[serde(default)]
    pub merged_ids: Vec<String>,
    #[serde(with = "sk_format")]
    pub created: DateTime<Utc>,
    /// `None` while any member span is still open.
    #[serde(
        default,
        with = "sk_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed: Option<DateTime<Utc>>,
    /// Own elapsed time plus every descendant's.
    pub time_spent: TimeSpent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_contexts: Vec<ConsolidatedContext>,
}

impl ConsolidatedContext {
    pub fn is_open(&self) -> bool {
        self.completed.is_none()
    }

    /// Number of nodes in this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self.sub_contexts.iter().map(|c| c.count()).sum::<usize>()
    }

    /// Depth-first (pre-order) walk, yielding each node with its depth.
    pub fn walk(&self) -> Vec<(usize, &ConsolidatedContext)> {
        let mut out = Vec::new();
        let mut stack = vec![(0usize, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.sub_contexts.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}
