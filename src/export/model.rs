// src/export/model.rs

use crate::models::consolidated::ConsolidatedContext;
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// Flat row for tabular exports; `depth`/`path` keep the tree shape.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContextRow {
    pub depth: usize,
    pub path: String,
    pub context_id: String,
    pub name: String,
    pub created: String,
    pub completed: String,
    pub time: f64,
    pub unit: String,
    pub notes: String,
    pub merged_ids: String,
}

/// Pre-order rows for a whole forest.
pub(crate) fn forest_to_rows(forest: &[ConsolidatedContext]) -> Vec<ContextRow> {
    let mut rows = Vec::new();
    for root in forest {
        push_rows(root, 0, "", &mut rows);
    }
    rows
}

fn push_rows(ctx: &ConsolidatedContext, depth: usize, prefix: &str, rows: &mut Vec<ContextRow>) {
    let path = if prefix.is_empty() {
        ctx.name.clone()
    } else {
        format!("{prefix}/{}", ctx.name)
    };

    rows.push(ContextRow {
        depth,
        path: path.clone(),
        context_id: ctx.context_id.clone(),
        name: ctx.name.clone(),
        created: format_timestamp(&ctx.created),
        completed: ctx.completed.as_ref().map(format_timestamp).unwrap_or_default(),
        time: ctx.time_spent.time,
        unit: ctx.time_spent.unit.clone(),
        notes: ctx.notes.join(" | "),
        merged_ids: ctx.merged_ids.join(";"),
    });

    for child in &ctx.sub_contexts {
        push_rows(child, depth + 1, &path, rows);
    }
}
