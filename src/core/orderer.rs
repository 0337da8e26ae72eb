//! Deterministic orderer: every level sorted by `created`, ties by id.

use crate::models::consolidated::ConsolidatedContext;
use std::cmp::Ordering;

pub fn sibling_order(a: &ConsolidatedContext, b: &ConsolidatedContext) -> Ordering {
    a.created
        .cmp(&b.created)
        .then_with(|| a.context_id.cmp(&b.context_id))
}

/// Sort the given level and, recursively, every level below it.
pub fn order_forest(level: &mut [ConsolidatedContext]) {
    level.sort_by(sibling_order);
    for ctx in level.iter_mut() {
        order_forest(&mut ctx.sub_contexts);
    }
}
