//! Identity grouper: partitions raw records into logical tasks.

use crate::models::identity::LogicalIdentity;
use crate::models::raw_context::RawContext;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Decides which raw records are observations of the same task.
///
/// Merge and assembly only ever see the identity this returns, so a
/// stronger scheme (an explicit "resumed-from" link, say) can replace
/// the name/parent heuristic without touching them.
pub trait IdentityPolicy {
    fn identify(&self, record: &RawContext) -> LogicalIdentity;
}

/// Exact string equality on (`name`, `parentId`).
///
/// Unrelated tasks that share a name and parent get merged. That is a known
/// limit of the heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameAndParent;

impl IdentityPolicy for NameAndParent {
    fn identify(&self, record: &RawContext) -> LogicalIdentity {
        LogicalIdentity::of(record)
    }
}

/// Logical groups, each ordered by `created` ascending.
pub type Groups<'a> = BTreeMap<LogicalIdentity, Vec<&'a RawContext>>;

/// Group every record under its identity. No record is dropped.
pub fn group_records<'a, P>(records: &'a [RawContext], policy: &P) -> Groups<'a>
where
    P: IdentityPolicy + ?Sized,
{
    let mut groups: Groups<'a> = BTreeMap::new();

    for record in records {
        groups.entry(policy.identify(record)).or_default().push(record);
    }

    for members in groups.values_mut() {
        members.sort_by(|a, b| creation_order(a, b));
    }

    log::debug!(
        "grouped {} raw record(s) into {} logical group(s)",
        records.len(),
        groups.len()
    );

    groups
}

/// Total order on raw records: parsed `created`, then id, then the remaining
/// fields. Records whose `created` does not parse sort last, by raw string.
pub fn creation_order(a: &RawContext, b: &RawContext) -> Ordering {
    created_key(a)
        .cmp(&created_key(b))
        .then_with(|| a.created.cmp(&b.created))
        .then_with(|| a.context_id.cmp(&b.context_id))
        .then_with(|| a.completed.cmp(&b.completed))
        .then_with(|| notes_text(a).cmp(notes_text(b)))
}

fn created_key(record: &RawContext) -> (bool, Option<DateTime<Utc>>) {
    let parsed = parse_timestamp(&record.created);
    (parsed.is_none(), parsed)
}

fn notes_text(record: &RawContext) -> &str {
    record.notes.as_deref().map(|raw| raw.get()).unwrap_or("")
}
