//! Tree assembler: nests merged groups under their resolved parents.
//!
//! Groups live in an arena indexed by position; the parent graph comes from
//! user-supplied ids, so it may contain self references and cycles. Both
//! are cut by promoting a node to root.

use crate::core::grouper::{IdentityPolicy, creation_order};
use crate::core::merger::MergedGroup;
use crate::models::consolidated::ConsolidatedContext;
use crate::models::diagnostic::Diagnostic;
use crate::models::identity::LogicalIdentity;
use crate::models::raw_context::RawContext;
use crate::models::time_spent::TimeSpent;
use std::collections::{BTreeMap, HashMap};

/// Raw records by id. On duplicate ids the earliest record wins.
pub fn index_by_id(records: &[RawContext]) -> HashMap<&str, &RawContext> {
    let mut sorted: Vec<&RawContext> = records.iter().collect();
    sorted.sort_by(|a, b| creation_order(a, b));

    let mut lookup: HashMap<&str, &RawContext> = HashMap::with_capacity(sorted.len());
    for record in sorted {
        if lookup.contains_key(record.context_id.as_str()) {
            log::warn!(
                "duplicate raw context id '{}', keeping the earliest record",
                record.context_id
            );
            continue;
        }
        lookup.insert(record.context_id.as_str(), record);
    }
    lookup
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    OnPath,
    Done,
}

/// Merged groups arranged as a forest.
#[derive(Debug)]
pub struct Arena {
    groups: Vec<MergedGroup>,
    parents: Vec<Option<usize>>,
}

impl Arena {
    /// Place groups in creation order and resolve every parent link.
    pub fn build<P>(
        mut groups: Vec<MergedGroup>,
        lookup: &HashMap<&str, &RawContext>,
        policy: &P,
    ) -> Self
    where
        P: IdentityPolicy + ?Sized,
    {
        groups.sort_by(|a, b| {
            a.created
                .cmp(&b.created)
                .then_with(|| a.context_id.cmp(&b.context_id))
        });

        let index: BTreeMap<&LogicalIdentity, usize> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (&g.identity, i))
            .collect();

        let parents = groups
            .iter()
            .enumerate()
            .map(|(i, g)| resolve_parent(i, g, &index, lookup, policy))
            .collect();

        let mut arena = Arena { groups, parents };
        arena.break_cycles();
        arena
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn roots(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.parents[i].is_none()).collect()
    }

    /// Follow parent links from each node in creation order; when a walk
    /// reaches a node already on its own path, that node becomes a root.
    fn break_cycles(&mut self) {
        let mut state = vec![Visit::Pending; self.len()];

        for start in 0..self.len() {
            if state[start] == Visit::Done {
                continue;
            }

            let mut path = Vec::new();
            let mut cursor = Some(start);
            while let Some(node) = cursor {
                match state[node] {
                    Visit::Done => break,
                    Visit::OnPath => {
                        log::warn!(
                            "parent cycle through '{}', promoting it to root",
                            self.groups[node].identity
                        );
                        self.parents[node] = None;
                        break;
                    }
                    Visit::Pending => {
                        state[node] = Visit::OnPath;
                        path.push(node);
                        cursor = self.parents[node];
                    }
                }
            }

            for node in path {
                state[node] = Visit::Done;
            }
        }
    }

    /// Own time plus the own time of every descendant, per node.
    ///
    /// Each group pushes its own total up its ancestor chain once; totals are
    /// rounded after every addition and unit mismatches are reported.
    fn aggregate(&self, precision: u32, diagnostics: &mut Vec<Diagnostic>) -> Vec<TimeSpent> {
        let mut totals: Vec<TimeSpent> =
            self.groups.iter().map(|g| g.time_spent.clone()).collect();

        for (i, group) in self.groups.iter().enumerate() {
            let mut ancestor = self.parents[i];
            while let Some(a) = ancestor {
                if let Err(mismatch) = totals[a].try_add(&group.time_spent) {
                    let diag = Diagnostic::UnitMismatch {
                        context: self.groups[a].identity.to_string(),
                        expected: mismatch.expected,
                        found: mismatch.found,
                        dropped: mismatch.dropped,
                    };
                    log::debug!("{diag}");
                    diagnostics.push(diag);
                }
                totals[a].round(precision);
                ancestor = self.parents[a];
            }
        }

        totals
    }

    /// Consume the arena into nested contexts. Sibling order is left to the
    /// orderer.
    pub fn into_forest(
        self,
        precision: u32,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<ConsolidatedContext> {
        let totals = self.aggregate(precision, diagnostics);

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); self.len()];
        for (i, parent) in self.parents.iter().enumerate() {
            if let Some(p) = parent {
                children[*p].push(i);
            }
        }
        let roots = self.roots();

        let mut slots: Vec<Option<ConsolidatedContext>> = self
            .groups
            .into_iter()
            .zip(totals)
            .map(|(g, total)| {
                Some(ConsolidatedContext {
                    name: g.identity.name,
                    notes: g.notes,
                    user_id: g.user_id,
                    context_id: g.context_id,
                    merged_ids: g.merged_ids,
                    created: g.created,
                    completed: g.completed,
                    time_spent: total,
                    sub_contexts: Vec::new(),
                })
            })
            .collect();

        roots
            .into_iter()
            .filter_map(|r| take_subtree(r, &mut slots, &children))
            .collect()
    }
}

fn take_subtree(
    node: usize,
    slots: &mut [Option<ConsolidatedContext>],
    children: &[Vec<usize>],
) -> Option<ConsolidatedContext> {
    let mut ctx = slots[node].take()?;
    ctx.sub_contexts = children[node]
        .iter()
        .filter_map(|&c| take_subtree(c, slots, children))
        .collect();
    Some(ctx)
}

fn resolve_parent<P>(
    i: usize,
    group: &MergedGroup,
    index: &BTreeMap<&LogicalIdentity, usize>,
    lookup: &HashMap<&str, &RawContext>,
    policy: &P,
) -> Option<usize>
where
    P: IdentityPolicy + ?Sized,
{
    let parent_id = group.identity.parent_id.as_str();
    if parent_id.is_empty() {
        return None;
    }

    let Some(parent_record) = lookup.get(parent_id) else {
        log::debug!(
            "'{}': parent '{}' not in this batch, promoting to root",
            group.identity,
            parent_id
        );
        return None;
    };

    let parent_identity = policy.identify(parent_record);
    match index.get(&parent_identity) {
        Some(&p) if p == i => {
            log::warn!(
                "'{}' resolves to itself as parent, promoting to root",
                group.identity
            );
            None
        }
        Some(&p) => Some(p),
        None => {
            log::debug!(
                "'{}': parent group '{}' has no usable records, promoting to root",
                group.identity,
                parent_identity
            );
            None
        }
    }
}
