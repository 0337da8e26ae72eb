use crate::core::assembler::{Arena, index_by_id};
use crate::core::grouper::{IdentityPolicy, NameAndParent, group_records};
use crate::core::merger::merge_group;
use crate::core::orderer::order_forest;
use crate::errors::{AppError, AppResult};
use crate::models::consolidated::ConsolidatedContext;
use crate::models::diagnostic::Diagnostic;
use crate::models::raw_context::RawContext;
use crate::models::time_spent::TimeUnit;
use crate::utils::time::now_utc;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Parameters shared by every stage of one consolidation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Evaluation instant: the end of every open span.
    pub now: DateTime<Utc>,
    pub unit: TimeUnit,
    pub precision: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            now: now_utc(),
            unit: TimeUnit::Minute,
            precision: 2,
        }
    }
}

/// A (possibly partial) consolidated forest plus everything that was
/// left out of it along the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Consolidation {
    pub contexts: Vec<ConsolidatedContext>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Consolidation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Every node of the forest, pre-order.
    pub fn iter_all(&self) -> impl Iterator<Item = &ConsolidatedContext> {
        self.contexts
            .iter()
            .flat_map(|root| root.walk().into_iter().map(|(_, c)| c))
    }

    pub fn total_notes(&self) -> usize {
        self.iter_all().map(|c| c.notes.len()).sum()
    }

    /// Fail on any diagnostic.
    pub fn into_strict(self) -> AppResult<Self> {
        if self.diagnostics.is_empty() {
            Ok(self)
        } else {
            Err(AppError::Strict(self.diagnostics.len()))
        }
    }
}

/// Pipeline: group → merge → assemble → order.
///
/// Stateless across calls; every intermediate map is local to one
/// `consolidate` call.
#[derive(Debug, Clone)]
pub struct Consolidator<P = NameAndParent> {
    policy: P,
    settings: Settings,
}

impl Default for Consolidator<NameAndParent> {
    fn default() -> Self {
        Self::new()
    }
}

impl Consolidator<NameAndParent> {
    pub fn new() -> Self {
        Self {
            policy: NameAndParent,
            settings: Settings::default(),
        }
    }
}

impl<P: IdentityPolicy> Consolidator<P> {
    pub fn with_policy<Q: IdentityPolicy>(self, policy: Q) -> Consolidator<Q> {
        Consolidator {
            policy,
            settings: self.settings,
        }
    }

    /// Fix the evaluation instant used for open spans.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.settings.now = now;
        self
    }

    pub fn unit(mut self, unit: TimeUnit) -> Self {
        self.settings.unit = unit;
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.settings.precision = precision;
        self
    }

    pub fn consolidate(&self, records: &[RawContext]) -> Consolidation {
        let mut diagnostics = Vec::new();

        let groups = group_records(records, &self.policy);
        let merged: Vec<_> = groups
            .iter()
            .filter_map(|(identity, members)| {
                merge_group(identity, members, &self.settings, &mut diagnostics)
            })
            .collect();

        let lookup = index_by_id(records);
        let arena = Arena::build(merged, &lookup, &self.policy);
        let mut contexts = arena.into_forest(self.settings.precision, &mut diagnostics);
        order_forest(&mut contexts);

        log::debug!(
            "consolidated {} raw record(s) into {} root context(s), {} diagnostic(s)",
            records.len(),
            contexts.len(),
            diagnostics.len()
        );

        Consolidation {
            contexts,
            diagnostics,
        }
    }
}

/// Consolidate with the default identity policy, evaluating open spans now.
pub fn consolidate(records: &[RawContext]) -> Consolidation {
    Consolidator::new().consolidate(records)
}
