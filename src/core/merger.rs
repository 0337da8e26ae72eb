//! Span & note merger: folds one logical group into a single record.

use crate::core::calculator::span::Span;
use crate::core::logic::Settings;
use crate::models::diagnostic::Diagnostic;
use crate::models::identity::LogicalIdentity;
use crate::models::raw_context::RawContext;
use crate::models::time_spent::TimeSpent;
use chrono::{DateTime, Utc};

/// A consolidated group that has not been placed into the tree yet.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedGroup {
    pub identity: LogicalIdentity,
    /// Id of the earliest contributing member.
    pub context_id: String,
    pub merged_ids: Vec<String>,
    pub user_id: String,
    pub notes: Vec<String>,
    pub created: DateTime<Utc>,
    pub completed: Option<DateTime<Utc>>,
    /// Own elapsed time, descendants not included.
    pub time_spent: TimeSpent,
}

/// Merge the members of one group (already in creation order).
///
/// Members with a malformed timestamp contribute nothing. Members with a
/// malformed notes payload still contribute their span. Returns `None`
/// when no member could be used.
pub fn merge_group(
    identity: &LogicalIdentity,
    members: &[&RawContext],
    settings: &Settings,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<MergedGroup> {
    let mut merged: Option<MergedGroup> = None;
    let mut any_open = false;
    let mut spans = Vec::with_capacity(members.len());

    for member in members {
        let span = match Span::parse(&member.context_id, &member.created, &member.completed) {
            Ok(span) => span,
            Err(diag) => {
                log::debug!("{diag}");
                diagnostics.push(diag);
                continue;
            }
        };

        let notes = member.parse_notes().unwrap_or_else(|err| {
            let diag = Diagnostic::MalformedNotes {
                context_id: member.context_id.clone(),
                reason: err.to_string(),
            };
            log::debug!("{diag}");
            diagnostics.push(diag);
            Vec::new()
        });

        any_open |= span.is_open();
        let elapsed = span.elapsed(settings.now, settings.unit, settings.precision);
        log::trace!("{} [{}]: {}", identity, member.context_id, elapsed);
        spans.push(elapsed);

        match merged.as_mut() {
            None => {
                merged = Some(MergedGroup {
                    identity: identity.clone(),
                    context_id: member.context_id.clone(),
                    merged_ids: vec![member.context_id.clone()],
                    user_id: member.user_id.clone(),
                    notes,
                    created: span.start,
                    completed: span.end,
                    time_spent: TimeSpent::zero(settings.unit),
                });
            }
            Some(group) => {
                group.merged_ids.push(member.context_id.clone());
                group.notes.extend(notes);
                if span.start < group.created {
                    group.created = span.start;
                    group.context_id = member.context_id.clone();
                }
                group.completed = match (group.completed, span.end) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    (a, b) => a.or(b),
                };
            }
        }
    }

    let mut group = merged?;
    if any_open {
        group.completed = None;
    }
    group.time_spent = sum_spans(&identity.to_string(), &spans, settings, diagnostics);
    Some(group)
}

/// Add up member spans, rounding once at the end.
///
/// The running total takes the unit of the first span. A span whose unit
/// differs is left out and reported as `UnitMismatch`.
pub fn sum_spans(
    label: &str,
    spans: &[TimeSpent],
    settings: &Settings,
    diagnostics: &mut Vec<Diagnostic>,
) -> TimeSpent {
    let mut iter = spans.iter();
    let Some(first) = iter.next() else {
        return TimeSpent::zero(settings.unit);
    };

    let mut total = first.clone();
    for span in iter {
        if let Err(mismatch) = total.try_add(span) {
            let diag = Diagnostic::UnitMismatch {
                context: label.to_string(),
                expected: mismatch.expected,
                found: mismatch.found,
                dropped: mismatch.dropped,
            };
            log::debug!("{diag}");
            diagnostics.push(diag);
        }
    }
    total.round(settings.precision);
    total
}
