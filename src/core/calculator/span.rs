//! Time span calculator: elapsed time between two service timestamps.
//!
//! An empty `completed` means the span is still open and ends at the
//! evaluation instant, so results for open spans change over time.

use crate::models::diagnostic::{Diagnostic, TimestampField};
use crate::models::time_spent::{TimeSpent, TimeUnit};
use crate::utils::time::{parse_timestamp, round_to};
use chrono::{DateTime, Utc};

/// Parsed bounds of one raw span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl Span {
    /// Parse `created`/`completed`; `context_id` only labels the diagnostic.
    pub fn parse(context_id: &str, created: &str, completed: &str) -> Result<Self, Diagnostic> {
        let start = parse_timestamp(created).ok_or_else(|| Diagnostic::MalformedTimestamp {
            context_id: context_id.to_string(),
            field: TimestampField::Created,
            value: created.to_string(),
        })?;

        let end = if completed.is_empty() {
            None
        } else {
            Some(
                parse_timestamp(completed).ok_or_else(|| Diagnostic::MalformedTimestamp {
                    context_id: context_id.to_string(),
                    field: TimestampField::Completed,
                    value: completed.to_string(),
                })?,
            )
        };

        Ok(Span { start, end })
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed time, rounded to `precision` decimals.
    pub fn elapsed(&self, now: DateTime<Utc>, unit: TimeUnit, precision: u32) -> TimeSpent {
        let end = self.end.unwrap_or(now);
        let seconds = (end - self.start).num_seconds() as f64;
        TimeSpent::new(round_to(unit.from_seconds(seconds), precision), unit.as_str())
    }
}

/// Elapsed minutes between `created` and `completed` (or `now` when open),
/// rounded to two decimals.
pub fn time_diff(
    context_id: &str,
    created: &str,
    completed: &str,
    now: DateTime<Utc>,
) -> Result<TimeSpent, Diagnostic> {
    Span::parse(context_id, created, completed).map(|span| span.elapsed(now, TimeUnit::Minute, 2))
}
