use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampField {
    Created,
    Completed,
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampField::Created => f.write_str("created"),
            TimestampField::Completed => f.write_str("completed"),
        }
    }
}

/// Non-fatal problem found while consolidating.
/// The batch always continues; callers decide whether any of these is fatal.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("context '{context_id}': malformed {field} timestamp '{value}', record excluded")]
    #[serde(rename_all = "camelCase")]
    MalformedTimestamp {
        context_id: String,
        field: TimestampField,
        value: String,
    },

    #[error("context '{context_id}': notes are not a JSON array of strings ({reason}), notes excluded")]
    #[serde(rename_all = "camelCase")]
    MalformedNotes { context_id: String, reason: String },

    #[error("'{context}': cannot add {dropped} {found} to a total in {expected}, value left out")]
    #[serde(rename_all = "camelCase")]
    UnitMismatch {
        context: String,
        expected: String,
        found: String,
        dropped: f64,
    },
}

impl Diagnostic {
    pub fn context_id(&self) -> &str {
        match self {
            Diagnostic::MalformedTimestamp { context_id, .. } => context_id,
            Diagnostic::MalformedNotes { context_id, .. } => context_id,
            Diagnostic::UnitMismatch { context, .. } => context,
        }
    }
}
