//! Scoping of the raw record source: owner and creation window.

use crate::errors::AppResult;
use crate::models::raw_context::RawContext;
use crate::utils::time::{parse_optional_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub owner: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl RecordFilter {
    /// Build from command-line values; bounds must be valid timestamps.
    pub fn from_args(
        owner: &Option<String>,
        since: &Option<String>,
        until: &Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            owner: owner.clone(),
            since: parse_optional_timestamp(since.as_ref())?,
            until: parse_optional_timestamp(until.as_ref())?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.since.is_none() && self.until.is_none()
    }

    /// Records with an unparseable `created` are kept so the merger can
    /// report them.
    pub fn accepts(&self, record: &RawContext) -> bool {
        if let Some(owner) = &self.owner
            && record.user_id != *owner
        {
            return false;
        }

        let Some(created) = parse_timestamp(&record.created) else {
            return true;
        };
        if self.since.is_some_and(|since| created < since) {
            return false;
        }
        if self.until.is_some_and(|until| created > until) {
            return false;
        }
        true
    }

    pub fn apply(&self, records: Vec<RawContext>) -> Vec<RawContext> {
        if self.is_empty() {
            return records;
        }
        let before = records.len();
        let kept: Vec<RawContext> = records.into_iter().filter(|r| self.accepts(r)).collect();
        log::debug!("filter kept {} of {} raw record(s)", kept.len(), before);
        kept
    }
}
