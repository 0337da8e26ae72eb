use crate::errors::AppError;
use crate::utils::time::round_to;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a span is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    #[default]
    Minute,
    Hour,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
        }
    }

    /// Convert a number of seconds into this unit.
    pub fn from_seconds(&self, seconds: f64) -> f64 {
        match self {
            TimeUnit::Second => seconds,
            TimeUnit::Minute => seconds / 60.0,
            TimeUnit::Hour => seconds / 3600.0,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second" | "seconds" | "s" => Ok(TimeUnit::Second),
            "minute" | "minutes" | "m" => Ok(TimeUnit::Minute),
            "hour" | "hours" | "h" => Ok(TimeUnit::Hour),
            other => Err(AppError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A duration value plus its unit label, as carried on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpent {
    pub time: f64,
    pub unit: String,
}

/// Returned when two spans with different unit labels are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitMismatch {
    pub expected: String,
    pub found: String,
    pub dropped: f64,
}

impl TimeSpent {
    pub fn new(time: f64, unit: impl Into<String>) -> Self {
        Self {
            time,
            unit: unit.into(),
        }
    }

    pub fn zero(unit: TimeUnit) -> Self {
        Self::new(0.0, unit.as_str())
    }

    /// Add `other` in place when units agree; otherwise leave `self`
    /// untouched and report what was left out.
    pub fn try_add(&mut self, other: &TimeSpent) -> Result<(), UnitMismatch> {
        if self.unit != other.unit {
            return Err(UnitMismatch {
                expected: self.unit.clone(),
                found: other.unit.clone(),
                dropped: other.time,
            });
        }
        self.time += other.time;
        Ok(())
    }

    pub fn round(&mut self, precision: u32) {
        self.time = round_to(self.time, precision);
    }
}

impl fmt::Display for TimeSpent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.unit)
    }
}
