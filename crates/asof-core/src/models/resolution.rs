//! Point-in-time query and resolution types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// A single "what was true at time T?" question.
///
/// Carries nothing beyond the entity and the reference date — any other
/// information would be a leakage vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPoint {
    pub entity_id: String,
    pub as_of: NaiveDate,
}

impl QueryPoint {
    pub fn new(entity_id: impl Into<String>, as_of: NaiveDate) -> Self {
        Self {
            entity_id: entity_id.into(),
            as_of,
        }
    }
}

/// How the resolver treats a query date that falls after the most recent
/// interval's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// A gap voids resolution: the entity's state is unknown.
    Strict,
    /// Return the last known interval with the gap size, up to the
    /// configured tolerance. Recovers records the log closed a few days
    /// before the real-world successor was recorded.
    GapTolerant,
}

/// The state of an entity as of a query date.
///
/// `Unknown` is a valid value, not an error — downstream consumers must
/// distinguish "no data" from any concrete answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// An interval covers the query date.
    Active { interval: Interval },
    /// The most recent interval ended before the query date and no newer
    /// interval had started. Only produced under `GapPolicy::GapTolerant`.
    Gapped { last_known: Interval, gap_days: u32 },
    /// No interval with `start_date <= as_of` exists.
    Unknown,
}

impl Resolution {
    pub fn is_active(&self) -> bool {
        matches!(self, Resolution::Active { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Resolution::Unknown)
    }

    /// The interval backing this resolution, if any.
    pub fn interval(&self) -> Option<&Interval> {
        match self {
            Resolution::Active { interval } => Some(interval),
            Resolution::Gapped { last_known, .. } => Some(last_known),
            Resolution::Unknown => None,
        }
    }

    /// Counterparty of the backing interval (e.g. the firm an advisor is
    /// tied to as of the query date), if resolved.
    pub fn counterparty(&self) -> Option<&str> {
        self.interval()?.counterparty_id.as_deref()
    }
}
