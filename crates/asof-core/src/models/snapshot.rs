//! Snapshot and windowed-aggregate models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::resolution::Resolution;

/// A named trailing window to aggregate over, ending at the query date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Name the aggregate is published under (e.g. `"roster_12m"`).
    pub name: String,
    /// Window length in days. The window is `(as_of - window_days, as_of]`.
    pub window_days: u32,
}

impl WindowSpec {
    pub fn new(name: impl Into<String>, window_days: u32) -> Self {
        Self {
            name: name.into(),
            window_days,
        }
    }
}

/// Interval boundary counts inside a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitionCounts {
    /// Intervals whose `start_date` fell inside the window.
    pub arrivals: u32,
    /// Intervals whose (present) `end_date` fell inside the window.
    /// Open intervals never count, no matter how old.
    pub departures: u32,
}

impl TransitionCounts {
    /// Net roster change: arrivals minus departures. Negative means the
    /// counterparty is shedding members.
    pub fn net_change(&self) -> i64 {
        i64::from(self.arrivals) - i64::from(self.departures)
    }
}

/// One computed window aggregate, pivoted on a counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowAggregate {
    pub name: String,
    pub counterparty_id: String,
    pub window_days: u32,
    /// Upper scan bound actually used. Must never exceed the snapshot's
    /// `as_of` — checked by the leakage validator.
    pub window_end: NaiveDate,
    pub counts: TransitionCounts,
}

/// Whether a snapshot's aggregate fields are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    Complete,
    /// Resolution was `Unknown`, or the resolved interval carried no
    /// counterparty to pivot on. Aggregates are absent, not zero.
    Incomplete,
}

/// One denormalized row per (entity, as_of) pair: the resolution plus the
/// requested window aggregates. Immutable once built.
///
/// Aggregates are reachable only through [`Snapshot::aggregates`] and
/// [`Snapshot::aggregate`], which return `None` for incomplete snapshots —
/// there is no default-to-zero escape hatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entity_id: String,
    pub as_of: NaiveDate,
    pub resolution: Resolution,
    completeness: Completeness,
    aggregates: Vec<WindowAggregate>,
}

impl Snapshot {
    pub fn new(
        entity_id: impl Into<String>,
        as_of: NaiveDate,
        resolution: Resolution,
        completeness: Completeness,
        aggregates: Vec<WindowAggregate>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            as_of,
            resolution,
            completeness,
            aggregates,
        }
    }

    pub fn completeness(&self) -> Completeness {
        self.completeness
    }

    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }

    /// All window aggregates, or `None` when the snapshot is incomplete.
    ///
    /// Forcing the caller through the `Option` keeps "no data" distinct
    /// from "zero departures".
    pub fn aggregates(&self) -> Option<&[WindowAggregate]> {
        match self.completeness {
            Completeness::Complete => Some(&self.aggregates),
            Completeness::Incomplete => None,
        }
    }

    /// A single aggregate by window name, or `None` when absent or when
    /// the snapshot is incomplete.
    pub fn aggregate(&self, name: &str) -> Option<&WindowAggregate> {
        self.aggregates()?.iter().find(|a| a.name == name)
    }

    /// Raw aggregate storage, ignoring completeness. For validators only.
    pub fn raw_aggregates(&self) -> &[WindowAggregate] {
        &self.aggregates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_snapshot_hides_aggregates() {
        let snap = Snapshot::new(
            "A1",
            "2024-03-01".parse().unwrap(),
            Resolution::Unknown,
            Completeness::Incomplete,
            vec![],
        );
        assert!(snap.aggregates().is_none());
        assert!(snap.aggregate("roster_12m").is_none());
        assert!(!snap.is_complete());
    }

    #[test]
    fn net_change_can_go_negative() {
        let counts = TransitionCounts {
            arrivals: 2,
            departures: 5,
        };
        assert_eq!(counts.net_change(), -3);
    }
}
