//! Entity and interval models for the append-only fact log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What kind of subject a timeline belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An individual (e.g. an advisor identified by CRD).
    Person,
    /// A firm or other organization.
    Organization,
}

/// An identifiable subject of a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Opaque key (e.g. a CRD number rendered as a string).
    pub entity_id: String,
    pub entity_kind: EntityKind,
}

/// Discriminant for the payload union. Same-kind intervals for one entity
/// must not overlap; that contract is checked at ingestion, not by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    Employment,
    AssetsUnderManagement,
}

/// Interval-scoped attributes, one closed variant per interval kind.
///
/// The upstream feed carried these as free-form key/value maps; here they
/// are a tagged union resolved at ingestion so a missing attribute is a
/// type error, not a silent null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntervalPayload {
    /// A registration/employment spell at a counterparty firm.
    Employment {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        branch_state: Option<String>,
    },
    /// Assets under management reported for the spell.
    AssetsUnderManagement { total_usd: f64 },
}

impl IntervalPayload {
    pub fn kind(&self) -> IntervalKind {
        match self {
            IntervalPayload::Employment { .. } => IntervalKind::Employment,
            IntervalPayload::AssetsUnderManagement { .. } => {
                IntervalKind::AssetsUnderManagement
            }
        }
    }
}

/// One fact about an entity holding for a contiguous span of business time.
///
/// `start_date` and `end_date` are both inclusive. An absent `end_date`
/// means the fact was still in force when the log was extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub entity_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// The other party to the fact (e.g. the employing firm), if any.
    pub counterparty_id: Option<String>,
    pub payload: IntervalPayload,
}

impl Interval {
    pub fn kind(&self) -> IntervalKind {
        self.payload.kind()
    }

    /// Still in force as of log extraction time.
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }

    /// Whether the interval was in force on `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| end >= date)
    }

    /// Whether this interval's span intersects `[from, to]` (inclusive).
    /// An open interval extends to infinity on the right.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date.map_or(true, |end| end >= from)
    }

    /// Days between this interval's end and `date`, when `date` falls
    /// strictly after the end. `None` for open intervals or covered dates.
    pub fn gap_days_to(&self, date: NaiveDate) -> Option<u32> {
        let end = self.end_date?;
        if date > end {
            Some((date - end).num_days() as u32)
        } else {
            None
        }
    }
}

/// One record of the upstream interval feed, as handed to ingestion.
///
/// Identical to [`Interval`] plus the entity kind, which the raw fact log
/// carries but the stored interval does not need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalFact {
    pub entity_id: String,
    #[serde(default = "default_entity_kind")]
    pub entity_kind: EntityKind,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub counterparty_id: Option<String>,
    pub payload: IntervalPayload,
}

fn default_entity_kind() -> EntityKind {
    EntityKind::Person
}

impl IntervalFact {
    pub fn into_parts(self) -> (Entity, Interval) {
        let entity = Entity {
            entity_id: self.entity_id.clone(),
            entity_kind: self.entity_kind,
        };
        let interval = Interval {
            entity_id: self.entity_id,
            start_date: self.start_date,
            end_date: self.end_date,
            counterparty_id: self.counterparty_id,
            payload: self.payload,
        };
        (entity, interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn spell(start: &str, end: Option<&str>) -> Interval {
        Interval {
            entity_id: "A1".to_string(),
            start_date: d(start),
            end_date: end.map(d),
            counterparty_id: Some("F1".to_string()),
            payload: IntervalPayload::Employment {
                title: None,
                branch_state: None,
            },
        }
    }

    #[test]
    fn covers_is_inclusive_on_both_ends() {
        let iv = spell("2023-01-01", Some("2023-06-30"));
        assert!(iv.covers(d("2023-01-01")));
        assert!(iv.covers(d("2023-06-30")));
        assert!(!iv.covers(d("2022-12-31")));
        assert!(!iv.covers(d("2023-07-01")));
    }

    #[test]
    fn open_interval_covers_any_later_date() {
        let iv = spell("2023-07-15", None);
        assert!(iv.covers(d("2099-01-01")));
        assert!(!iv.covers(d("2023-07-14")));
    }

    #[test]
    fn gap_days_counts_strictly_after_end() {
        let iv = spell("2023-01-01", Some("2023-06-30"));
        assert_eq!(iv.gap_days_to(d("2023-07-01")), Some(1));
        assert_eq!(iv.gap_days_to(d("2023-06-30")), None);
        assert_eq!(spell("2023-01-01", None).gap_days_to(d("2024-01-01")), None);
    }

    #[test]
    fn payload_round_trips_as_tagged_union() {
        let payload = IntervalPayload::Employment {
            title: Some("Registered Rep".to_string()),
            branch_state: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"kind\":\"employment\""));
        let back: IntervalPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
