//! Shared test builders for the asof workspace.
//!
//! Terse constructors for the shapes every test needs: employment spells,
//! ingest facts, and pre-loaded stores. Dates are `"YYYY-MM-DD"` literals;
//! a malformed literal is a test bug, so these panic freely.

use chrono::NaiveDate;

use asof_core::config::TimelineConfig;
use asof_core::models::{
    EntityKind, Interval, IntervalFact, IntervalPayload, QueryPoint, SplitInput,
};
use asof_timeline::IntervalStore;

/// Parse a date literal.
pub fn d(s: &str) -> NaiveDate {
    s.parse().expect("test date literal")
}

/// An employment spell tying `entity` to `firm`.
pub fn employment(entity: &str, start: &str, end: Option<&str>, firm: &str) -> Interval {
    Interval {
        entity_id: entity.to_string(),
        start_date: d(start),
        end_date: end.map(d),
        counterparty_id: Some(firm.to_string()),
        payload: IntervalPayload::Employment {
            title: None,
            branch_state: None,
        },
    }
}

/// An ingest-feed fact for an employment spell.
pub fn employment_fact(
    entity: &str,
    start: &str,
    end: Option<&str>,
    firm: &str,
) -> IntervalFact {
    IntervalFact {
        entity_id: entity.to_string(),
        entity_kind: EntityKind::Person,
        start_date: d(start),
        end_date: end.map(d),
        counterparty_id: Some(firm.to_string()),
        payload: IntervalPayload::Employment {
            title: None,
            branch_state: None,
        },
    }
}

/// A store pre-loaded with intervals. Panics on invalid fixtures.
pub fn store_with(intervals: Vec<Interval>) -> IntervalStore {
    let mut store = IntervalStore::new();
    for interval in intervals {
        store.put(interval).expect("valid fixture interval");
    }
    store
}

/// A timeline config with the floor removed, so fixtures can use any
/// convenient dates.
pub fn floorless_config() -> TimelineConfig {
    TimelineConfig {
        date_floor: NaiveDate::MIN,
        ..TimelineConfig::default()
    }
}

/// A query point.
pub fn query(entity: &str, as_of: &str) -> QueryPoint {
    QueryPoint::new(entity, d(as_of))
}

/// A split-feed record.
pub fn split_input(id: &str, timestamp: &str, outcome: Option<bool>) -> SplitInput {
    SplitInput {
        record_id: id.to_string(),
        timestamp: d(timestamp),
        outcome,
    }
}
