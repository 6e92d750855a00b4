//! Append-only interval store.
//!
//! Built once per run from the upstream fact log, read-only thereafter.
//! Corrections must arrive as new compensating intervals from the feed —
//! nothing is ever mutated or deleted after insertion.

pub mod ingest;

use std::collections::HashMap;

use chrono::NaiveDate;

use asof_core::errors::TimelineError;
use asof_core::models::{Entity, EntityKind, Interval};

pub use ingest::IngestReport;

/// Arena of intervals with per-entity and per-counterparty indexes.
///
/// Per-entity index entries are kept sorted by `(start_date, end_date)`
/// at insertion time, so `intervals_for` hands out a fully materialized,
/// deterministically ordered timeline — never a partial view that could
/// pick the wrong "latest" interval.
#[derive(Debug, Default, Clone)]
pub struct IntervalStore {
    intervals: Vec<Interval>,
    by_entity: HashMap<String, Vec<usize>>,
    by_counterparty: HashMap<String, Vec<usize>>,
    entities: HashMap<String, EntityKind>,
}

impl IntervalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fact. Fails with `InvalidInterval` when the end precedes
    /// the start; same-kind overlap is an ingestion-boundary contract and
    /// is deliberately not enforced here.
    pub fn put(&mut self, interval: Interval) -> Result<(), TimelineError> {
        if let Some(end) = interval.end_date {
            if interval.start_date > end {
                return Err(TimelineError::InvalidInterval {
                    entity_id: interval.entity_id.clone(),
                    start: interval.start_date,
                    end,
                });
            }
        }

        let idx = self.intervals.len();
        let intervals = &self.intervals;
        let timeline = self
            .by_entity
            .entry(interval.entity_id.clone())
            .or_default();
        let pos =
            timeline.partition_point(|&i| sort_key(&intervals[i]) <= sort_key(&interval));
        timeline.insert(pos, idx);

        if let Some(cp) = &interval.counterparty_id {
            self.by_counterparty.entry(cp.clone()).or_default().push(idx);
        }

        self.intervals.push(interval);
        Ok(())
    }

    /// Register the entity kind behind a timeline. Idempotent.
    pub fn register_entity(&mut self, entity: Entity) {
        self.entities
            .entry(entity.entity_id)
            .or_insert(entity.entity_kind);
    }

    pub fn entity_kind(&self, entity_id: &str) -> Option<EntityKind> {
        self.entities.get(entity_id).copied()
    }

    /// Full timeline for an entity, sorted by `start_date` (ties by
    /// `end_date`, open intervals last).
    pub fn intervals_for(&self, entity_id: &str) -> Vec<&Interval> {
        self.by_entity
            .get(entity_id)
            .map(|ids| ids.iter().map(|&i| &self.intervals[i]).collect())
            .unwrap_or_default()
    }

    /// Intervals pivoted on a counterparty whose span intersects
    /// `[from, to]` (inclusive). Unknown counterparties yield an empty
    /// sequence — absence of data is a valid answer.
    pub fn intervals_overlapping(
        &self,
        counterparty_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<&Interval> {
        self.by_counterparty
            .get(counterparty_id)
            .map(|ids| {
                ids.iter()
                    .map(|&i| &self.intervals[i])
                    .filter(|iv| iv.overlaps(from, to))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Distinct entity ids with at least one interval.
    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.by_entity.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Sort key for a timeline: start date, then end date with open intervals
/// ranked last. This is the documented resolution tie-break order.
fn sort_key(interval: &Interval) -> (NaiveDate, NaiveDate) {
    (
        interval.start_date,
        interval.end_date.unwrap_or(NaiveDate::MAX),
    )
}
