//! TimelineEngine — orchestrator over the store and timeline config.

use chrono::NaiveDate;

use asof_core::config::TimelineConfig;
use asof_core::errors::TimelineError;
use asof_core::models::{
    GapPolicy, IntervalFact, QueryPoint, Resolution, Snapshot, TransitionCounts, WindowSpec,
};

use crate::snapshot::{self, BatchResult};
use crate::store::{IngestReport, IntervalStore};
use crate::{resolve, window};

/// Owns the interval store and configuration, and exposes the timeline
/// operations downstream callers compose: ingest once, then resolve,
/// aggregate and snapshot against the frozen store.
pub struct TimelineEngine {
    store: IntervalStore,
    config: TimelineConfig,
}

impl TimelineEngine {
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            store: IntervalStore::new(),
            config,
        }
    }

    /// Ingest a batch of upstream facts. Intended to run once per
    /// pipeline run, before any queries.
    pub fn ingest<I>(&mut self, facts: I) -> IngestReport
    where
        I: IntoIterator<Item = IntervalFact>,
    {
        self.store.ingest(facts, &self.config)
    }

    pub fn store(&self) -> &IntervalStore {
        &self.store
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn resolve(
        &self,
        entity_id: &str,
        as_of: NaiveDate,
        policy: GapPolicy,
    ) -> Result<Resolution, TimelineError> {
        resolve::resolve(&self.store, &self.config, entity_id, as_of, policy)
    }

    pub fn count_transitions(
        &self,
        counterparty_id: &str,
        as_of: NaiveDate,
        window_days: u32,
    ) -> TransitionCounts {
        window::count_transitions(&self.store, counterparty_id, as_of, window_days)
    }

    pub fn build_snapshot(
        &self,
        entity_id: &str,
        as_of: NaiveDate,
        policy: GapPolicy,
        window_specs: &[WindowSpec],
    ) -> Result<Snapshot, TimelineError> {
        snapshot::build(&self.store, &self.config, entity_id, as_of, policy, window_specs)
    }

    pub fn build_batch(
        &self,
        queries: &[QueryPoint],
        policy: GapPolicy,
        window_specs: &[WindowSpec],
    ) -> Result<BatchResult, TimelineError> {
        snapshot::build_batch(&self.store, &self.config, queries, policy, window_specs)
    }
}
