//! Data-parallel snapshot fan-out.
//!
//! Each entity's timeline is independent and the store is read-only, so
//! query points are processed in parallel with no shared mutable state.
//! Output order matches input order regardless of scheduling.

use rayon::prelude::*;
use tracing::info;
use uuid::Uuid;

use asof_core::config::TimelineConfig;
use asof_core::errors::TimelineError;
use asof_core::models::{GapPolicy, QueryPoint, Snapshot, WindowSpec};

use super::build;
use crate::store::IntervalStore;

/// Outcome of one batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Run identifier, for correlating logs and downstream artifacts.
    pub run_id: Uuid,
    /// One snapshot per query point, in input order.
    pub snapshots: Vec<Snapshot>,
    pub complete: usize,
    pub incomplete: usize,
}

/// Build snapshots for a batch of query points.
///
/// Fails on the first leakage violation or invalid query — a batch with a
/// poisoned row must be investigated, not partially delivered.
pub fn build_batch(
    store: &IntervalStore,
    config: &TimelineConfig,
    queries: &[QueryPoint],
    policy: GapPolicy,
    window_specs: &[WindowSpec],
) -> Result<BatchResult, TimelineError> {
    let run_id = Uuid::new_v4();

    let snapshots: Vec<Snapshot> = queries
        .par_iter()
        .map(|q| build::build(store, config, &q.entity_id, q.as_of, policy, window_specs))
        .collect::<Result<_, _>>()?;

    let complete = snapshots.iter().filter(|s| s.is_complete()).count();
    let incomplete = snapshots.len() - complete;

    info!(
        "batch {run_id}: built {} snapshot(s), {complete} complete, {incomplete} incomplete",
        snapshots.len()
    );

    Ok(BatchResult {
        run_id,
        snapshots,
        complete,
        incomplete,
    })
}
