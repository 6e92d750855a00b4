//! Single-snapshot assembly.

use chrono::NaiveDate;

use asof_core::config::TimelineConfig;
use asof_core::errors::TimelineError;
use asof_core::models::{
    Completeness, GapPolicy, Snapshot, WindowAggregate, WindowSpec,
};

use crate::resolve;
use crate::store::IntervalStore;
use crate::validate;
use crate::window;

/// Build the snapshot for one (entity, as_of) pair.
///
/// Resolves the entity, then computes one transition-count aggregate per
/// requested window, pivoted on the resolved interval's counterparty
/// ("whatever firm this person is tied to as of this date").
///
/// An `Unknown` resolution — or a resolved interval with no counterparty
/// to pivot on — yields an `incomplete` snapshot whose aggregates are
/// absent rather than zero.
///
/// The leakage validator runs before the snapshot is returned; a
/// violation is fatal, never auto-corrected.
pub fn build(
    store: &IntervalStore,
    config: &TimelineConfig,
    entity_id: &str,
    as_of: NaiveDate,
    policy: GapPolicy,
    window_specs: &[WindowSpec],
) -> Result<Snapshot, TimelineError> {
    let resolution = resolve::resolve(store, config, entity_id, as_of, policy)?;

    let (completeness, aggregates) = match resolution.counterparty() {
        Some(counterparty) => {
            let aggregates = window_specs
                .iter()
                .map(|spec| WindowAggregate {
                    name: spec.name.clone(),
                    counterparty_id: counterparty.to_string(),
                    window_days: spec.window_days,
                    window_end: as_of,
                    counts: window::count_transitions(
                        store,
                        counterparty,
                        as_of,
                        spec.window_days,
                    ),
                })
                .collect();
            (Completeness::Complete, aggregates)
        }
        None => (Completeness::Incomplete, Vec::new()),
    };

    let snapshot = Snapshot::new(entity_id, as_of, resolution, completeness, aggregates);
    validate::check_snapshot(&snapshot)?;
    Ok(snapshot)
}
