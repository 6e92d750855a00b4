//! Leakage validation for snapshots.
//!
//! Pure checks with no side effects beyond the returned error. A
//! violation is fatal for the affected run: recovery would mean silently
//! fabricating a "safe" answer where none exists.

use asof_core::errors::TimelineError;
use asof_core::models::{Resolution, Snapshot};

/// Assert the no-future-leakage invariant for one snapshot:
///
/// - every interval contributing to the resolution has
///   `start_date <= as_of`, and a `Gapped` resolution's interval ended
///   strictly before `as_of`;
/// - no aggregate window's upper scan bound exceeds `as_of`.
///
/// The error identifies the offending entity, date, and interval so the
/// violation can be investigated rather than skipped.
pub fn check_snapshot(snapshot: &Snapshot) -> Result<(), TimelineError> {
    let violation = |detail: String| TimelineError::LeakageViolation {
        entity_id: snapshot.entity_id.clone(),
        as_of: snapshot.as_of,
        detail,
    };

    match &snapshot.resolution {
        Resolution::Active { interval } => {
            if interval.start_date > snapshot.as_of {
                return Err(violation(format!(
                    "active interval starts {} — after the snapshot date",
                    interval.start_date
                )));
            }
        }
        Resolution::Gapped { last_known, .. } => {
            if last_known.start_date > snapshot.as_of {
                return Err(violation(format!(
                    "gapped interval starts {} — after the snapshot date",
                    last_known.start_date
                )));
            }
            match last_known.end_date {
                Some(end) if end < snapshot.as_of => {}
                Some(end) => {
                    return Err(violation(format!(
                        "gapped interval ends {end}, not strictly before the snapshot date"
                    )));
                }
                None => {
                    return Err(violation(
                        "gapped resolution backed by an open interval".to_string(),
                    ));
                }
            }
        }
        Resolution::Unknown => {}
    }

    for aggregate in snapshot.raw_aggregates() {
        if aggregate.window_end > snapshot.as_of {
            return Err(violation(format!(
                "window '{}' scanned up to {} — past the snapshot date",
                aggregate.name, aggregate.window_end
            )));
        }
    }

    Ok(())
}
