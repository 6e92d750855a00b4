//! Trailing-window transition counts over interval boundaries.

use chrono::{Duration, NaiveDate};

use asof_core::models::TransitionCounts;

use crate::store::IntervalStore;

/// Count interval starts and ends for a counterparty inside the trailing
/// window `(as_of - window_days, as_of]`.
///
/// The upper scan bound is the query date itself — an interval starting
/// after `as_of` is never visible, and an open interval never counts as a
/// departure no matter how old. This is how "is this organization
/// shedding members" is computed without looking past the query date.
///
/// A counterparty with no known intervals yields zeros: absence of data
/// is a valid (if uninformative) answer, not an error.
pub fn count_transitions(
    store: &IntervalStore,
    counterparty_id: &str,
    as_of: NaiveDate,
    window_days: u32,
) -> TransitionCounts {
    let from = as_of - Duration::days(i64::from(window_days));
    let mut counts = TransitionCounts::default();

    for interval in store.intervals_overlapping(counterparty_id, from, as_of) {
        // Lower bound is exclusive, upper bound inclusive.
        if interval.start_date > from && interval.start_date <= as_of {
            counts.arrivals += 1;
        }
        if let Some(end) = interval.end_date {
            if end > from && end <= as_of {
                counts.departures += 1;
            }
        }
    }

    counts
}
