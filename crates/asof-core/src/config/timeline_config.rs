//! Timeline subsystem configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for the interval store and point-in-time resolver.
///
/// The defaults mirror the tuned values of the source system (a 30-day
/// administrative-lag tolerance, and a floor at the first month with full
/// historical coverage), but both are empirical knobs, not principles —
/// callers with different data coverage should set their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Earliest query date the log can answer for. Queries before this
    /// surface `InvalidQuery` so the caller can apply an explicit
    /// floor policy instead of silently getting `Unknown`.
    pub date_floor: NaiveDate,

    /// Largest gap (in days) that `GapPolicy::GapTolerant` will bridge.
    /// A gap beyond this resolves to `Unknown`.
    pub gap_tolerance_days: u32,

    /// How many rejection messages an ingest report retains verbatim.
    pub ingest_rejection_sample: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            // First month with full historical coverage upstream.
            date_floor: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid literal date"),
            gap_tolerance_days: 30,
            ingest_rejection_sample: 20,
        }
    }
}
