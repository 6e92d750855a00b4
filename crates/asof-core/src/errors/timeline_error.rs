use chrono::NaiveDate;

/// Timeline subsystem errors.
///
/// `Unknown` resolutions, zero-count windows and incomplete snapshots are
/// values, not errors — only genuinely invalid input or a broken invariant
/// lands here.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("invalid interval for {entity_id}: end {end} precedes start {start}")]
    InvalidInterval {
        entity_id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("query for {entity_id} at {as_of} predates the date floor {floor}")]
    InvalidQuery {
        entity_id: String,
        as_of: NaiveDate,
        floor: NaiveDate,
    },

    /// A future-dated interval or window bound influenced a snapshot.
    /// Always fatal; never recovered automatically.
    #[error("leakage violation for {entity_id} as of {as_of}: {detail}")]
    LeakageViolation {
        entity_id: String,
        as_of: NaiveDate,
        detail: String,
    },
}
