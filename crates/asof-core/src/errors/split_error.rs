/// Split subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Test begins on or before training ends. Always fatal — a negative
    /// gap means the partitions overlap in time.
    #[error("test period begins before training ends: gap of {gap_days} days")]
    BoundaryLeakage { gap_days: i64 },

    #[error("boundary is not ordered: {detail}")]
    InvalidBoundary { detail: String },

    /// Gap below the configured minimum. Reported as a warning by default;
    /// raised as this error only when the caller sets `strict_gap`.
    #[error("train/test gap of {actual} days is below the configured minimum of {required}")]
    InsufficientSeparation { actual: i64, required: u32 },
}
