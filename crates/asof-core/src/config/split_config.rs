//! Split subsystem configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SplitBoundary;

/// Configuration for the temporal splitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub boundary: SplitBoundary,

    /// Minimum quarantine gap between train and test. A smaller gap is
    /// flagged as `InsufficientSeparation`.
    pub minimum_gap_days: u32,

    /// When set, an insufficient gap fails classification outright
    /// instead of producing a warning finding.
    pub strict_gap: bool,

    /// Relative train→test positive-rate drift above which a warning
    /// finding is emitted.
    pub max_rate_drift: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            boundary: SplitBoundary {
                // July 2025 is the quarantine month: training ends 31 days
                // before the test period opens, satisfying the default
                // minimum_gap_days.
                train_start: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid literal date"),
                train_end: NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid literal date"),
                test_start: NaiveDate::from_ymd_opt(2025, 8, 1).expect("valid literal date"),
                test_end: NaiveDate::from_ymd_opt(2025, 10, 31).expect("valid literal date"),
            },
            minimum_gap_days: 30,
            strict_gap: false,
            max_rate_drift: 0.30,
        }
    }
}
