//! Temporal split types: boundary, labels, and the diagnostics report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which partition a record landed in. Assigned once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitLabel {
    Train,
    /// Quarantine zone between train and test, intentionally discarded.
    Gap,
    Test,
    Excluded,
}

/// Why a record was excluded, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Timestamp precedes `train_start`.
    BeforeStudyWindow,
    /// Timestamp follows `test_end`.
    AfterStudyWindow,
    /// Outcome had not matured by extraction time. Never coerced to a
    /// negative label.
    RightCensored,
}

/// The configured temporal split boundaries.
///
/// `gap_days` can come out negative or below the configured minimum; that
/// is reported by the split validator, not silently fixed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitBoundary {
    pub train_start: NaiveDate,
    pub train_end: NaiveDate,
    pub test_start: NaiveDate,
    pub test_end: NaiveDate,
}

impl SplitBoundary {
    /// Calendar days strictly between `train_end` and `test_start`:
    /// `(test_start - train_end) - 1`. Zero means test starts the day
    /// after training ends; negative means the periods overlap.
    pub fn gap_days(&self) -> i64 {
        (self.test_start - self.train_end).num_days() - 1
    }
}

/// One record of the upstream `(record_id, timestamp, outcome?)` feed.
///
/// `outcome: None` means the outcome is still maturing (right-censored)
/// and must be excluded from training, not labeled negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitInput {
    pub record_id: String,
    pub timestamp: NaiveDate,
    #[serde(default)]
    pub outcome: Option<bool>,
}

/// A record after classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub record_id: String,
    pub timestamp: NaiveDate,
    pub outcome: Option<bool>,
    pub label: SplitLabel,
    /// Present iff `label == Excluded`.
    pub exclusion: Option<ExclusionReason>,
}

/// Volume and outcome-rate figures for one partition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitVolume {
    pub records: usize,
    pub positives: usize,
}

impl SplitVolume {
    /// Positive-outcome rate, `None` for an empty partition.
    pub fn positive_rate(&self) -> Option<f64> {
        if self.records == 0 {
            None
        } else {
            Some(self.positives as f64 / self.records as f64)
        }
    }
}

/// Severity of a diagnostics finding. Findings are quality signals for the
/// operator; nothing here auto-corrects the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitSeverity {
    Info,
    Warning,
}

/// One diagnostics finding surfaced with the split report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitFinding {
    pub severity: SplitSeverity,
    pub check: String,
    pub message: String,
}

impl SplitFinding {
    pub fn info(check: &str, message: impl Into<String>) -> Self {
        Self {
            severity: SplitSeverity::Info,
            check: check.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(check: &str, message: impl Into<String>) -> Self {
        Self {
            severity: SplitSeverity::Warning,
            check: check.to_string(),
            message: message.into(),
        }
    }
}

/// Post-classification diagnostics: volumes and rate drift per partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    pub boundary: SplitBoundary,
    pub gap_days: i64,
    pub train: SplitVolume,
    pub gap: SplitVolume,
    pub test: SplitVolume,
    pub excluded: SplitVolume,
    /// Excluded records broken down by reason.
    pub excluded_before_window: usize,
    pub excluded_after_window: usize,
    pub excluded_right_censored: usize,
    /// `|test_rate - train_rate| / train_rate`, when both rates exist.
    pub positive_rate_drift: Option<f64>,
    pub findings: Vec<SplitFinding>,
}

impl SplitReport {
    pub fn has_warnings(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == SplitSeverity::Warning)
    }

    pub fn total_records(&self) -> usize {
        self.train.records + self.gap.records + self.test.records + self.excluded.records
    }
}
