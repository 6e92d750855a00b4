//! Single-pass temporal classification.

use chrono::NaiveDate;
use tracing::info;

use asof_core::config::SplitConfig;
use asof_core::errors::SplitError;
use asof_core::models::{
    ExclusionReason, LabeledRecord, SplitBoundary, SplitInput, SplitLabel, SplitReport,
};

use crate::diagnostics;
use crate::validate;

/// A classified dataset plus its diagnostics report.
#[derive(Debug, Clone)]
pub struct SplitRun {
    pub records: Vec<LabeledRecord>,
    pub report: SplitReport,
}

/// Pure label assignment for one timestamp against a boundary.
///
/// Exactly one label applies to every timestamp:
/// - before `train_start` → `Excluded`;
/// - up to `train_end` → `Train`;
/// - strictly inside `(train_end, test_start)` → `Gap` (quarantine);
/// - `test_start ..= test_end` → `Test`;
/// - after `test_end` → `Excluded`.
pub fn label_for(timestamp: NaiveDate, boundary: &SplitBoundary) -> SplitLabel {
    if timestamp < boundary.train_start {
        SplitLabel::Excluded
    } else if timestamp <= boundary.train_end {
        SplitLabel::Train
    } else if timestamp < boundary.test_start {
        SplitLabel::Gap
    } else if timestamp <= boundary.test_end {
        SplitLabel::Test
    } else {
        SplitLabel::Excluded
    }
}

/// Classify a batch of records and build the diagnostics report.
///
/// Validates the boundary first (a negative gap aborts; a short gap warns
/// or aborts per config). A record whose outcome is still maturing
/// (`outcome: None`) is right-censored: excluded and counted, never
/// coerced to a negative label. Labels are assigned exactly once and the
/// labeled subsets partition the input.
pub fn classify(records: &[SplitInput], config: &SplitConfig) -> Result<SplitRun, SplitError> {
    let findings = validate::check_split(config)?;
    let boundary = config.boundary;

    let labeled: Vec<LabeledRecord> = records
        .iter()
        .map(|record| {
            let positional = label_for(record.timestamp, &boundary);
            let (label, exclusion) = match positional {
                SplitLabel::Excluded if record.timestamp < boundary.train_start => {
                    (SplitLabel::Excluded, Some(ExclusionReason::BeforeStudyWindow))
                }
                SplitLabel::Excluded => {
                    (SplitLabel::Excluded, Some(ExclusionReason::AfterStudyWindow))
                }
                // Right-censoring overrides a positional train/test label;
                // the quarantine gap is discarded either way.
                SplitLabel::Train | SplitLabel::Test if record.outcome.is_none() => {
                    (SplitLabel::Excluded, Some(ExclusionReason::RightCensored))
                }
                other => (other, None),
            };
            LabeledRecord {
                record_id: record.record_id.clone(),
                timestamp: record.timestamp,
                outcome: record.outcome,
                label,
                exclusion,
            }
        })
        .collect();

    let report = diagnostics::build_report(&labeled, &boundary, config, findings);

    info!(
        "split classified {} record(s): {} train, {} gap, {} test, {} excluded",
        labeled.len(),
        report.train.records,
        report.gap.records,
        report.test.records,
        report.excluded.records
    );

    Ok(SplitRun {
        records: labeled,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn boundary() -> SplitBoundary {
        SplitBoundary {
            train_start: d("2024-02-01"),
            train_end: d("2024-06-30"),
            test_start: d("2024-08-01"),
            test_end: d("2024-10-31"),
        }
    }

    #[test]
    fn quarantine_zone_is_labeled_gap() {
        assert_eq!(label_for(d("2024-07-15"), &boundary()), SplitLabel::Gap);
        assert_eq!(label_for(d("2024-07-01"), &boundary()), SplitLabel::Gap);
        assert_eq!(label_for(d("2024-07-31"), &boundary()), SplitLabel::Gap);
    }

    #[test]
    fn boundaries_are_inclusive_for_train_and_test() {
        assert_eq!(label_for(d("2024-06-30"), &boundary()), SplitLabel::Train);
        assert_eq!(label_for(d("2024-08-01"), &boundary()), SplitLabel::Test);
        assert_eq!(label_for(d("2024-10-31"), &boundary()), SplitLabel::Test);
    }

    #[test]
    fn outside_the_study_window_is_excluded() {
        assert_eq!(label_for(d("2024-01-31"), &boundary()), SplitLabel::Excluded);
        assert_eq!(label_for(d("2024-11-01"), &boundary()), SplitLabel::Excluded);
    }
}
