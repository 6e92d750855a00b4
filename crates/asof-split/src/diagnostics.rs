//! Post-classification diagnostics.
//!
//! Quality signals for the operator: volumes, positive rates, and the
//! train→test rate drift. Intentionally report-only — a drifted split is
//! investigated, not rebalanced.

use tracing::warn;

use asof_core::config::SplitConfig;
use asof_core::models::{
    ExclusionReason, LabeledRecord, SplitBoundary, SplitFinding, SplitLabel, SplitReport,
    SplitVolume,
};

/// Build the report for a classified batch, folding in the boundary
/// findings produced by validation.
pub fn build_report(
    records: &[LabeledRecord],
    boundary: &SplitBoundary,
    config: &SplitConfig,
    mut findings: Vec<SplitFinding>,
) -> SplitReport {
    let mut train = SplitVolume::default();
    let mut gap = SplitVolume::default();
    let mut test = SplitVolume::default();
    let mut excluded = SplitVolume::default();
    let mut before_window = 0usize;
    let mut after_window = 0usize;
    let mut right_censored = 0usize;

    for record in records {
        let volume = match record.label {
            SplitLabel::Train => &mut train,
            SplitLabel::Gap => &mut gap,
            SplitLabel::Test => &mut test,
            SplitLabel::Excluded => &mut excluded,
        };
        volume.records += 1;
        if record.outcome == Some(true) {
            volume.positives += 1;
        }
        match record.exclusion {
            Some(ExclusionReason::BeforeStudyWindow) => before_window += 1,
            Some(ExclusionReason::AfterStudyWindow) => after_window += 1,
            Some(ExclusionReason::RightCensored) => right_censored += 1,
            None => {}
        }
    }

    let positive_rate_drift = match (train.positive_rate(), test.positive_rate()) {
        (Some(train_rate), Some(test_rate)) if train_rate > 0.0 => {
            Some((test_rate - train_rate).abs() / train_rate)
        }
        _ => None,
    };

    if let Some(drift) = positive_rate_drift {
        if drift > config.max_rate_drift {
            warn!(
                "train→test positive-rate drift {:.1}% exceeds {:.1}%",
                drift * 100.0,
                config.max_rate_drift * 100.0
            );
            findings.push(SplitFinding::warning(
                "positive_rate_drift",
                format!(
                    "relative drift of {:.1}% exceeds the configured {:.1}% threshold",
                    drift * 100.0,
                    config.max_rate_drift * 100.0
                ),
            ));
        }
    }

    if right_censored > 0 {
        findings.push(SplitFinding::info(
            "right_censored",
            format!("{right_censored} record(s) excluded with still-maturing outcomes"),
        ));
    }

    SplitReport {
        boundary: *boundary,
        gap_days: boundary.gap_days(),
        train,
        gap,
        test,
        excluded,
        excluded_before_window: before_window,
        excluded_after_window: after_window,
        excluded_right_censored: right_censored,
        positive_rate_drift,
        findings,
    }
}
