//! Property tests for label partitioning and quarantine enforcement.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use asof_core::config::SplitConfig;
use asof_core::models::{SplitBoundary, SplitInput, SplitLabel};
use asof_split::{classify, label_for};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid literal date")
}

fn arb_boundary() -> impl Strategy<Value = SplitBoundary> {
    // train_start <= train_end < test_start <= test_end, gap of at least 1.
    (0i64..100, 1i64..400, 1i64..120, 1i64..200).prop_map(
        |(start_off, train_len, gap, test_len)| {
            let train_start = base_date() + Duration::days(start_off);
            let train_end = train_start + Duration::days(train_len);
            let test_start = train_end + Duration::days(gap + 1);
            SplitBoundary {
                train_start,
                train_end,
                test_start,
                test_end: test_start + Duration::days(test_len),
            }
        },
    )
}

fn arb_records() -> impl Strategy<Value = Vec<SplitInput>> {
    prop::collection::vec(
        (0i64..900, prop::option::of(any::<bool>())).prop_map(|(off, outcome)| SplitInput {
            record_id: format!("r{off}"),
            timestamp: base_date() + Duration::days(off),
            outcome,
        }),
        0..60,
    )
}

proptest! {
    // Every timestamp gets exactly one label, and the report volumes sum
    // to the input size.
    #[test]
    fn prop_labels_partition_the_input(
        boundary in arb_boundary(),
        records in arb_records(),
    ) {
        let config = SplitConfig {
            boundary,
            minimum_gap_days: 0,
            strict_gap: true,
            max_rate_drift: 0.30,
        };
        let run = classify(&records, &config).expect("generated boundaries are valid");

        prop_assert_eq!(run.records.len(), records.len());
        prop_assert_eq!(run.report.total_records(), records.len());
        prop_assert_eq!(
            run.report.excluded.records,
            run.report.excluded_before_window
                + run.report.excluded_after_window
                + run.report.excluded_right_censored
        );
    }

    // No timestamp inside the quarantine zone ever trains or tests.
    #[test]
    fn prop_quarantine_zone_never_trains_or_tests(
        boundary in arb_boundary(),
        offset in 0i64..1000,
    ) {
        let timestamp = base_date() + Duration::days(offset);
        let label = label_for(timestamp, &boundary);

        if timestamp > boundary.train_end && timestamp < boundary.test_start {
            prop_assert_eq!(label, SplitLabel::Gap);
        } else {
            prop_assert_ne!(label, SplitLabel::Gap);
        }
    }

    // A record without a matured outcome never lands in train or test.
    #[test]
    fn prop_unmatured_outcomes_never_train_or_test(
        boundary in arb_boundary(),
        offsets in prop::collection::vec(0i64..900, 1..40),
    ) {
        let records: Vec<SplitInput> = offsets
            .iter()
            .enumerate()
            .map(|(i, &off)| SplitInput {
                record_id: format!("r{i}"),
                timestamp: base_date() + Duration::days(off),
                outcome: None,
            })
            .collect();
        let config = SplitConfig {
            boundary,
            minimum_gap_days: 0,
            strict_gap: true,
            max_rate_drift: 0.30,
        };
        let run = classify(&records, &config).expect("generated boundaries are valid");

        for labeled in &run.records {
            prop_assert_ne!(labeled.label, SplitLabel::Train);
            prop_assert_ne!(labeled.label, SplitLabel::Test);
        }
        prop_assert_eq!(run.report.train.records, 0);
        prop_assert_eq!(run.report.test.records, 0);
    }
}
