//! AS OF resolution — which interval was in force at a query date.

use chrono::NaiveDate;

use asof_core::config::TimelineConfig;
use asof_core::errors::TimelineError;
use asof_core::models::{GapPolicy, Interval, Resolution};

use crate::store::IntervalStore;

/// Resolve an entity's state as of a query date.
///
/// The candidate set is filtered on `start_date <= as_of` before any other
/// logic runs — a future interval can never leak backward, by
/// construction. Among candidates the winner has the greatest
/// `start_date`, ties broken by preferring the later (or absent) end date;
/// the tie-break is total, so resolution is deterministic.
///
/// When the winner ended before `as_of`:
/// - `Strict` voids the resolution (`Unknown`);
/// - `GapTolerant` returns `Gapped` with the gap size, provided the gap is
///   within `config.gap_tolerance_days`. Beyond the tolerance the record
///   is as good as unknown — the knob exists to recover facts the log
///   closed a few days before recording their successor, not to project
///   stale state indefinitely.
///
/// Queries before `config.date_floor` fail with `InvalidQuery` so the
/// caller can apply an explicit floor policy.
pub fn resolve(
    store: &IntervalStore,
    config: &TimelineConfig,
    entity_id: &str,
    as_of: NaiveDate,
    policy: GapPolicy,
) -> Result<Resolution, TimelineError> {
    if as_of < config.date_floor {
        return Err(TimelineError::InvalidQuery {
            entity_id: entity_id.to_string(),
            as_of,
            floor: config.date_floor,
        });
    }

    let timeline = store.intervals_for(entity_id);
    let candidate = latest_on_or_before(&timeline, as_of);

    let Some(interval) = candidate else {
        return Ok(Resolution::Unknown);
    };

    if interval.covers(as_of) {
        return Ok(Resolution::Active {
            interval: interval.clone(),
        });
    }

    match policy {
        GapPolicy::Strict => Ok(Resolution::Unknown),
        GapPolicy::GapTolerant => {
            // covers() was false and start <= as_of, so an end exists and
            // precedes as_of.
            match interval.gap_days_to(as_of) {
                Some(gap_days) if gap_days <= config.gap_tolerance_days => {
                    Ok(Resolution::Gapped {
                        last_known: interval.clone(),
                        gap_days,
                    })
                }
                _ => Ok(Resolution::Unknown),
            }
        }
    }
}

/// The interval with the greatest `start_date <= as_of`, ties broken by
/// the greatest end date with open intervals ranked above all closed ones.
///
/// Relies on `intervals_for` returning the timeline sorted by exactly that
/// key: the last qualifying element is the winner.
fn latest_on_or_before<'a>(
    timeline: &[&'a Interval],
    as_of: NaiveDate,
) -> Option<&'a Interval> {
    timeline
        .iter()
        .rev()
        .find(|iv| iv.start_date <= as_of)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use asof_core::models::IntervalPayload;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn employment(entity: &str, start: &str, end: Option<&str>, firm: &str) -> Interval {
        Interval {
            entity_id: entity.to_string(),
            start_date: d(start),
            end_date: end.map(d),
            counterparty_id: Some(firm.to_string()),
            payload: IntervalPayload::Employment {
                title: None,
                branch_state: None,
            },
        }
    }

    fn store_with(intervals: Vec<Interval>) -> IntervalStore {
        let mut store = IntervalStore::new();
        for iv in intervals {
            store.put(iv).unwrap();
        }
        store
    }

    fn floorless_config() -> TimelineConfig {
        TimelineConfig {
            date_floor: NaiveDate::MIN,
            ..TimelineConfig::default()
        }
    }

    #[test]
    fn ties_prefer_the_open_interval() {
        let store = store_with(vec![
            employment("A1", "2024-03-01", Some("2024-03-11"), "F1"),
            employment("A1", "2024-03-01", None, "F2"),
        ]);
        let config = floorless_config();

        for _ in 0..3 {
            let r = resolve(&store, &config, "A1", d("2024-03-01"), GapPolicy::Strict).unwrap();
            assert_eq!(r.counterparty(), Some("F2"));
        }
    }

    #[test]
    fn ties_between_closed_intervals_prefer_the_later_end() {
        let store = store_with(vec![
            employment("A1", "2024-03-01", Some("2024-03-05"), "F1"),
            employment("A1", "2024-03-01", Some("2024-03-20"), "F2"),
        ]);
        let config = floorless_config();

        let r = resolve(&store, &config, "A1", d("2024-03-01"), GapPolicy::Strict).unwrap();
        assert_eq!(r.counterparty(), Some("F2"));
    }

    #[test]
    fn gap_beyond_tolerance_is_unknown() {
        let store = store_with(vec![employment(
            "A1",
            "2024-01-01",
            Some("2024-02-01"),
            "F1",
        )]);
        let config = TimelineConfig {
            gap_tolerance_days: 30,
            ..floorless_config()
        };

        let r = resolve(&store, &config, "A1", d("2024-03-03"), GapPolicy::GapTolerant).unwrap();
        assert_eq!(r, Resolution::Unknown);

        let r = resolve(&store, &config, "A1", d("2024-03-01"), GapPolicy::GapTolerant).unwrap();
        assert!(matches!(r, Resolution::Gapped { gap_days: 29, .. }));
    }

    #[test]
    fn query_before_floor_is_rejected() {
        let store = store_with(vec![employment("A1", "2024-03-01", None, "F1")]);
        let config = TimelineConfig::default();

        let err = resolve(&store, &config, "A1", d("2024-01-15"), GapPolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, TimelineError::InvalidQuery { .. }));
    }
}
