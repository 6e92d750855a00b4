//! Trailing-window transition counting.

use asof_timeline::window::count_transitions;
use test_fixtures::{d, employment, store_with};

#[test]
fn firm_roster_scenario_nets_to_zero() {
    // F2 gained A1 on 2023-07-15 and lost A2 on 2023-09-01.
    let store = store_with(vec![
        employment("A1", "2023-07-15", None, "F2"),
        employment("A2", "2022-04-01", Some("2023-09-01"), "F2"),
    ]);

    let counts = count_transitions(&store, "F2", d("2023-10-01"), 90);
    assert_eq!(counts.arrivals, 1);
    assert_eq!(counts.departures, 1);
    assert_eq!(counts.net_change(), 0);
}

#[test]
fn interval_starting_the_day_after_as_of_is_never_counted() {
    let store = store_with(vec![employment("A1", "2023-10-02", None, "F2")]);

    for window_days in [1, 30, 365, 100_000] {
        let counts = count_transitions(&store, "F2", d("2023-10-01"), window_days);
        assert_eq!(counts.arrivals, 0, "window of {window_days} days leaked");
    }
}

#[test]
fn end_after_as_of_is_not_a_departure_yet() {
    // The spell ends two weeks after the query date; as of the query date
    // that departure has not happened.
    let store = store_with(vec![employment(
        "A2",
        "2022-04-01",
        Some("2023-10-15"),
        "F2",
    )]);

    let counts = count_transitions(&store, "F2", d("2023-10-01"), 365);
    assert_eq!(counts.departures, 0);
}

#[test]
fn departures_ignore_open_intervals_entirely() {
    let store = store_with(vec![
        employment("A1", "2015-01-01", None, "F2"),
        employment("A2", "2016-01-01", None, "F2"),
    ]);

    let counts = count_transitions(&store, "F2", d("2023-10-01"), 3650);
    assert_eq!(counts.departures, 0);
}

#[test]
fn unknown_counterparty_returns_zeros_not_an_error() {
    let store = store_with(vec![]);
    let counts = count_transitions(&store, "F404", d("2023-10-01"), 365);
    assert_eq!((counts.arrivals, counts.departures), (0, 0));
}
