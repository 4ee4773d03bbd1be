//! Tests for open-window computation and overlap detection.

use chrono::NaiveDate;
use guide_availability::{
    find_first_open_window, find_open_windows, find_period_overlaps, parse_date, tour_start_dates,
    validate_periods, AvailabilityPeriod, GuideError, UnlistedPolicy,
};

fn d(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

fn period(start: &str, end: &str, available: bool) -> AvailabilityPeriod {
    AvailabilityPeriod::new(d(start), d(end), available)
}

const CLOSED: UnlistedPolicy = UnlistedPolicy::Unavailable;

// ── Open windows ────────────────────────────────────────────────────────────

#[test]
fn adjacent_open_periods_merge_into_one_window() {
    let periods = vec![
        period("2026-03-01", "2026-03-04", true),
        period("2026-03-05", "2026-03-07", true),
    ];
    let windows = find_open_windows(&periods, d("2026-03-01"), d("2026-03-31"), CLOSED);

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, d("2026-03-01"));
    assert_eq!(windows[0].end, d("2026-03-07"));
    assert_eq!(windows[0].days, 7);
}

#[test]
fn closed_block_splits_windows() {
    let periods = vec![
        period("2026-03-01", "2026-03-10", true),
        period("2026-03-04", "2026-03-05", false),
    ];
    // The open period is listed first, so it shadows the closed block.
    let shadowed = find_open_windows(&periods, d("2026-03-01"), d("2026-03-10"), CLOSED);
    assert_eq!(shadowed.len(), 1);

    let reordered = vec![periods[1].clone(), periods[0].clone()];
    let windows = find_open_windows(&reordered, d("2026-03-01"), d("2026-03-10"), CLOSED);
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].days, 3); // 1-3
    assert_eq!(windows[1].days, 5); // 6-10
}

#[test]
fn windows_are_clipped_to_the_query_window() {
    let periods = vec![period("2026-03-01", "2026-03-31", true)];
    let windows = find_open_windows(&periods, d("2026-03-10"), d("2026-03-12"), CLOSED);
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, d("2026-03-10"));
    assert_eq!(windows[0].days, 3);
}

#[test]
fn no_periods_means_no_windows_unless_open_world() {
    assert!(find_open_windows(&[], d("2026-03-01"), d("2026-03-05"), CLOSED).is_empty());

    let open = find_open_windows(&[], d("2026-03-01"), d("2026-03-05"), UnlistedPolicy::Available);
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].days, 5);
}

#[test]
fn first_window_respects_minimum_length() {
    let periods = vec![
        period("2026-04-01", "2026-04-02", true),
        period("2026-04-05", "2026-04-12", true),
    ];
    let (from, to) = (d("2026-04-01"), d("2026-04-30"));
    let first = find_first_open_window(&periods, from, to, CLOSED, 3).unwrap();
    assert_eq!(first.start, d("2026-04-05"));
    assert_eq!(first.days, 8);

    assert!(find_first_open_window(&periods, from, to, CLOSED, 9).is_none());
}

#[test]
fn tour_start_dates_need_the_full_duration() {
    let periods = vec![
        period("2025-11-01", "2025-11-10", true),
        period("2025-11-11", "2025-11-15", false),
    ];
    let starts = tour_start_dates(&periods, d("2025-11-01"), d("2025-11-15"), 5, CLOSED);
    assert_eq!(starts.first(), Some(&d("2025-11-01")));
    assert_eq!(starts.last(), Some(&d("2025-11-06")));
    assert_eq!(starts.len(), 6);
}

// ── Overlaps ────────────────────────────────────────────────────────────────

#[test]
fn adjacent_periods_do_not_overlap() {
    let periods = vec![
        period("2025-11-01", "2025-11-10", true),
        period("2025-11-11", "2025-11-15", false),
    ];
    assert!(find_period_overlaps(&periods).is_empty());
    assert!(validate_periods(&periods).is_ok());
}

#[test]
fn shared_boundary_day_is_an_overlap() {
    let periods = vec![
        period("2025-11-01", "2025-11-10", true),
        period("2025-11-10", "2025-11-15", false),
    ];
    let overlaps = find_period_overlaps(&periods);
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].overlap_days, 1);
    assert!(overlaps[0].contradictory);
}

#[test]
fn all_pairs_are_reported() {
    let periods = vec![
        period("2025-11-01", "2025-11-30", true),
        period("2025-11-05", "2025-11-06", true),
        period("2025-11-20", "2025-12-10", false),
    ];
    let overlaps = find_period_overlaps(&periods);
    assert_eq!(overlaps.len(), 2);
    assert_eq!((overlaps[0].first, overlaps[0].second), (0, 1));
    assert_eq!(overlaps[0].overlap_days, 2);
    assert!(!overlaps[0].contradictory);
    assert_eq!((overlaps[1].first, overlaps[1].second), (0, 2));
    assert_eq!(overlaps[1].overlap_days, 11);
}

#[test]
fn validation_rejects_inverted_then_overlapping() {
    let inverted = vec![period("2025-11-10", "2025-11-01", true)];
    assert_eq!(inverted[0].days(), 0);
    assert!(matches!(validate_periods(&inverted), Err(GuideError::InvalidPeriod { .. })));

    let single_day = vec![period("2025-11-10", "2025-11-10", true)];
    assert_eq!(single_day[0].days(), 1);
    assert!(validate_periods(&single_day).is_ok());

    let overlapping = vec![
        period("2025-11-01", "2025-11-10", true),
        period("2025-11-08", "2025-11-12", true),
    ];
    assert!(matches!(
        validate_periods(&overlapping),
        Err(GuideError::OverlappingPeriods { first: 0, second: 1, days: 3 })
    ));
}
