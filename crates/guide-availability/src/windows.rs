//! Compute open booking windows from availability periods.
//!
//! Walks the available dates of a window and groups consecutive days into
//! maximal runs, clipped to the window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enumerate::available_dates;
use crate::model::AvailabilityPeriod;
use crate::policy::UnlistedPolicy;
use crate::range::is_range_available;

/// A run of consecutive available days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindow {
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    pub days: i64,
}

impl OpenWindow {
    fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
            days: 1,
        }
    }
}

/// Find open windows within `[window_start, window_end]`, sorted by start.
pub fn find_open_windows(
    periods: &[AvailabilityPeriod],
    window_start: NaiveDate,
    window_end: NaiveDate,
    policy: UnlistedPolicy,
) -> Vec<OpenWindow> {
    let mut windows: Vec<OpenWindow> = Vec::new();

    for day in available_dates(periods, window_start, window_end, policy) {
        if let Some(last) = windows.last_mut() {
            if last.end.succ_opt() == Some(day) {
                // Consecutive -- extend the current run.
                last.end = day;
                last.days += 1;
                continue;
            }
        }
        windows.push(OpenWindow::single(day));
    }

    windows
}

/// Find the first open window of at least `min_days` within the window.
///
/// Delegates to [`find_open_windows`]. Runs are clipped to the window, so a
/// run that continues past `window_end` only counts its in-window days.
pub fn find_first_open_window(
    periods: &[AvailabilityPeriod],
    window_start: NaiveDate,
    window_end: NaiveDate,
    policy: UnlistedPolicy,
    min_days: i64,
) -> Option<OpenWindow> {
    find_open_windows(periods, window_start, window_end, policy)
        .into_iter()
        .find(|w| w.days >= min_days)
}

/// Every date in `[window_start, window_end]` from which a tour of
/// `duration_days` is fully available. The tour itself may run past
/// `window_end`.
pub fn tour_start_dates(
    periods: &[AvailabilityPeriod],
    window_start: NaiveDate,
    window_end: NaiveDate,
    duration_days: u32,
    policy: UnlistedPolicy,
) -> Vec<NaiveDate> {
    available_dates(periods, window_start, window_end, policy)
        .filter(|day| is_range_available(periods, *day, duration_days, policy))
        .collect()
}
