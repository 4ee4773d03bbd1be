//! Enumerate the individual available dates of a window.
//!
//! [`available_dates`] returns a lazy iterator borrowing the period list. Each
//! call starts from the window start, so the sequence can be rebuilt (or the
//! iterator cloned) any number of times.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::error::{GuideError, Result};
use crate::model::AvailabilityPeriod;
use crate::policy::UnlistedPolicy;
use crate::resolver::resolve_with;

/// Available dates of `[start, end]` in calendar order.
#[derive(Debug, Clone)]
pub struct AvailableDates<'a> {
    periods: &'a [AvailabilityPeriod],
    policy: UnlistedPolicy,
    /// Next date to examine; `None` once the window is exhausted.
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for AvailableDates<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while let Some(day) = self.cursor {
            if day > self.end {
                self.cursor = None;
                break;
            }
            self.cursor = day.succ_opt();
            if resolve_with(self.periods, day, self.policy) {
                return Some(day);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Some(day) if day <= self.end => {
                let remaining = (self.end - day).num_days() + 1;
                (0, usize::try_from(remaining).ok())
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for AvailableDates<'_> {}

/// Lazily yield every date in `[start, end]` that resolves available.
///
/// An inverted window (`end < start`) yields nothing.
pub fn available_dates(
    periods: &[AvailabilityPeriod],
    start: NaiveDate,
    end: NaiveDate,
    policy: UnlistedPolicy,
) -> AvailableDates<'_> {
    AvailableDates {
        periods,
        policy,
        cursor: (start <= end).then_some(start),
        end,
    }
}

/// Like [`available_dates`], but rejects an inverted window.
///
/// # Errors
/// Returns `GuideError::InvalidWindow` when `end < start`.
pub fn try_available_dates(
    periods: &[AvailabilityPeriod],
    start: NaiveDate,
    end: NaiveDate,
    policy: UnlistedPolicy,
) -> Result<AvailableDates<'_>> {
    if end < start {
        return Err(GuideError::InvalidWindow { start, end });
    }
    Ok(available_dates(periods, start, end, policy))
}

/// Render dates as ISO strings, the form the booking calendar consumes.
pub fn to_iso_strings(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<String> {
    dates
        .into_iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}
