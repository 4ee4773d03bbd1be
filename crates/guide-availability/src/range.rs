//! Contiguous range availability checks.

use chrono::{Days, NaiveDate};

use crate::error::{GuideError, Result};
use crate::model::AvailabilityPeriod;
use crate::policy::UnlistedPolicy;
use crate::resolver::resolve_with;

/// Check that every day in `[start, start + duration_days)` resolves available.
///
/// Stops at the first unavailable day. A zero-day range is never bookable and
/// returns `false`; a range running past the last representable date is
/// unavailable.
pub fn is_range_available(
    periods: &[AvailabilityPeriod],
    start: NaiveDate,
    duration_days: u32,
    policy: UnlistedPolicy,
) -> bool {
    if duration_days == 0 {
        return false;
    }
    (0..u64::from(duration_days)).all(|offset| {
        start
            .checked_add_days(Days::new(offset))
            .is_some_and(|day| resolve_with(periods, day, policy))
    })
}

/// Like [`is_range_available`], but rejects a zero-day range instead of
/// answering `false`.
///
/// # Errors
/// Returns `GuideError::InvalidDuration` when `duration_days` is zero.
pub fn check_range(
    periods: &[AvailabilityPeriod],
    start: NaiveDate,
    duration_days: u32,
    policy: UnlistedPolicy,
) -> Result<bool> {
    if duration_days == 0 {
        return Err(GuideError::InvalidDuration);
    }
    Ok(is_range_available(periods, start, duration_days, policy))
}

/// Last day of a `duration_days` range starting at `start`, if representable.
pub fn range_end(start: NaiveDate, duration_days: u32) -> Option<NaiveDate> {
    let span = u64::from(duration_days.checked_sub(1)?);
    start.checked_add_days(Days::new(span))
}
