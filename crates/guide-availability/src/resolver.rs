//! Single-date availability resolution.
//!
//! Periods are walked in list order and the first period whose inclusive range
//! contains the date decides it. Overlapping periods are therefore resolved by
//! position, not by specificity. A date no period covers falls back to the
//! [`UnlistedPolicy`], which defaults to unavailable.

use chrono::NaiveDate;

use crate::model::AvailabilityPeriod;
use crate::policy::UnlistedPolicy;

/// Resolve `date` against `periods` under the closed-world default.
pub fn resolve(periods: &[AvailabilityPeriod], date: NaiveDate) -> bool {
    resolve_with(periods, date, UnlistedPolicy::default())
}

/// Resolve `date` against `periods`, using `policy` for uncovered dates.
pub fn resolve_with(
    periods: &[AvailabilityPeriod],
    date: NaiveDate,
    policy: UnlistedPolicy,
) -> bool {
    periods
        .iter()
        .find(|p| p.contains(date))
        .map_or(policy.as_bool(), |p| p.available)
}
