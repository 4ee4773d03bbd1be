//! Reconcile a guide's two availability representations.
//!
//! `availabilityPeriods` drives the public booking calendar while
//! `unavailableDates` drives admin assignment. Nothing keeps them in sync, so
//! this module lays both out day by day and reports where they disagree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Guide;
use crate::policy::{AvailabilitySource, UnlistedPolicy};
use crate::resolver::resolve_with;

/// Both representations' verdict for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    /// Resolution through the period list.
    pub by_periods: bool,
    /// The day appears in `unavailableDates`.
    pub listed_unavailable: bool,
}

impl DayStatus {
    /// Effective availability under `source`.
    pub fn is_free(&self, source: AvailabilitySource) -> bool {
        match source {
            AvailabilitySource::UnavailableDates => !self.listed_unavailable,
            AvailabilitySource::Periods => self.by_periods,
            AvailabilitySource::Combined => self.by_periods && !self.listed_unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// Blocked by `unavailableDates` yet open according to the periods. The
    /// public calendar offers a day the assignment flow refuses.
    BlockedButOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub date: NaiveDate,
    pub kind: DiscrepancyKind,
}

/// Day-by-day view of a guide's availability over a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reconciliation {
    pub guide_profile_id: String,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub days: Vec<DayStatus>,
    pub discrepancies: Vec<Discrepancy>,
}

impl Reconciliation {
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Dates free under `source`, in calendar order.
    pub fn free_dates(&self, source: AvailabilitySource) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.is_free(source))
            .map(|d| d.date)
            .collect()
    }
}

/// Lay out both representations over `[window_start, window_end]`.
///
/// An inverted window produces an empty reconciliation.
///
/// A day covered by no period and absent from `unavailableDates` is the normal
/// unlisted case and is not a discrepancy.
pub fn reconcile(
    guide: &Guide,
    window_start: NaiveDate,
    window_end: NaiveDate,
    policy: UnlistedPolicy,
) -> Reconciliation {
    let mut days = Vec::new();
    let mut discrepancies = Vec::new();

    let mut cursor = (window_start <= window_end).then_some(window_start);
    while let Some(date) = cursor.filter(|d| *d <= window_end) {
        let status = DayStatus {
            date,
            by_periods: resolve_with(&guide.availability_periods, date, policy),
            listed_unavailable: guide.unavailable_dates.contains(&date),
        };
        if status.by_periods && status.listed_unavailable {
            discrepancies.push(Discrepancy {
                date,
                kind: DiscrepancyKind::BlockedButOpen,
            });
        }
        days.push(status);
        cursor = date.succ_opt();
    }

    Reconciliation {
        guide_profile_id: guide.guide_profile_id.clone(),
        window_start,
        window_end,
        days,
        discrepancies,
    }
}

/// Whether `guide` is free for every day of `[start, end]` under `source`.
///
/// This is the date predicate shared by matching and booking creation. An
/// inverted range is never free.
pub fn is_free_between(
    guide: &Guide,
    start: NaiveDate,
    end: NaiveDate,
    source: AvailabilitySource,
    policy: UnlistedPolicy,
) -> bool {
    if end < start {
        return false;
    }
    let by_blocked_list = || !guide.has_blocked_date_between(start, end);
    let by_periods = || {
        let days = (end - start).num_days() + 1;
        u32::try_from(days).is_ok_and(|days| {
            crate::range::is_range_available(&guide.availability_periods, start, days, policy)
        })
    };
    match source {
        AvailabilitySource::UnavailableDates => by_blocked_list(),
        AvailabilitySource::Periods => by_periods(),
        AvailabilitySource::Combined => by_blocked_list() && by_periods(),
    }
}
