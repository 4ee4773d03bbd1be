//! Detect overlapping availability periods.
//!
//! Resolution lets the earlier period win, so an overlap silently hides part of
//! the later one. Periods are inclusive on both ends: two periods that share a
//! single boundary day DO overlap, while `..11-10` and `11-11..` are adjacent
//! and do not.

use crate::error::{GuideError, Result};
use crate::model::AvailabilityPeriod;

/// Two periods sharing at least one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodOverlap {
    /// Index of the earlier-listed period (the one that wins).
    pub first: usize,
    /// Index of the later-listed, partially shadowed period.
    pub second: usize,
    pub overlap_days: i64,
    /// The two periods disagree on availability for the shared days.
    pub contradictory: bool,
}

/// Find all pairwise overlaps within one guide's period list.
pub fn find_period_overlaps(periods: &[AvailabilityPeriod]) -> Vec<PeriodOverlap> {
    let mut overlaps = Vec::new();

    for (i, a) in periods.iter().enumerate() {
        for (j, b) in periods.iter().enumerate().skip(i + 1) {
            if a.start_date <= b.end_date && b.start_date <= a.end_date {
                let overlap_start = a.start_date.max(b.start_date);
                let overlap_end = a.end_date.min(b.end_date);
                let overlap_days = (overlap_end - overlap_start).num_days() + 1;
                if overlap_days <= 0 {
                    // One side is inverted; reported by `validate_periods`.
                    continue;
                }

                overlaps.push(PeriodOverlap {
                    first: i,
                    second: j,
                    overlap_days,
                    contradictory: a.available != b.available,
                });
            }
        }
    }

    overlaps
}

/// Reject inverted or overlapping periods.
///
/// # Errors
/// Returns `GuideError::InvalidPeriod` for the first period ending before it
/// starts, otherwise `GuideError::OverlappingPeriods` for the first overlap.
pub fn validate_periods(periods: &[AvailabilityPeriod]) -> Result<()> {
    if let Some(p) = periods.iter().find(|p| p.days() == 0) {
        return Err(GuideError::InvalidPeriod {
            start: p.start_date,
            end: p.end_date,
        });
    }
    if let Some(o) = find_period_overlaps(periods).into_iter().next() {
        return Err(GuideError::OverlappingPeriods {
            first: o.first,
            second: o.second,
            days: o.overlap_days,
        });
    }
    Ok(())
}
