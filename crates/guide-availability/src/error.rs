//! Error types for guide-availability operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::BookingStatus;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid window: end {end} is before start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Invalid duration: a range must cover at least one day")]
    InvalidDuration,

    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Periods {first} and {second} overlap by {days} day(s)")]
    OverlappingPeriods {
        first: usize,
        second: usize,
        days: i64,
    },

    #[error("Guide not found: {0}")]
    GuideNotFound(String),

    #[error("Guide {guide} is not available from {start} for {days} day(s)")]
    GuideUnavailable {
        guide: String,
        start: NaiveDate,
        days: u32,
    },

    #[error("Invalid traveler count: at least one traveler is required")]
    InvalidTravelers,

    #[error("Invalid discount: {0}% exceeds 100%")]
    InvalidDiscount(u8),

    #[error("Price overflow")]
    PriceOverflow,

    #[error("Cannot move booking from {from:?} to {to:?}")]
    InvalidTransition { from: BookingStatus, to: BookingStatus },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;
