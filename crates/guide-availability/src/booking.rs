//! Booking creation, pricing and status changes.
//!
//! Prices are integer cents. A booking is only created for a guide free for
//! the whole tour under the configured [`AvailabilitySource`].
//!
//! [`AvailabilitySource`]: crate::policy::AvailabilitySource

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GuideError, Result};
use crate::model::Guide;
use crate::policy::EngineOptions;
use crate::range::range_end;
use crate::reconcile::is_free_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Price breakdown for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub subtotal_cents: u64,
    pub discount_cents: u64,
    pub total_cents: u64,
}

/// Price `travelers` seats at `unit_price_cents` with a percentage discount.
///
/// The discount is rounded down to whole cents.
///
/// # Errors
/// `InvalidTravelers` for zero travelers, `InvalidDiscount` above 100%, and
/// `PriceOverflow` when the subtotal does not fit in a `u64`.
pub fn quote(unit_price_cents: u64, travelers: u32, discount_percent: u8) -> Result<Quote> {
    if travelers == 0 {
        return Err(GuideError::InvalidTravelers);
    }
    if discount_percent > 100 {
        return Err(GuideError::InvalidDiscount(discount_percent));
    }
    let subtotal_cents = unit_price_cents
        .checked_mul(u64::from(travelers))
        .ok_or(GuideError::PriceOverflow)?;
    // Widen so `subtotal * pct` cannot overflow before the division.
    let discount = u128::from(subtotal_cents) * u128::from(discount_percent) / 100;
    let discount_cents = u64::try_from(discount).map_err(|_| GuideError::PriceOverflow)?;
    Ok(Quote {
        subtotal_cents,
        discount_cents,
        total_cents: subtotal_cents - discount_cents,
    })
}

/// What checkout submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub tour_id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub duration_days: u32,
    pub travelers: u32,
    pub unit_price_cents: u64,
    #[serde(default)]
    pub discount_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub tour_id: String,
    pub guide_profile_id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub total_price_cents: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create an upcoming booking of `guide` for `request`.
    ///
    /// The id is derived from `now` (`BK-<unix millis>`).
    ///
    /// # Errors
    /// `InvalidDuration` for a zero-day tour, `GuideUnavailable` when the guide
    /// is not free for the whole tour, plus any [`quote`] error.
    pub fn create(
        request: &BookingRequest,
        guide: &Guide,
        options: &EngineOptions,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if request.duration_days == 0 {
            return Err(GuideError::InvalidDuration);
        }
        let unavailable = || GuideError::GuideUnavailable {
            guide: guide.guide_profile_id.clone(),
            start: request.start_date,
            days: request.duration_days,
        };

        // A tour running past the last representable date is never free.
        let end_date =
            range_end(request.start_date, request.duration_days).ok_or_else(unavailable)?;

        if !is_free_between(
            guide,
            request.start_date,
            end_date,
            options.availability_source,
            options.unlisted_policy,
        ) {
            return Err(unavailable());
        }

        let price = quote(
            request.unit_price_cents,
            request.travelers,
            request.discount_percent,
        )?;

        let booking = Booking {
            id: format!("BK-{}", now.timestamp_millis()),
            tour_id: request.tour_id.clone(),
            guide_profile_id: guide.guide_profile_id.clone(),
            user_id: request.user_id.clone(),
            start_date: request.start_date,
            end_date,
            travelers: request.travelers,
            total_price_cents: price.total_cents,
            status: BookingStatus::Upcoming,
            created_at: now,
        };
        debug!(id = %booking.id, guide = %booking.guide_profile_id, "created booking");
        Ok(booking)
    }

    pub fn complete(&mut self) -> Result<()> {
        self.transition(BookingStatus::Completed)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.transition(BookingStatus::Cancelled)
    }

    /// Only upcoming bookings move, and only to a terminal status.
    fn transition(&mut self, to: BookingStatus) -> Result<()> {
        if self.status != BookingStatus::Upcoming || to == BookingStatus::Upcoming {
            return Err(GuideError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}
