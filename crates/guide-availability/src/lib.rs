//! # guide-availability
//!
//! Guide availability resolution and booking-eligibility matching for a tour
//! marketplace.
//!
//! Every operation is a pure, synchronous function over in-memory guide
//! records. Dates are calendar dates (`chrono::NaiveDate`); periods are
//! inclusive on both ends.
//!
//! ## Quick start
//!
//! ```rust
//! use guide_availability::{parse_date, resolve, AvailabilityPeriod};
//!
//! let d = |s| parse_date(s).unwrap();
//! let periods = vec![
//!     AvailabilityPeriod::new(d("2025-11-01"), d("2025-11-10"), true),
//!     AvailabilityPeriod::new(d("2025-11-11"), d("2025-11-15"), false),
//! ];
//! assert!(resolve(&periods, d("2025-11-05")));
//! assert!(!resolve(&periods, d("2025-11-12")));
//! // Dates no period covers are unavailable.
//! assert!(!resolve(&periods, d("2025-12-01")));
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] — single-date resolution over ordered periods
//! - [`range`] — contiguous N-day range checks
//! - [`enumerate`] — lazy enumeration of available dates in a window
//! - [`matching`] — guide search, substitute and custom-request matching
//! - [`windows`] — open booking windows and tour start dates
//! - [`overlap`] — overlapping-period detection and validation
//! - [`reconcile`] — periods vs. blocked-date list, day by day
//! - [`booking`] — pricing, booking creation and status changes
//! - [`repository`] — guide storage seam
//! - [`policy`] — unlisted-date policy and engine options
//! - [`error`] — Error types

pub mod booking;
pub mod enumerate;
pub mod error;
pub mod matching;
pub mod model;
pub mod overlap;
pub mod policy;
pub mod range;
pub mod reconcile;
pub mod repository;
pub mod resolver;
pub mod windows;

pub use booking::{quote, Booking, BookingRequest, BookingStatus, Quote};
pub use enumerate::{available_dates, try_available_dates, AvailableDates};
pub use error::GuideError;
pub use matching::{
    filter_guides, find_substitutes, match_custom_request, search_guides, CustomTourRequest,
    GuideFilter, GuidePredicate,
};
pub use model::{guides_from_json, parse_date, AvailabilityPeriod, Guide};
pub use overlap::{find_period_overlaps, validate_periods, PeriodOverlap};
pub use policy::{AvailabilitySource, EngineOptions, UnlistedPolicy};
pub use range::{check_range, is_range_available};
pub use reconcile::{is_free_between, reconcile, Reconciliation};
pub use repository::{GuideRepository, InMemoryGuideRepository};
pub use resolver::{resolve, resolve_with};
pub use windows::{find_first_open_window, find_open_windows, tour_start_dates, OpenWindow};
