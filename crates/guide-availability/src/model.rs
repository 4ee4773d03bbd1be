//! Guide records and their availability periods.
//!
//! Field names follow the marketplace API's camelCase JSON so guide lists can
//! be deserialized straight from a backend response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::policy::UnlistedPolicy;

/// An inclusive date range flagged available or unavailable as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available: bool,
}

impl AvailabilityPeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, available: bool) -> Self {
        Self {
            start_date,
            end_date,
            available,
        }
    }

    /// True when `date` falls inside the inclusive range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days covered. Zero for an inverted period.
    pub fn days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

/// A guide as listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    /// Stable external identifier, distinct from the storage `_id`.
    pub guide_profile_id: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    /// Ordered; the first period containing a date decides it.
    #[serde(default)]
    pub availability_periods: Vec<AvailabilityPeriod>,
    #[serde(default)]
    pub unavailable_dates: Vec<NaiveDate>,
}

impl Guide {
    pub fn new(guide_profile_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guide_profile_id: guide_profile_id.into(),
            internal_id: None,
            name: name.into(),
            languages: Vec::new(),
            specializations: Vec::new(),
            state: String::new(),
            country: String::new(),
            rating: 0.0,
            review_count: 0,
            availability_periods: Vec::new(),
            unavailable_dates: Vec::new(),
        }
    }

    /// Single-date resolution, with `policy` deciding dates no period covers.
    pub fn is_available_on(&self, date: NaiveDate, policy: UnlistedPolicy) -> bool {
        crate::resolver::resolve_with(&self.availability_periods, date, policy)
    }

    /// True when any listed unavailable date lies in `[start, end]`.
    pub fn has_blocked_date_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.unavailable_dates
            .iter()
            .any(|d| start <= *d && *d <= end)
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages
            .iter()
            .any(|l| eq_ignore_case(l, language))
    }
}

/// Unicode-aware, whitespace-tolerant equality for free-text attributes.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `GuideError::InvalidDate` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| GuideError::InvalidDate(s.to_string()))
}

/// Parse a JSON array of guides.
pub fn guides_from_json(json: &str) -> Result<Vec<Guide>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_marketplace_json() {
        let json = r#"{
            "_id": "64f0",
            "guideProfileId": "GP-1",
            "name": "Asha",
            "languages": ["English", "Hindi"],
            "availabilityPeriods": [
                {"startDate": "2025-11-01", "endDate": "2025-11-10", "available": true}
            ],
            "unavailableDates": ["2025-11-04"]
        }"#;
        let guide: Guide = serde_json::from_str(json).unwrap();
        assert_eq!(guide.guide_profile_id, "GP-1");
        assert_eq!(guide.internal_id.as_deref(), Some("64f0"));
        assert_eq!(guide.availability_periods[0].days(), 10);
        assert!(guide.specializations.is_empty());
        assert_eq!(guide.unavailable_dates, vec![parse_date("2025-11-04").unwrap()]);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(matches!(parse_date("2025-13-01"), Err(GuideError::InvalidDate(_))));
        assert!(matches!(parse_date("next week"), Err(GuideError::InvalidDate(_))));
        assert_eq!(
            parse_date(" 2026-02-28 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn speaks_is_case_insensitive() {
        let mut guide = Guide::new("GP-2", "Leo");
        guide.languages = vec!["French".into()];
        assert!(guide.speaks("french"));
        assert!(guide.speaks(" FRENCH "));
        assert!(!guide.speaks("German"));
    }
}
