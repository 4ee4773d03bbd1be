//! Resolution policies and engine options.

use serde::{Deserialize, Serialize};

/// What a date covered by no availability period resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlistedPolicy {
    /// Closed world: a date nobody listed cannot be booked.
    #[default]
    Unavailable,
    /// Open world: only explicitly closed periods block a date.
    Available,
}

impl UnlistedPolicy {
    pub fn as_bool(self) -> bool {
        matches!(self, UnlistedPolicy::Available)
    }
}

/// Which availability representation a date-range predicate consults.
///
/// Guides carry both `availabilityPeriods` and `unavailableDates`, and the two
/// are not kept in sync. Public display paths read the periods while
/// assignment paths read the blocked-date list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilitySource {
    /// Free unless a listed unavailable date falls inside the range.
    #[default]
    UnavailableDates,
    /// Free only if every day resolves available through the periods.
    Periods,
    /// Both of the above must hold.
    Combined,
}

/// Engine-wide knobs, loadable from a JSON config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub unlisted_policy: UnlistedPolicy,
    pub availability_source: AvailabilitySource,
}

impl EngineOptions {
    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_closed_world_and_blocked_dates() {
        let options = EngineOptions::default();
        assert_eq!(options.unlisted_policy, UnlistedPolicy::Unavailable);
        assert_eq!(options.availability_source, AvailabilitySource::UnavailableDates);
    }

    #[test]
    fn parses_partial_config() {
        let options = EngineOptions::from_json(r#"{"availability_source": "combined"}"#).unwrap();
        assert_eq!(options.availability_source, AvailabilitySource::Combined);
        assert_eq!(options.unlisted_policy, UnlistedPolicy::Unavailable);

        assert!(EngineOptions::from_json(r#"{"unlisted_policy": "maybe"}"#).is_err());
    }
}
