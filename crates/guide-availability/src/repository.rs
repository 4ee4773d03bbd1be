//! Guide storage seam.
//!
//! Matching and availability work on plain slices; the repository only owns
//! the guide list and answers lookups, so a backend-backed implementation can
//! replace the in-memory one without touching the logic.

use tracing::{debug, warn};

use crate::error::Result;
use crate::matching::{search_guides, GuideFilter};
use crate::model::{guides_from_json, Guide};
use crate::overlap::find_period_overlaps;
use crate::policy::EngineOptions;

pub trait GuideRepository {
    fn find_by_id(&self, guide_profile_id: &str) -> Option<&Guide>;

    fn list(&self, filter: &GuideFilter) -> Vec<&Guide>;
}

/// Guides held in a `Vec`, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGuideRepository {
    guides: Vec<Guide>,
    options: EngineOptions,
}

impl InMemoryGuideRepository {
    /// Build a repository. Overlapping periods are accepted but logged, since
    /// the earlier period silently shadows the later one.
    pub fn new(guides: Vec<Guide>, options: EngineOptions) -> Self {
        for guide in &guides {
            for overlap in find_period_overlaps(&guide.availability_periods) {
                warn!(
                    guide = %guide.guide_profile_id,
                    first = overlap.first,
                    second = overlap.second,
                    days = overlap.overlap_days,
                    contradictory = overlap.contradictory,
                    "overlapping availability periods"
                );
            }
        }
        debug!(count = guides.len(), "loaded guides");
        Self { guides, options }
    }

    pub fn from_json(json: &str, options: EngineOptions) -> Result<Self> {
        Ok(Self::new(guides_from_json(json)?, options))
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

impl GuideRepository for InMemoryGuideRepository {
    fn find_by_id(&self, guide_profile_id: &str) -> Option<&Guide> {
        self.guides
            .iter()
            .find(|g| g.guide_profile_id == guide_profile_id)
    }

    fn list(&self, filter: &GuideFilter) -> Vec<&Guide> {
        search_guides(&self.guides, filter, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::UnlistedPolicy;

    const GUIDES: &str = r#"[
        {"guideProfileId": "GP-1", "name": "Asha", "languages": ["English"], "state": "Kerala"},
        {"guideProfileId": "GP-2", "name": "Ravi", "languages": ["Malayalam"], "state": "Kerala",
         "availabilityPeriods": [
            {"startDate": "2025-11-01", "endDate": "2025-11-10", "available": true},
            {"startDate": "2025-11-05", "endDate": "2025-11-12", "available": false}
         ]}
    ]"#;

    #[test]
    fn finds_by_profile_id() {
        let repo = InMemoryGuideRepository::from_json(GUIDES, EngineOptions::default()).unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_id("GP-2").map(|g| g.name.as_str()), Some("Ravi"));
        assert!(repo.find_by_id("64f0").is_none());
    }

    #[test]
    fn list_applies_filter_in_insertion_order() {
        let repo = InMemoryGuideRepository::from_json(GUIDES, EngineOptions::default()).unwrap();
        let kerala: Vec<&str> = repo
            .list(&GuideFilter::new().state("kerala"))
            .into_iter()
            .map(|g| g.guide_profile_id.as_str())
            .collect();
        assert_eq!(kerala, vec!["GP-1", "GP-2"]);
        assert_eq!(repo.list(&GuideFilter::new().language("malayalam")).len(), 1);
    }

    #[test]
    fn keeps_the_options_it_was_built_with() {
        let options = EngineOptions {
            unlisted_policy: UnlistedPolicy::Available,
            ..EngineOptions::default()
        };
        let repo = InMemoryGuideRepository::from_json(GUIDES, options).unwrap();
        assert_eq!(*repo.options(), options);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = InMemoryGuideRepository::from_json("[{\"name\": 1}]", EngineOptions::default());
        assert!(matches!(err, Err(crate::GuideError::Json(_))));
    }
}
