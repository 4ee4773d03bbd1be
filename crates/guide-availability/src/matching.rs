//! Narrow a guide list to those satisfying a request.
//!
//! The same predicates back three flows: public guide search, substitute
//! assignment when a booked guide drops out, and custom tour requests.
//! Predicates are independent and combine with logical AND, so their order
//! never changes the result. Results keep the source list's order; there is no
//! ranking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{eq_ignore_case, Guide};
use crate::policy::EngineOptions;
use crate::reconcile::is_free_between;

/// A single independent constraint on a guide.
#[derive(Debug, Clone, PartialEq)]
pub enum GuidePredicate {
    /// Speaks the language (case-insensitive).
    Language(String),
    /// Speaks at least one of the languages (case-insensitive).
    AnyLanguage(Vec<String>),
    /// Based in the state (case-insensitive equality).
    State(String),
    /// Lists the specialization (case-insensitive).
    Specialization(String),
    MinRating(f64),
    /// Free for every day of the inclusive range.
    FreeBetween { start: NaiveDate, end: NaiveDate },
}

impl GuidePredicate {
    pub fn matches(&self, guide: &Guide, options: &EngineOptions) -> bool {
        match self {
            GuidePredicate::Language(lang) => guide.speaks(lang),
            GuidePredicate::AnyLanguage(langs) => langs.iter().any(|l| guide.speaks(l)),
            GuidePredicate::State(state) => eq_ignore_case(&guide.state, state),
            GuidePredicate::Specialization(spec) => guide
                .specializations
                .iter()
                .any(|s| eq_ignore_case(s, spec)),
            GuidePredicate::MinRating(min) => guide.rating >= *min,
            GuidePredicate::FreeBetween { start, end } => is_free_between(
                guide,
                *start,
                *end,
                options.availability_source,
                options.unlisted_policy,
            ),
        }
    }
}

/// Optional constraints collected from a search form. Unset fields do not
/// constrain; blank strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideFilter {
    pub language: Option<String>,
    pub state: Option<String>,
    pub specialization: Option<String>,
    pub min_rating: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GuideFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Lower the filter into its predicates.
    ///
    /// A date range needs both ends; a lone start date is treated as a
    /// single-day range, a lone end date is ignored.
    pub fn predicates(&self) -> Vec<GuidePredicate> {
        let mut predicates = Vec::new();
        if let Some(lang) = non_blank(&self.language) {
            predicates.push(GuidePredicate::Language(lang));
        }
        if let Some(state) = non_blank(&self.state) {
            predicates.push(GuidePredicate::State(state));
        }
        if let Some(spec) = non_blank(&self.specialization) {
            predicates.push(GuidePredicate::Specialization(spec));
        }
        if let Some(min) = self.min_rating {
            predicates.push(GuidePredicate::MinRating(min));
        }
        if let Some(start) = self.start_date {
            let end = self.end_date.unwrap_or(start);
            predicates.push(GuidePredicate::FreeBetween { start, end });
        }
        predicates
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keep the guides satisfying every predicate, in source order.
pub fn filter_guides<'a>(
    guides: &'a [Guide],
    predicates: &[GuidePredicate],
    options: &EngineOptions,
) -> Vec<&'a Guide> {
    let matched: Vec<&Guide> = guides
        .iter()
        .filter(|g| predicates.iter().all(|p| p.matches(g, options)))
        .collect();
    debug!(
        total = guides.len(),
        matched = matched.len(),
        predicates = predicates.len(),
        "filtered guides"
    );
    matched
}

/// Public search: apply a [`GuideFilter`].
pub fn search_guides<'a>(
    guides: &'a [Guide],
    filter: &GuideFilter,
    options: &EngineOptions,
) -> Vec<&'a Guide> {
    filter_guides(guides, &filter.predicates(), options)
}

/// Candidates to take over from `replaced_id`: the filter result without the
/// replaced guide.
pub fn find_substitutes<'a>(
    guides: &'a [Guide],
    replaced_id: &str,
    filter: &GuideFilter,
    options: &EngineOptions,
) -> Vec<&'a Guide> {
    let mut predicates = filter.predicates();
    if let Some(replaced) = guides.iter().find(|g| g.guide_profile_id == replaced_id) {
        if non_blank(&filter.language).is_none() && !replaced.languages.is_empty() {
            // Travelers booked a guide speaking one of these.
            predicates.push(GuidePredicate::AnyLanguage(replaced.languages.clone()));
        }
    }
    filter_guides(guides, &predicates, options)
        .into_iter()
        .filter(|g| g.guide_profile_id != replaced_id)
        .collect()
}

/// A traveler's request for a bespoke tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTourRequest {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub specializations: Vec<String>,
}

/// Guides able to fulfil a custom request: speaking any requested language,
/// based in the requested state, listing any requested specialization, and
/// free for the requested dates.
pub fn match_custom_request<'a>(
    guides: &'a [Guide],
    request: &CustomTourRequest,
    options: &EngineOptions,
) -> Vec<&'a Guide> {
    let mut predicates = vec![GuidePredicate::FreeBetween {
        start: request.start_date,
        end: request.end_date,
    }];
    if !request.languages.is_empty() {
        predicates.push(GuidePredicate::AnyLanguage(request.languages.clone()));
    }
    if let Some(state) = non_blank(&request.state) {
        predicates.push(GuidePredicate::State(state));
    }
    let matched = filter_guides(guides, &predicates, options);
    if request.specializations.is_empty() {
        return matched;
    }
    matched
        .into_iter()
        .filter(|g| {
            request.specializations.iter().any(|wanted| {
                GuidePredicate::Specialization(wanted.clone()).matches(g, options)
            })
        })
        .collect()
}
