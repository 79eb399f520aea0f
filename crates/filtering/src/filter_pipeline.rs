//! The FilterPipeline chains filters together.
//!
//! Filters combine with AND semantics. `matches` short-circuits on the first
//! failing filter; `apply` narrows a whole list one filter at a time and logs
//! how many candidates each filter kept.

use crate::filters::CandidateTab;
use crate::predicate::Predicate;
use crate::state::FilterState;
use crate::traits::Filter;
use roster::Candidate;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::from_state(CandidateTab::Verified, &filters);
/// let visible = pipeline.apply(roster.candidates().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a tab and a filter state.
    ///
    /// The tab comes first, followed by the state's active predicates in their
    /// evaluation order.
    pub fn from_state(tab: CandidateTab, state: &FilterState) -> Self {
        let mut pipeline = Self::new();
        if tab.is_active() {
            pipeline = pipeline.add_filter(Predicate::Tab(tab));
        }
        for predicate in state.predicates() {
            pipeline = pipeline.add_filter(predicate);
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether one candidate passes every filter
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.filters.iter().all(|filter| filter.matches(candidate))
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain the candidates that pass
    ///    c. Log output count
    /// 3. Return final filtered set, in input order
    pub fn apply<'a>(&self, candidates: Vec<&'a Candidate>) -> Vec<&'a Candidate> {
        self.narrow(candidates, |candidate| *candidate)
    }

    /// Same as `apply`, over positions in `candidates` instead of references
    pub fn apply_indices(&self, candidates: &[Candidate]) -> Vec<usize> {
        self.narrow((0..candidates.len()).collect(), |&idx| &candidates[idx])
    }

    fn narrow<'c, T>(&self, items: Vec<T>, candidate: impl Fn(&T) -> &'c Candidate) -> Vec<T> {
        let mut current = items;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|item| filter.matches(candidate(item)));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::FlagDimension;
    use crate::filters::TriStateFilter;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate {
                id: 1,
                name: "Verified".into(),
                verified: true,
                ..Default::default()
            },
            Candidate {
                id: 2,
                name: "Unverified".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let candidates = candidates();

        let filtered = pipeline.apply(candidates.iter().collect());
        assert_eq!(filtered.len(), 2);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_single_filter() {
        let pipeline =
            FilterPipeline::new().add_filter(TriStateFilter::new(FlagDimension::Verified, true));
        let candidates = candidates();

        let filtered = pipeline.apply(candidates.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_apply_indices_matches_apply() {
        let state = FilterState::default();
        let pipeline = FilterPipeline::from_state(CandidateTab::Unverified, &state);
        let candidates = candidates();

        assert_eq!(pipeline.apply_indices(&candidates), vec![1]);
        assert_eq!(pipeline.apply(candidates.iter().collect())[0].id, 2);
    }

    #[test]
    fn test_tab_is_skipped_when_all() {
        let state = FilterState::default();
        assert!(FilterPipeline::from_state(CandidateTab::All, &state).is_empty());
        assert_eq!(FilterPipeline::from_state(CandidateTab::Unverified, &state).len(), 1);
    }

    #[test]
    fn test_conflicting_filters_match_nothing() {
        let mut state = FilterState::default();
        state.verified = Some(false);
        let pipeline = FilterPipeline::from_state(CandidateTab::Verified, &state);

        assert!(candidates().iter().all(|c| !pipeline.matches(c)));
    }
}
