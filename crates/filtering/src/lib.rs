//! Filtering and ranking of roster candidates.
//!
//! This crate provides:
//! - FilterState, the value object behind every filter control
//! - Filter trait and predicate kinds (search, tri-state, multi-select, range, tab)
//! - FilterPipeline for composing filters with AND semantics
//! - The sort comparator
//!
//! ## Architecture
//! A candidate list is derived in two stages:
//! 1. Filters remove candidates that fail any active predicate
//! 2. A stable sort orders the survivors by one key and direction
//!
//! ## Example Usage
//! ```ignore
//! use filtering::{filter_and_sort, CandidateTab, FilterState, SortState};
//!
//! let mut filters = FilterState::default();
//! filters.search = "jane".into();
//! let sort = SortState::default();
//! let visible = filter_and_sort(roster.candidates(), CandidateTab::All, &filters, sort);
//! ```

pub mod dimension;
pub mod filter_pipeline;
pub mod filters;
pub mod predicate;
pub mod sort;
pub mod state;
pub mod traits;

// Re-export main types
pub use dimension::{FlagDimension, MultiSelectDimension, RangeDimension, parse_experience_years};
pub use filter_pipeline::FilterPipeline;
pub use filters::CandidateTab;
pub use predicate::Predicate;
pub use sort::{SortKey, SortOrder, SortState, compare, sort_indices};
pub use state::{FilterEdit, FilterState, NumericRange};
pub use traits::Filter;

use roster::Candidate;

/// Whether a candidate satisfies every active predicate of `filters`
pub fn matches(candidate: &Candidate, filters: &FilterState) -> bool {
    filters
        .predicates()
        .iter()
        .all(|predicate| predicate.matches(candidate))
}

/// Filter then stable-sort, leaving `candidates` untouched
pub fn filter_and_sort<'a>(
    candidates: &'a [Candidate],
    tab: CandidateTab,
    filters: &FilterState,
    sort: SortState,
) -> Vec<&'a Candidate> {
    filter_and_sort_indices(candidates, tab, filters, sort)
        .into_iter()
        .map(|idx| &candidates[idx])
        .collect()
}

/// Positions in `candidates` of the visible list, in display order
pub fn filter_and_sort_indices(
    candidates: &[Candidate],
    tab: CandidateTab,
    filters: &FilterState,
    sort: SortState,
) -> Vec<usize> {
    let pipeline = FilterPipeline::from_state(tab, filters);
    let mut visible = pipeline.apply_indices(candidates);
    sort_indices(candidates, &mut visible, sort);
    visible
}
