//! Predicate kinds for the candidate pipeline.
//!
//! Each kind covers one shape of FilterState field. They are composed by
//! `FilterPipeline` and wrapped by the `Predicate` enum for uniform dispatch.

pub mod multi_select;
pub mod range;
pub mod tab;
pub mod text_search;
pub mod tri_state;

// Re-export for convenience
pub use multi_select::MultiSelectFilter;
pub use range::RangeFilter;
pub use tab::CandidateTab;
pub use text_search::TextSearch;
pub use tri_state::TriStateFilter;
