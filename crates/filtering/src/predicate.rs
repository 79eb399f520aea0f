//! Tagged union of every predicate kind.

use crate::filters::{CandidateTab, MultiSelectFilter, RangeFilter, TextSearch, TriStateFilter};
use crate::traits::Filter;
use roster::Candidate;

/// One filter dimension, dispatched by variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Tab(CandidateTab),
    TextSearch(TextSearch),
    TriState(TriStateFilter),
    MultiSelect(MultiSelectFilter),
    Range(RangeFilter),
}

impl Predicate {
    /// The predicate kind, independent of its dimension
    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::Tab(_) => "Tab",
            Predicate::TextSearch(_) => "TextSearch",
            Predicate::TriState(_) => "TriState",
            Predicate::MultiSelect(_) => "MultiSelect",
            Predicate::Range(_) => "Range",
        }
    }

    fn inner(&self) -> &dyn Filter {
        match self {
            Predicate::Tab(f) => f,
            Predicate::TextSearch(f) => f,
            Predicate::TriState(f) => f,
            Predicate::MultiSelect(f) => f,
            Predicate::Range(f) => f,
        }
    }
}

impl Filter for Predicate {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.inner().matches(candidate)
    }
}
