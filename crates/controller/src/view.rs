//! What a candidate list renders: a page of results or an empty state.

use roster::Candidate;

/// The derived view of a list controller
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Results(PageView<'a>),
    Empty(EmptyState),
}

impl ListView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty(_))
    }
}

/// One page of the filtered and sorted list
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub items: Vec<&'a Candidate>,
    pub page: usize,
    pub total_pages: usize,
    /// Candidates passing the filters, across all pages
    pub total_visible: usize,
    pub total_candidates: usize,
}

/// Shown instead of an empty list, with a way back to the full roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub active_filters: usize,
    /// Whether a "Clear Filters" action would change anything
    pub can_clear: bool,
}

impl EmptyState {
    pub fn no_candidates() -> Self {
        Self {
            message: "No candidates in this roster yet".to_string(),
            active_filters: 0,
            can_clear: false,
        }
    }

    pub fn no_matches(active_filters: usize, can_clear: bool) -> Self {
        Self {
            message: "No candidates match the current filters".to_string(),
            active_filters,
            can_clear,
        }
    }
}
