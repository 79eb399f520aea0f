//! Callbacks from a list controller to its collaborators.
//!
//! Navigation and detail views hook in here; every method defaults to a
//! no-op so an observer only implements what it cares about.

use filtering::FilterState;
use roster::CandidateId;

pub trait ListObserver {
    /// A candidate was added to or removed from the selection
    fn on_select(&mut self, _id: CandidateId, _selected: bool) {}

    /// A candidate's detail view was requested
    fn on_view(&mut self, _id: CandidateId) {}

    /// A new filter state took effect
    fn on_apply_filters(&mut self, _filters: &FilterState) {}
}
