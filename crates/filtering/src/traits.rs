//! Core trait for the filtering pipeline.

use roster::Candidate;

/// A single predicate over a candidate.
///
/// Implementations must be total: absent candidate fields are read through
/// their documented defaults, so `matches` never panics and always answers.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the candidate passes this filter
    fn matches(&self, candidate: &Candidate) -> bool;
}
