//! Tri-state boolean flags such as "verified" or "GitHub required".
//!
//! A `None` flag never becomes a filter; see `FilterState::predicates`.

use crate::dimension::FlagDimension;
use crate::traits::Filter;
use roster::Candidate;

/// Keeps candidates whose flag equals the expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriStateFilter {
    dimension: FlagDimension,
    expected: bool,
}

impl TriStateFilter {
    pub fn new(dimension: FlagDimension, expected: bool) -> Self {
        Self {
            dimension,
            expected,
        }
    }
}

impl Filter for TriStateFilter {
    fn name(&self) -> &str {
        self.dimension.as_str()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.dimension.candidate_flag(candidate) == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_flag_both_ways() {
        let verified = Candidate {
            verified: true,
            ..Default::default()
        };
        let unverified = Candidate::default();

        let want_verified = TriStateFilter::new(FlagDimension::Verified, true);
        assert!(want_verified.matches(&verified));
        assert!(!want_verified.matches(&unverified));

        let want_unverified = TriStateFilter::new(FlagDimension::Verified, false);
        assert!(!want_unverified.matches(&verified));
        assert!(want_unverified.matches(&unverified));
    }

    #[test]
    fn test_github_required() {
        let with_github = Candidate {
            has_github: true,
            ..Default::default()
        };
        let filter = TriStateFilter::new(FlagDimension::Github, true);
        assert!(filter.matches(&with_github));
        assert!(!filter.matches(&Candidate::default()));
        assert_eq!(filter.name(), "githubRequired");
    }
}
