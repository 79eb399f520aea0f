//! Inclusive numeric ranges over rate, experience, match score and salary.

use crate::dimension::RangeDimension;
use crate::state::NumericRange;
use crate::traits::Filter;
use roster::Candidate;

/// Keeps candidates whose value lies in `[min, max]`; absent values read as 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    dimension: RangeDimension,
    range: NumericRange,
}

impl RangeFilter {
    pub fn new(dimension: RangeDimension, range: NumericRange) -> Self {
        Self { dimension, range }
    }
}

impl Filter for RangeFilter {
    fn name(&self) -> &str {
        self.dimension.as_str()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.range.contains(self.dimension.candidate_value(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rate(rate: f64) -> Candidate {
        Candidate {
            rate: Some(rate),
            ..Default::default()
        }
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        let filter = RangeFilter::new(RangeDimension::Rate, NumericRange::new(0.0, 50.0));
        assert!(filter.matches(&with_rate(50.0)));
        assert!(!filter.matches(&with_rate(50.01)));
        assert!(filter.matches(&with_rate(0.0)));
    }

    #[test]
    fn test_experience_is_parsed() {
        let filter = RangeFilter::new(RangeDimension::Experience, NumericRange::new(5.0, 20.0));
        let junior = Candidate {
            experience: Some("3 years".into()),
            ..Default::default()
        };
        let senior = Candidate {
            experience: Some("7 years".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&junior));
        assert!(filter.matches(&senior));
    }

    #[test]
    fn test_absent_value_reads_as_zero() {
        let from_zero = RangeFilter::new(RangeDimension::MatchScore, NumericRange::new(0.0, 60.0));
        let from_ten = RangeFilter::new(RangeDimension::MatchScore, NumericRange::new(10.0, 60.0));
        assert!(from_zero.matches(&Candidate::default()));
        assert!(!from_ten.matches(&Candidate::default()));
    }
}
