//! Quick filter shortcuts offered above the candidate list.
//!
//! A quick filter edits the controller's current state in place of opening
//! the panel; the panel picks the change up on its next sync.

use filtering::{FilterEdit, FilterState, FlagDimension, MultiSelectDimension, RangeDimension};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickFilter {
    /// Verified candidates only
    VerifiedOnly,
    /// Candidates who can start immediately
    AvailableNow,
    /// Match score of 80 or more
    TopMatches,
    /// Rate up to 25
    BudgetRate,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 4] = [
        QuickFilter::VerifiedOnly,
        QuickFilter::AvailableNow,
        QuickFilter::TopMatches,
        QuickFilter::BudgetRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFilter::VerifiedOnly => "verified-only",
            QuickFilter::AvailableNow => "available-now",
            QuickFilter::TopMatches => "top-matches",
            QuickFilter::BudgetRate => "budget-rate",
        }
    }

    /// The single edit this shortcut makes
    pub fn edit(&self) -> FilterEdit {
        match self {
            QuickFilter::VerifiedOnly => FilterEdit::SetFlag(FlagDimension::Verified, Some(true)),
            QuickFilter::AvailableNow => FilterEdit::SetValues(
                MultiSelectDimension::Availability,
                BTreeSet::from(["immediate".to_string()]),
            ),
            QuickFilter::TopMatches => {
                FilterEdit::SetRange(RangeDimension::MatchScore, 80.0, 100.0)
            }
            QuickFilter::BudgetRate => FilterEdit::SetRange(RangeDimension::Rate, 0.0, 25.0),
        }
    }

    /// Layer this shortcut on top of an existing state
    pub fn apply_to(&self, filters: &FilterState) -> FilterState {
        let mut next = filters.clone();
        next.apply_edit(self.edit());
        next
    }
}

impl fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickFilter::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = QuickFilter::ALL.iter().map(|q| q.as_str()).collect();
                format!("unknown quick filter '{s}' (expected one of {})", known.join(", "))
            })
    }
}
