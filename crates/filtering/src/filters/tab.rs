//! List tabs: the coarse category switch evaluated before any other filter.

use crate::traits::Filter;
use roster::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateTab {
    #[default]
    All,
    Verified,
    Unverified,
}

impl CandidateTab {
    pub fn is_active(&self) -> bool {
        *self != CandidateTab::All
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateTab::All => "all",
            CandidateTab::Verified => "verified",
            CandidateTab::Unverified => "unverified",
        }
    }
}

impl Filter for CandidateTab {
    fn name(&self) -> &str {
        "tab"
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        match self {
            CandidateTab::All => true,
            CandidateTab::Verified => candidate.verified,
            CandidateTab::Unverified => !candidate.verified,
        }
    }
}

impl fmt::Display for CandidateTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(CandidateTab::All),
            "verified" => Ok(CandidateTab::Verified),
            "unverified" => Ok(CandidateTab::Unverified),
            other => Err(format!("unknown tab '{other}' (expected all, verified or unverified)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs() {
        let verified = Candidate {
            verified: true,
            ..Default::default()
        };
        assert!(CandidateTab::All.matches(&verified));
        assert!(CandidateTab::Verified.matches(&verified));
        assert!(!CandidateTab::Unverified.matches(&verified));
        assert!(CandidateTab::Unverified.matches(&Candidate::default()));
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("Verified".parse::<CandidateTab>(), Ok(CandidateTab::Verified));
        assert!("archived".parse::<CandidateTab>().is_err());
    }
}
