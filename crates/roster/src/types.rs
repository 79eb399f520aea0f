//! Core domain types for the candidate roster.
//!
//! A `Candidate` is read-only once loaded. Optional numeric fields stay
//! `Option` here; the filtering crate decides how absent values compare.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a candidate
pub type CandidateId = u32;

// =============================================================================
// Candidate
// =============================================================================

/// A person available for hire.
///
/// Field names follow the dashboard's JSON (`matchScore`, `updatedAt`, ...).
/// Every collection defaults to empty and every optional number to `None`, so a
/// sparse record still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    /// Role or position the candidate is hired for
    pub position: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    /// Ordered by proficiency, as entered
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
    pub education: Vec<String>,
    pub contract_types: Vec<String>,
    pub notice_period: Option<String>,
    /// Hourly rate
    pub rate: Option<f64>,
    pub salary_expectation: Option<f64>,
    /// Free text such as "5 years"
    pub experience: Option<String>,
    /// 0 to 100
    pub match_score: Option<f64>,
    pub availability: Availability,
    pub verified: bool,
    pub country: String,
    pub region: Option<String>,
    pub location: String,
    pub has_portfolio: bool,
    pub has_github: bool,
    pub has_linkedin: bool,
    pub has_video: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// How soon a candidate can start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Immediate,
    Short,
    Medium,
    Long,
    /// Missing availability is never shown as available
    #[default]
    NotLooking,
}

impl Availability {
    /// All variants, ordered from soonest to never
    pub const ALL: [Availability; 5] = [
        Availability::Immediate,
        Availability::Short,
        Availability::Medium,
        Availability::Long,
        Availability::NotLooking,
    ];

    /// The label used in filter sets and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Immediate => "immediate",
            Availability::Short => "short",
            Availability::Medium => "medium",
            Availability::Long => "long",
            Availability::NotLooking => "not-looking",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Aggregate numbers over a whole roster, shown on the analytics panel
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub verified: usize,
    pub by_availability: HashMap<Availability, usize>,
    /// Average over candidates that have a rate
    pub avg_rate: Option<f64>,
    /// Average over candidates that have a match score
    pub avg_match_score: Option<f64>,
}

// =============================================================================
// Roster - the in-memory candidate store
// =============================================================================

/// Holds every candidate in load order with an id lookup.
///
/// Load order matters: it is the order a stable sort falls back to on ties.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) by_id: HashMap<CandidateId, usize>,
}

impl Roster {
    /// Creates a new, empty Roster
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Build a roster from already-parsed candidates (no validation)
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        let mut roster = Self::new();
        for candidate in candidates {
            roster.insert_candidate(candidate);
        }
        roster
    }

    /// Get a candidate by ID
    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.by_id.get(&id).map(|&idx| &self.candidates[idx])
    }

    /// Whether a candidate with this ID exists
    pub fn contains(&self, id: CandidateId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All candidates in load order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Insert a candidate; a later duplicate id shadows the earlier one in lookups
    pub fn insert_candidate(&mut self, candidate: Candidate) {
        self.by_id.insert(candidate.id, self.candidates.len());
        self.candidates.push(candidate);
    }
}
