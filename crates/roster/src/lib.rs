//! # Roster Crate
//!
//! This crate holds the candidate records the hiring cockpit browses.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Candidate, Availability, Roster, RosterStats)
//! - **parser**: Parse roster JSON files into candidates
//! - **index**: Load, validate, facet and summarize a roster
//! - **error**: Error types for roster loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster::Roster;
//! use std::path::Path;
//!
//! let roster = Roster::load(Path::new("data/candidates.json"))?;
//! let jane = roster.get(1).unwrap();
//! let facets = roster.facets();
//!
//! println!("{} knows {} of {} listed skills", jane.name, jane.skills.len(), facets.skills.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use index::{FacetValue, Facets};
pub use types::{Availability, Candidate, CandidateId, Roster, RosterStats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_creation() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn test_insert_candidate() {
        let mut roster = Roster::new();

        roster.insert_candidate(Candidate {
            id: 1,
            name: "Jane Martínez".to_string(),
            skills: vec!["EMR".to_string(), "HIPAA Compliance".to_string()],
            rate: Some(8.5),
            verified: true,
            ..Default::default()
        });

        let retrieved = roster.get(1).unwrap();
        assert_eq!(retrieved.name, "Jane Martínez");
        assert_eq!(retrieved.skills.len(), 2);
        assert!(roster.contains(1));
    }

    #[test]
    fn test_empty_queries() {
        let roster = Roster::new();

        assert!(roster.get(999).is_none());
        assert!(!roster.contains(999));
        assert!(roster.candidates().is_empty());
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(Availability::NotLooking.to_string(), "not-looking");
        assert_eq!(Availability::ALL.len(), 5);
        assert_eq!(Availability::default(), Availability::NotLooking);
    }
}
