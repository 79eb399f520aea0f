//! Free-text search over a candidate's identity and skill fields.

use crate::traits::Filter;
use roster::Candidate;

/// Case-insensitive substring search.
///
/// ## Algorithm
/// 1. Build a lowercase haystack from name, email, position, skills, tools
///    and location
/// 2. Pass when the lowercase term occurs anywhere in it
///
/// An empty term passes every candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSearch {
    term: String,
}

impl TextSearch {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

/// The text a search term is looked up in, lowercased
pub fn haystack(candidate: &Candidate) -> String {
    format!(
        "{} {} {} {} {} {}",
        candidate.name,
        candidate.email,
        candidate.position,
        candidate.skills.join(" "),
        candidate.tools.join(" "),
        candidate.location,
    )
    .to_lowercase()
}

impl Filter for TextSearch {
    fn name(&self) -> &str {
        "search"
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.term.is_empty() || haystack(candidate).contains(&self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Candidate {
        Candidate {
            id: 1,
            name: "Jane Martínez".into(),
            email: "jane.martinez@example.com".into(),
            position: "Medical Virtual Assistant".into(),
            skills: vec!["EMR".into(), "HIPAA Compliance".into()],
            tools: vec!["Epic".into()],
            location: "Guadalajara, Mexico".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(TextSearch::new("jane").matches(&jane()));
        assert!(TextSearch::new("MARTÍNEZ").matches(&jane()));
        assert!(TextSearch::new("hipaa").matches(&jane()));
    }

    #[test]
    fn test_search_covers_tools_and_location() {
        assert!(TextSearch::new("epic").matches(&jane()));
        assert!(TextSearch::new("guadalajara").matches(&jane()));
        assert!(!TextSearch::new("kotlin").matches(&jane()));
    }

    #[test]
    fn test_search_covers_email_and_position() {
        assert!(TextSearch::new("example.com").matches(&jane()));
        assert!(TextSearch::new("jane.martinez@").matches(&jane()));
        assert!(TextSearch::new("virtual assistant").matches(&jane()));
        assert!(!TextSearch::new("software engineer").matches(&jane()));
    }

    #[test]
    fn test_empty_term_passes() {
        assert!(TextSearch::new("").matches(&Candidate::default()));
    }
}
