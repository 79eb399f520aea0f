//! Parser for roster files.
//!
//! A roster file is a JSON array of candidate objects in the dashboard's
//! camelCase shape. Unknown fields are ignored and missing ones take their
//! defaults, so hand-written mock files stay short.

use crate::error::{Result, RosterError};
use crate::types::Candidate;
use std::fs;
use std::path::Path;

/// Parse a roster file into candidates, in file order
pub fn parse_candidates(path: &Path) -> Result<Vec<Candidate>> {
    if !path.exists() {
        return Err(RosterError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_candidates_str(&content, path)
}

/// Parse roster JSON already in memory; `origin` is only used in errors
pub fn parse_candidates_str(content: &str, origin: &Path) -> Result<Vec<Candidate>> {
    serde_json::from_str(content).map_err(|source| RosterError::ParseError {
        file: origin.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Availability;

    #[test]
    fn test_parse_sparse_candidate() {
        let json = r#"[{"id": 7, "name": "Ana Souza"}]"#;
        let candidates = parse_candidates_str(json, Path::new("inline")).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 7);
        assert!(candidates[0].skills.is_empty());
        assert_eq!(candidates[0].rate, None);
        assert_eq!(candidates[0].availability, Availability::NotLooking);
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"[{
            "id": 1,
            "name": "Jane Martínez",
            "matchScore": 92,
            "availability": "not-looking",
            "contractTypes": ["full-time"],
            "hasGithub": true,
            "updatedAt": "2024-03-01T10:00:00Z"
        }]"#;
        let candidates = parse_candidates_str(json, Path::new("inline")).unwrap();
        let jane = &candidates[0];

        assert_eq!(jane.match_score, Some(92.0));
        assert_eq!(jane.availability, Availability::NotLooking);
        assert_eq!(jane.contract_types, vec!["full-time".to_string()]);
        assert!(jane.has_github);
        assert!(jane.updated_at.is_some());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_candidates_str("{not json", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_candidates(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
    }
}
