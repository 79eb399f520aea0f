//! Error types for the roster crate.
//!
//! Loading a roster is the only fallible step in the cockpit: once the
//! candidates are in memory, filtering and sorting never fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::CandidateId;

/// Errors that can occur while loading and validating a roster.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Roster file or directory could not be found
    #[error("Roster path not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error occurred while reading a roster file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File content is not a valid candidate array
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two candidates share the same id
    #[error("Duplicate candidate id {id}")]
    DuplicateId { id: CandidateId },

    /// A candidate field had an invalid value
    #[error("Invalid value for {field} on candidate {id}: {value}")]
    InvalidValue {
        id: CandidateId,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
