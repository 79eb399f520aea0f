//! Sort comparator for candidate lists.

use roster::Candidate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    /// Last update instant
    Date,
    /// Match score
    #[default]
    Match,
    Rate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Sort key and direction, kept apart from the filter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl SortState {
    pub fn new(sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }
}

/// Compare two candidates by one key.
///
/// Absent numbers compare as 0 and an absent update time as the earliest
/// instant. Ties are left `Equal` so a stable sort keeps input order.
pub fn compare(a: &Candidate, b: &Candidate, sort_by: SortKey, sort_order: SortOrder) -> Ordering {
    let ordering = match sort_by {
        SortKey::Name => a.name.cmp(&b.name),
        // None orders before Some, so an absent update time is the earliest
        SortKey::Date => a.updated_at.cmp(&b.updated_at),
        SortKey::Match => compare_f64(a.match_score.unwrap_or(0.0), b.match_score.unwrap_or(0.0)),
        SortKey::Rate => compare_f64(a.rate.unwrap_or(0.0), b.rate.unwrap_or(0.0)),
    };
    match sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Stable in-place sort of positions into `candidates`
pub fn sort_indices(candidates: &[Candidate], indices: &mut [usize], sort: SortState) {
    indices.sort_by(|&a, &b| {
        compare(&candidates[a], &candidates[b], sort.sort_by, sort.sort_order)
    });
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Name => "name",
            SortKey::Date => "date",
            SortKey::Match => "match",
            SortKey::Rate => "rate",
        })
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            "match" => Ok(SortKey::Match),
            "rate" => Ok(SortKey::Rate),
            other => Err(format!(
                "unknown sort key '{other}' (expected name, date, match or rate)"
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{other}' (expected asc or desc)")),
        }
    }
}
