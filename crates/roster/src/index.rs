//! Roster building and indexing logic.
//!
//! - Load one roster file, or every `.json` file of a directory in parallel
//! - Validate candidate records
//! - Build facet counts for the filter panel controls
//! - Compute roster statistics for the analytics view

use crate::error::{Result, RosterError};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One selectable value of a facet and how many candidates carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

/// Distinct values per multi-select dimension, most common first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub regions: Vec<FacetValue>,
    pub countries: Vec<FacetValue>,
    pub skills: Vec<FacetValue>,
    pub tools: Vec<FacetValue>,
    pub languages: Vec<FacetValue>,
    pub certifications: Vec<FacetValue>,
    pub availability: Vec<FacetValue>,
    pub education: Vec<FacetValue>,
    pub contract_types: Vec<FacetValue>,
    pub notice_periods: Vec<FacetValue>,
}

impl Roster {
    /// Load a roster from a single JSON file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading roster from {:?}", path);
        let candidates = parser::parse_candidates(path)?;
        let roster = Self::from_candidates(candidates);
        roster.validate()?;
        info!("Loaded {} candidates", roster.len());
        Ok(roster)
    }

    /// Load every `.json` file in a directory.
    ///
    /// Files are parsed in parallel with Rayon, then concatenated in file name
    /// order so the resulting load order is deterministic.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(RosterError::NotFound {
                path: dir.to_path_buf(),
            });
        }
        info!("Loading roster directory {:?}", dir);

        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let parsed: Vec<Vec<Candidate>> = files
            .par_iter()
            .map(|path| parser::parse_candidates(path))
            .collect::<Result<_>>()?;

        let roster = Self::from_candidates(parsed.into_iter().flatten().collect());
        roster.validate()?;
        info!("Loaded {} candidates from {} files", roster.len(), files.len());
        Ok(roster)
    }

    /// Load from either a file or a directory
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::load_from_dir(path)
        } else {
            Self::load_from_file(path)
        }
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - ids are unique
    /// - names are not blank
    /// - match scores lie in 0..=100
    /// - rates and salary expectations are not negative
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            if !seen.insert(candidate.id) {
                return Err(RosterError::DuplicateId { id: candidate.id });
            }
            if candidate.name.trim().is_empty() {
                return Err(invalid(candidate, "name", &candidate.name));
            }
            if let Some(score) = candidate.match_score {
                if !(0.0..=100.0).contains(&score) {
                    return Err(invalid(candidate, "matchScore", &score.to_string()));
                }
            }
            if let Some(rate) = candidate.rate {
                if rate < 0.0 {
                    return Err(invalid(candidate, "rate", &rate.to_string()));
                }
            }
            if let Some(salary) = candidate.salary_expectation {
                if salary < 0.0 {
                    return Err(invalid(candidate, "salaryExpectation", &salary.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Count the distinct values of every multi-select dimension
    pub fn facets(&self) -> Facets {
        let mut regions = BTreeMap::new();
        let mut countries = BTreeMap::new();
        let mut skills = BTreeMap::new();
        let mut tools = BTreeMap::new();
        let mut languages = BTreeMap::new();
        let mut certifications = BTreeMap::new();
        let mut availability = BTreeMap::new();
        let mut education = BTreeMap::new();
        let mut contract_types = BTreeMap::new();
        let mut notice_periods = BTreeMap::new();

        for c in &self.candidates {
            bump(&mut regions, c.region.iter());
            bump(&mut countries, std::iter::once(&c.country));
            bump(&mut skills, c.skills.iter());
            bump(&mut tools, c.tools.iter());
            bump(&mut languages, c.languages.iter());
            bump(&mut certifications, c.certifications.iter());
            bump(&mut education, c.education.iter());
            bump(&mut contract_types, c.contract_types.iter());
            bump(&mut notice_periods, c.notice_period.iter());
            *availability
                .entry(c.availability.as_str().to_string())
                .or_insert(0) += 1;
        }

        Facets {
            regions: ranked(regions),
            countries: ranked(countries),
            skills: ranked(skills),
            tools: ranked(tools),
            languages: ranked(languages),
            certifications: ranked(certifications),
            availability: ranked(availability),
            education: ranked(education),
            contract_types: ranked(contract_types),
            notice_periods: ranked(notice_periods),
        }
    }

    /// Compute aggregate statistics in parallel
    pub fn compute_stats(&self) -> RosterStats {
        let verified = self.candidates.par_iter().filter(|c| c.verified).count();

        let by_availability = self
            .candidates
            .par_iter()
            .fold(std::collections::HashMap::new, |mut acc, c| {
                *acc.entry(c.availability).or_insert(0) += 1;
                acc
            })
            .reduce(std::collections::HashMap::new, |mut a, b| {
                for (k, v) in b {
                    *a.entry(k).or_insert(0) += v;
                }
                a
            });

        let avg_rate = average(self.candidates.par_iter().filter_map(|c| c.rate));
        let avg_match_score = average(self.candidates.par_iter().filter_map(|c| c.match_score));

        RosterStats {
            total: self.candidates.len(),
            verified,
            by_availability,
            avg_rate,
            avg_match_score,
        }
    }
}

fn invalid(candidate: &Candidate, field: &str, value: &str) -> RosterError {
    RosterError::InvalidValue {
        id: candidate.id,
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Count values, skipping blanks so empty strings never become a facet
fn bump<'a>(counts: &mut BTreeMap<String, usize>, values: impl Iterator<Item = &'a String>) {
    for value in values {
        let value = value.trim();
        if !value.is_empty() {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }
}

/// Most common first; ties stay alphabetical because BTreeMap iterates sorted
fn ranked(counts: BTreeMap<String, usize>) -> Vec<FacetValue> {
    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, count)| FacetValue { value, count })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count));
    values
}

fn average(values: impl ParallelIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .map(|v| (v, 1usize))
        .reduce(|| (0.0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
