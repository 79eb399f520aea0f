//! Multi-select dimensions: skills, tools, countries, languages and the rest.

use crate::dimension::MultiSelectDimension;
use crate::traits::Filter;
use roster::Candidate;

/// OR within one dimension, with substring matching.
///
/// ## Algorithm
/// A candidate passes when at least one of its values, lowercased, contains
/// at least one of the selected values, lowercased. Selecting "React" keeps
/// "React Native" candidates too.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectFilter {
    dimension: MultiSelectDimension,
    values: Vec<String>,
}

impl MultiSelectFilter {
    pub fn new<'a>(
        dimension: MultiSelectDimension,
        values: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        Self {
            dimension,
            values: values.into_iter().map(|v| v.to_lowercase()).collect(),
        }
    }

    pub fn dimension(&self) -> MultiSelectDimension {
        self.dimension
    }
}

impl Filter for MultiSelectFilter {
    fn name(&self) -> &str {
        self.dimension.as_str()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        // An empty selection constrains nothing
        if self.values.is_empty() {
            return true;
        }
        self.dimension
            .candidate_values(candidate)
            .iter()
            .map(|value| value.to_lowercase())
            .any(|value| self.values.iter().any(|wanted| value.contains(wanted.as_str())))
    }
}
