//! FilterState: every active filter predicate of a candidate list.
//!
//! The state is a plain value. It serializes in the dashboard's camelCase
//! shape, ranges as `[min, max]` pairs, so a saved filter file and the
//! `onApplyFilters` payload look the same.

use crate::dimension::{FlagDimension, MultiSelectDimension, RangeDimension};
use crate::filters::{MultiSelectFilter, RangeFilter, TextSearch, TriStateFilter};
use crate::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive numeric bounds with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct NumericRange {
    min: f64,
    max: f64,
}

impl NumericRange {
    /// Reversed bounds are swapped rather than rejected. A NaN bound takes
    /// the other bound's value.
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = match (min.is_nan(), max.is_nan()) {
            (true, true) => (0.0, 0.0),
            (true, false) => (max, max),
            (false, true) => (min, min),
            (false, false) => (min, max),
        };
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn default_for(dimension: RangeDimension) -> Self {
        let (min, max) = dimension.default_bounds();
        Self::new(min, max)
    }

    /// Bounds for one dimension; a non-finite bound is replaced by that
    /// dimension's default bound on the same side
    pub fn for_dimension(dimension: RangeDimension, min: f64, max: f64) -> Self {
        let (default_min, default_max) = dimension.default_bounds();
        Self::new(
            if min.is_finite() { min } else { default_min },
            if max.is_finite() { max } else { default_max },
        )
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<(f64, f64)> for NumericRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<NumericRange> for (f64, f64) {
    fn from(range: NumericRange) -> Self {
        (range.min, range.max)
    }
}

/// The complete set of filter predicates for one candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search: String,

    pub regions: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
    pub availability: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub contract_type: BTreeSet<String>,
    pub notice_period: BTreeSet<String>,

    pub rate_range: NumericRange,
    pub experience_range: NumericRange,
    pub match_score_range: NumericRange,
    pub salary_expectation_range: NumericRange,

    pub verified: Option<bool>,
    pub portfolio_required: Option<bool>,
    pub github_required: Option<bool>,
    pub linkedin_required: Option<bool>,
    pub video_required: Option<bool>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            regions: BTreeSet::new(),
            countries: BTreeSet::new(),
            skills: BTreeSet::new(),
            tools: BTreeSet::new(),
            languages: BTreeSet::new(),
            certifications: BTreeSet::new(),
            availability: BTreeSet::new(),
            education: BTreeSet::new(),
            contract_type: BTreeSet::new(),
            notice_period: BTreeSet::new(),
            rate_range: NumericRange::default_for(RangeDimension::Rate),
            experience_range: NumericRange::default_for(RangeDimension::Experience),
            match_score_range: NumericRange::default_for(RangeDimension::MatchScore),
            salary_expectation_range: NumericRange::default_for(
                RangeDimension::SalaryExpectation,
            ),
            verified: None,
            portfolio_required: None,
            github_required: None,
            linkedin_required: None,
            video_required: None,
        }
    }
}

/// One edit a filter control can make.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEdit {
    SetSearch(String),
    /// Add the value if absent, remove it if present
    ToggleValue(MultiSelectDimension, String),
    SetValues(MultiSelectDimension, BTreeSet<String>),
    ClearDimension(MultiSelectDimension),
    SetRange(RangeDimension, f64, f64),
    ResetRange(RangeDimension),
    SetFlag(FlagDimension, Option<bool>),
    /// Back to the default state
    Reset,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, dimension: MultiSelectDimension) -> &BTreeSet<String> {
        match dimension {
            MultiSelectDimension::Regions => &self.regions,
            MultiSelectDimension::Countries => &self.countries,
            MultiSelectDimension::Skills => &self.skills,
            MultiSelectDimension::Tools => &self.tools,
            MultiSelectDimension::Languages => &self.languages,
            MultiSelectDimension::Certifications => &self.certifications,
            MultiSelectDimension::Availability => &self.availability,
            MultiSelectDimension::Education => &self.education,
            MultiSelectDimension::ContractType => &self.contract_type,
            MultiSelectDimension::NoticePeriod => &self.notice_period,
        }
    }

    pub fn values_mut(&mut self, dimension: MultiSelectDimension) -> &mut BTreeSet<String> {
        match dimension {
            MultiSelectDimension::Regions => &mut self.regions,
            MultiSelectDimension::Countries => &mut self.countries,
            MultiSelectDimension::Skills => &mut self.skills,
            MultiSelectDimension::Tools => &mut self.tools,
            MultiSelectDimension::Languages => &mut self.languages,
            MultiSelectDimension::Certifications => &mut self.certifications,
            MultiSelectDimension::Availability => &mut self.availability,
            MultiSelectDimension::Education => &mut self.education,
            MultiSelectDimension::ContractType => &mut self.contract_type,
            MultiSelectDimension::NoticePeriod => &mut self.notice_period,
        }
    }

    pub fn range(&self, dimension: RangeDimension) -> NumericRange {
        match dimension {
            RangeDimension::Rate => self.rate_range,
            RangeDimension::Experience => self.experience_range,
            RangeDimension::MatchScore => self.match_score_range,
            RangeDimension::SalaryExpectation => self.salary_expectation_range,
        }
    }

    fn range_mut(&mut self, dimension: RangeDimension) -> &mut NumericRange {
        match dimension {
            RangeDimension::Rate => &mut self.rate_range,
            RangeDimension::Experience => &mut self.experience_range,
            RangeDimension::MatchScore => &mut self.match_score_range,
            RangeDimension::SalaryExpectation => &mut self.salary_expectation_range,
        }
    }

    pub fn flag(&self, dimension: FlagDimension) -> Option<bool> {
        match dimension {
            FlagDimension::Verified => self.verified,
            FlagDimension::Portfolio => self.portfolio_required,
            FlagDimension::Github => self.github_required,
            FlagDimension::Linkedin => self.linkedin_required,
            FlagDimension::Video => self.video_required,
        }
    }

    fn flag_mut(&mut self, dimension: FlagDimension) -> &mut Option<bool> {
        match dimension {
            FlagDimension::Verified => &mut self.verified,
            FlagDimension::Portfolio => &mut self.portfolio_required,
            FlagDimension::Github => &mut self.github_required,
            FlagDimension::Linkedin => &mut self.linkedin_required,
            FlagDimension::Video => &mut self.video_required,
        }
    }

    /// Whether the range differs from its documented default bounds
    pub fn range_is_active(&self, dimension: RangeDimension) -> bool {
        self.range(dimension) != NumericRange::default_for(dimension)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_edit(&mut self, edit: FilterEdit) {
        match edit {
            FilterEdit::SetSearch(search) => self.search = search,
            FilterEdit::ToggleValue(dimension, value) => {
                let values = self.values_mut(dimension);
                if !values.remove(&value) {
                    values.insert(value);
                }
            }
            FilterEdit::SetValues(dimension, values) => *self.values_mut(dimension) = values,
            FilterEdit::ClearDimension(dimension) => self.values_mut(dimension).clear(),
            FilterEdit::SetRange(dimension, min, max) => {
                *self.range_mut(dimension) = NumericRange::for_dimension(dimension, min, max)
            }
            FilterEdit::ResetRange(dimension) => {
                *self.range_mut(dimension) = NumericRange::default_for(dimension)
            }
            FilterEdit::SetFlag(dimension, flag) => *self.flag_mut(dimension) = flag,
            FilterEdit::Reset => *self = Self::default(),
        }
    }

    /// Number shown on the filter badge.
    ///
    /// One for a non-empty search, one per selected value, one per set flag and
    /// one per range moved off its default bounds.
    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.search.is_empty());
        let values: usize = MultiSelectDimension::ALL
            .iter()
            .map(|&d| self.values(d).len())
            .sum();
        let flags = FlagDimension::ALL
            .iter()
            .filter(|&&d| self.flag(d).is_some())
            .count();
        let ranges = RangeDimension::ALL
            .iter()
            .filter(|&&d| self.range_is_active(d))
            .count();
        search + values + flags + ranges
    }

    /// The active predicates in evaluation order: search, flags, sets, ranges.
    ///
    /// Inactive dimensions produce no predicate, so the default state yields
    /// none and matches every candidate.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if !self.search.is_empty() {
            predicates.push(Predicate::TextSearch(TextSearch::new(&self.search)));
        }
        for dimension in FlagDimension::ALL {
            if let Some(expected) = self.flag(dimension) {
                predicates.push(Predicate::TriState(TriStateFilter::new(dimension, expected)));
            }
        }
        for dimension in MultiSelectDimension::ALL {
            let values = self.values(dimension);
            if !values.is_empty() {
                predicates.push(Predicate::MultiSelect(MultiSelectFilter::new(
                    dimension,
                    values.iter(),
                )));
            }
        }
        for dimension in RangeDimension::ALL {
            if self.range_is_active(dimension) {
                predicates.push(Predicate::Range(RangeFilter::new(
                    dimension,
                    self.range(dimension),
                )));
            }
        }

        predicates
    }
}
