//! The filterable dimensions of a candidate.
//!
//! Each enum names one family of FilterState fields and knows how to read the
//! matching candidate field, so predicates dispatch on a closed set instead of
//! looking fields up by name.

use roster::Candidate;

/// Fields filtered by a set of strings (OR within the set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MultiSelectDimension {
    Regions,
    Countries,
    Skills,
    Tools,
    Languages,
    Certifications,
    Availability,
    Education,
    ContractType,
    NoticePeriod,
}

impl MultiSelectDimension {
    /// Evaluation order used by the predicate evaluator
    pub const ALL: [MultiSelectDimension; 10] = [
        MultiSelectDimension::Regions,
        MultiSelectDimension::Countries,
        MultiSelectDimension::Skills,
        MultiSelectDimension::Tools,
        MultiSelectDimension::Languages,
        MultiSelectDimension::Certifications,
        MultiSelectDimension::Availability,
        MultiSelectDimension::Education,
        MultiSelectDimension::ContractType,
        MultiSelectDimension::NoticePeriod,
    ];

    /// The FilterState field name
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiSelectDimension::Regions => "regions",
            MultiSelectDimension::Countries => "countries",
            MultiSelectDimension::Skills => "skills",
            MultiSelectDimension::Tools => "tools",
            MultiSelectDimension::Languages => "languages",
            MultiSelectDimension::Certifications => "certifications",
            MultiSelectDimension::Availability => "availability",
            MultiSelectDimension::Education => "education",
            MultiSelectDimension::ContractType => "contractType",
            MultiSelectDimension::NoticePeriod => "noticePeriod",
        }
    }

    /// The candidate values this dimension compares against
    pub fn candidate_values<'a>(&self, candidate: &'a Candidate) -> Vec<&'a str> {
        match self {
            MultiSelectDimension::Regions => candidate.region.as_deref().into_iter().collect(),
            MultiSelectDimension::Countries => vec![candidate.country.as_str()],
            MultiSelectDimension::Skills => as_strs(&candidate.skills),
            MultiSelectDimension::Tools => as_strs(&candidate.tools),
            MultiSelectDimension::Languages => as_strs(&candidate.languages),
            MultiSelectDimension::Certifications => as_strs(&candidate.certifications),
            MultiSelectDimension::Availability => vec![candidate.availability.as_str()],
            MultiSelectDimension::Education => as_strs(&candidate.education),
            MultiSelectDimension::ContractType => as_strs(&candidate.contract_types),
            MultiSelectDimension::NoticePeriod => {
                candidate.notice_period.as_deref().into_iter().collect()
            }
        }
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// Fields filtered by an inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeDimension {
    Rate,
    Experience,
    MatchScore,
    SalaryExpectation,
}

impl RangeDimension {
    pub const ALL: [RangeDimension; 4] = [
        RangeDimension::Rate,
        RangeDimension::Experience,
        RangeDimension::MatchScore,
        RangeDimension::SalaryExpectation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeDimension::Rate => "rateRange",
            RangeDimension::Experience => "experienceRange",
            RangeDimension::MatchScore => "matchScoreRange",
            RangeDimension::SalaryExpectation => "salaryExpectationRange",
        }
    }

    /// Default bounds; a range at its default bounds constrains nothing
    pub fn default_bounds(&self) -> (f64, f64) {
        match self {
            RangeDimension::Rate => (0.0, 200.0),
            RangeDimension::Experience => (0.0, 20.0),
            RangeDimension::MatchScore => (0.0, 100.0),
            RangeDimension::SalaryExpectation => (0.0, 200_000.0),
        }
    }

    /// The candidate's numeric value, 0 when absent
    pub fn candidate_value(&self, candidate: &Candidate) -> f64 {
        match self {
            RangeDimension::Rate => candidate.rate.unwrap_or(0.0),
            RangeDimension::Experience => candidate
                .experience
                .as_deref()
                .map(parse_experience_years)
                .unwrap_or(0.0),
            RangeDimension::MatchScore => candidate.match_score.unwrap_or(0.0),
            RangeDimension::SalaryExpectation => candidate.salary_expectation.unwrap_or(0.0),
        }
    }
}

/// Years of experience from free text.
///
/// Every non-digit character is dropped before parsing, so "5 years" reads as
/// 5 and "10+ years" as 10. Text without digits reads as 0.
pub fn parse_experience_years(text: &str) -> f64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}

/// Boolean candidate fields filtered by a tri-state flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagDimension {
    Verified,
    Portfolio,
    Github,
    Linkedin,
    Video,
}

impl FlagDimension {
    pub const ALL: [FlagDimension; 5] = [
        FlagDimension::Verified,
        FlagDimension::Portfolio,
        FlagDimension::Github,
        FlagDimension::Linkedin,
        FlagDimension::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlagDimension::Verified => "verified",
            FlagDimension::Portfolio => "portfolioRequired",
            FlagDimension::Github => "githubRequired",
            FlagDimension::Linkedin => "linkedinRequired",
            FlagDimension::Video => "videoRequired",
        }
    }

    pub fn candidate_flag(&self, candidate: &Candidate) -> bool {
        match self {
            FlagDimension::Verified => candidate.verified,
            FlagDimension::Portfolio => candidate.has_portfolio,
            FlagDimension::Github => candidate.has_github,
            FlagDimension::Linkedin => candidate.has_linkedin,
            FlagDimension::Video => candidate.has_video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::Availability;

    #[test]
    fn test_parse_experience_years() {
        assert_eq!(parse_experience_years("5 years"), 5.0);
        assert_eq!(parse_experience_years("10+ years"), 10.0);
        assert_eq!(parse_experience_years("junior"), 0.0);
        assert_eq!(parse_experience_years(""), 0.0);
    }

    #[test]
    fn test_absent_numbers_read_as_zero() {
        let candidate = Candidate::default();
        for dimension in RangeDimension::ALL {
            assert_eq!(dimension.candidate_value(&candidate), 0.0);
        }
    }

    #[test]
    fn test_candidate_values() {
        let candidate = Candidate {
            country: "Chile".into(),
            region: None,
            availability: Availability::Short,
            tools: vec!["Git".into(), "Jira".into()],
            ..Default::default()
        };

        assert_eq!(MultiSelectDimension::Countries.candidate_values(&candidate), vec!["Chile"]);
        assert!(MultiSelectDimension::Regions.candidate_values(&candidate).is_empty());
        assert_eq!(MultiSelectDimension::Availability.candidate_values(&candidate), vec!["short"]);
        assert_eq!(MultiSelectDimension::Tools.candidate_values(&candidate).len(), 2);
    }
}
