//! Integration tests for the filtering crate.
//!
//! These tests run the evaluator and the comparator together over a small
//! roster shaped like the dashboard's mock data.

use filtering::{
    CandidateTab, FilterEdit, FilterState, FlagDimension, MultiSelectDimension, RangeDimension,
    SortKey, SortOrder, SortState, filter_and_sort, matches,
};
use roster::{Availability, Candidate};

fn create_test_roster() -> Vec<Candidate> {
    vec![
        Candidate {
            id: 1,
            name: "Jane Martínez".into(),
            email: "jane@example.com".into(),
            position: "Medical Virtual Assistant".into(),
            skills: vec!["EMR".into(), "HIPAA Compliance".into()],
            rate: Some(8.5),
            experience: Some("5 years".into()),
            match_score: Some(94.0),
            availability: Availability::Immediate,
            verified: true,
            country: "Mexico".into(),
            ..Default::default()
        },
        Candidate {
            id: 2,
            name: "Carlos Rodríguez".into(),
            skills: vec!["React".into(), "Node.js".into()],
            tools: vec!["Docker".into()],
            rate: Some(35.0),
            experience: Some("7 years".into()),
            match_score: Some(88.0),
            availability: Availability::Short,
            verified: true,
            country: "Colombia".into(),
            has_github: true,
            ..Default::default()
        },
        Candidate {
            id: 3,
            name: "Aiko Tanaka".into(),
            skills: vec!["Vue".into()],
            rate: Some(42.0),
            experience: Some("3 years".into()),
            match_score: Some(76.0),
            country: "Japan".into(),
            has_github: true,
            ..Default::default()
        },
        Candidate {
            id: 4,
            name: "Miguel Santos".into(),
            skills: vec!["React Native".into()],
            rate: Some(200.0),
            availability: Availability::Immediate,
            verified: true,
            country: "Brazil".into(),
            ..Default::default()
        },
        Candidate {
            id: 5,
            name: "Unrated Newcomer".into(),
            ..Default::default()
        },
    ]
}

fn ids(candidates: &[&Candidate]) -> Vec<u32> {
    candidates.iter().map(|c| c.id).collect()
}

#[test]
fn test_default_state_matches_everyone() {
    let roster = create_test_roster();
    let filters = FilterState::default();

    assert!(roster.iter().all(|c| matches(c, &filters)));
}

#[test]
fn test_verified_flag_excludes_mismatch_both_ways() {
    let roster = create_test_roster();
    for value in [true, false] {
        let mut filters = FilterState::default();
        filters.verified = Some(value);
        for candidate in &roster {
            assert_eq!(matches(candidate, &filters), candidate.verified == value);
        }
    }
}

#[test]
fn test_idempotent_application() {
    let roster = create_test_roster();
    let snapshot = roster.clone();
    let mut filters = FilterState::default();
    filters.apply_edit(FilterEdit::SetSearch("a".into()));
    let sort = SortState::new(SortKey::Rate, SortOrder::Desc);

    let first = ids(&filter_and_sort(&roster, CandidateTab::All, &filters, sort));
    let second = ids(&filter_and_sort(&roster, CandidateTab::All, &filters, sort));

    assert_eq!(first, second);
    assert_eq!(roster, snapshot);
}

#[test]
fn test_rate_direction_round_trip() {
    let roster = create_test_roster();
    let filters = FilterState::default();
    let desc = SortState::new(SortKey::Rate, SortOrder::Desc);
    let asc = SortState::new(SortKey::Rate, SortOrder::Asc);

    let original = ids(&filter_and_sort(&roster, CandidateTab::All, &filters, desc));
    let _ = filter_and_sort(&roster, CandidateTab::All, &filters, asc);
    let again = ids(&filter_and_sort(&roster, CandidateTab::All, &filters, desc));

    assert_eq!(original, again);
    assert_eq!(original, vec![4, 3, 2, 1, 5]);
}

#[test]
fn test_rate_upper_bound_inclusive() {
    let roster = create_test_roster();
    let mut filters = FilterState::default();
    filters.apply_edit(FilterEdit::SetRange(RangeDimension::Rate, 0.0, 35.0));

    let at_bound = &roster[1];
    assert!(matches(at_bound, &filters));

    let mut above = at_bound.clone();
    above.rate = Some(35.01);
    assert!(!matches(&above, &filters));
}

#[test]
fn test_skills_or_semantics() {
    let roster = create_test_roster();
    let mut filters = FilterState::default();
    filters.apply_edit(FilterEdit::ToggleValue(MultiSelectDimension::Skills, "React".into()));

    let visible = filter_and_sort(
        &roster,
        CandidateTab::All,
        &filters,
        SortState::new(SortKey::Name, SortOrder::Asc),
    );

    // Substring semantics keep "React Native" alongside "React"
    assert_eq!(ids(&visible), vec![2, 4]);
}

#[test]
fn test_experience_scenario() {
    let roster = create_test_roster();
    let mut filters = FilterState::default();
    filters.apply_edit(FilterEdit::SetRange(RangeDimension::Experience, 5.0, 20.0));

    assert!(matches(&roster[0], &filters));
    assert!(!matches(&roster[2], &filters), "3 years is below 5");
    assert!(!matches(&roster[4], &filters), "missing experience reads as 0");
}

#[test]
fn test_and_across_dimensions() {
    let roster = create_test_roster();
    let mut filters = FilterState::default();
    filters.apply_edit(FilterEdit::SetFlag(FlagDimension::Github, Some(true)));
    filters.apply_edit(FilterEdit::ToggleValue(
        MultiSelectDimension::Countries,
        "japan".into(),
    ));

    let visible = filter_and_sort(&roster, CandidateTab::All, &filters, SortState::default());
    assert_eq!(ids(&visible), vec![3]);

    let tabbed = filter_and_sort(&roster, CandidateTab::Verified, &filters, SortState::default());
    assert!(tabbed.is_empty());
}

#[test]
fn test_match_sort_puts_unscored_last() {
    let roster = create_test_roster();
    let visible = filter_and_sort(
        &roster,
        CandidateTab::Verified,
        &FilterState::default(),
        SortState::new(SortKey::Match, SortOrder::Desc),
    );

    assert_eq!(ids(&visible), vec![1, 2, 4]);
}
