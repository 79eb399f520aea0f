//! End-to-end list flows over the bundled mock roster: a panel driving a
//! controller, quick filters, selection and observer callbacks.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use controller::{
    ControllerConfig, FilterPanel, Layout, ListController, ListObserver, ListView, PanelVisibility,
    QuickFilter,
};
use filtering::{
    CandidateTab, FilterEdit, FilterState, FlagDimension, MultiSelectDimension, RangeDimension,
};
use roster::{CandidateId, Roster};

fn load_controller() -> ListController {
    let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/candidates.json"));
    let roster = Roster::load(path).unwrap();
    ListController::new(Arc::new(roster), &ControllerConfig::default())
}

#[derive(Clone, Default)]
struct EventLog(Rc<RefCell<Vec<String>>>);

impl ListObserver for EventLog {
    fn on_select(&mut self, id: CandidateId, selected: bool) {
        self.0.borrow_mut().push(format!("select {id} {selected}"));
    }

    fn on_view(&mut self, id: CandidateId) {
        self.0.borrow_mut().push(format!("view {id}"));
    }

    fn on_apply_filters(&mut self, filters: &FilterState) {
        self.0.borrow_mut().push(format!("filters {}", filters.active_filter_count()));
    }
}

#[test]
fn test_default_list_is_ranked_by_match() {
    let list = load_controller();

    let ids = list.visible_ids();
    assert_eq!(ids.len(), 12);
    assert_eq!(ids[0], 1);
    assert_eq!(ids[1], 8);
    // No match score reads as 0
    assert_eq!(ids[11], 12);
    assert_eq!(list.total_pages(), 1);
}

#[test]
fn test_mobile_panel_applies_on_demand() {
    let mut list = load_controller();
    let mut panel = FilterPanel::new(Layout::Mobile);
    panel.sync(list.filters(), list.revision());

    panel.toggle();
    panel.edit(FilterEdit::SetSearch("JANE".into()), &mut list);
    assert_eq!(list.visible_count(), 12);

    panel.apply(&mut list);
    assert_eq!(list.visible_ids(), vec![1]);
    assert_eq!(panel.visibility(), PanelVisibility::Closed);
}

#[test]
fn test_desktop_panel_applies_each_edit() {
    let mut list = load_controller();
    let mut panel = FilterPanel::new(Layout::Desktop);
    panel.sync(list.filters(), list.revision());

    panel.edit(
        FilterEdit::ToggleValue(MultiSelectDimension::Skills, "react".into()),
        &mut list,
    );
    // "react" also matches "React Native"
    assert_eq!(list.visible_ids(), vec![2, 4]);

    panel.edit(FilterEdit::SetRange(RangeDimension::Rate, 30.0, 200.0), &mut list);
    assert_eq!(list.visible_ids(), vec![2]);

    panel.clear(&mut list);
    assert_eq!(list.visible_count(), 12);
    assert!(panel.draft().is_default());
}

#[test]
fn test_quick_filters_resync_panel() {
    let mut list = load_controller();
    let mut panel = FilterPanel::new(Layout::Tablet);
    panel.sync(list.filters(), list.revision());

    panel.edit(FilterEdit::SetSearch("a".into()), &mut list);
    panel.apply(&mut list);
    assert!(!panel.sync(list.filters(), list.revision()));

    list.apply_quick_filter(QuickFilter::AvailableNow);
    list.apply_quick_filter(QuickFilter::TopMatches);
    assert_eq!(list.visible_ids(), vec![1, 4]);

    assert!(panel.sync(list.filters(), list.revision()));
    assert_eq!(panel.draft().search, "a");
    assert!(panel.draft().availability.contains("immediate"));
    assert_eq!(panel.active_filter_count(), 3);
}

#[test]
fn test_desktop_edit_keeps_quick_filter() {
    let mut list = load_controller();
    let mut panel = FilterPanel::new(Layout::Desktop);
    panel.sync(list.filters(), list.revision());

    list.apply_quick_filter(QuickFilter::VerifiedOnly);
    assert_eq!(list.visible_count(), 7);

    panel.edit(FilterEdit::SetSearch("a".into()), &mut list);
    assert_eq!(list.filters().verified, Some(true));
    assert_eq!(list.filters().search, "a");
    assert!(list.visible().iter().all(|c| c.verified));
}

#[test]
fn test_deferred_apply_keeps_cleared_state() {
    let mut list = load_controller();
    let mut panel = FilterPanel::new(Layout::Mobile);

    panel.edit(FilterEdit::SetSearch("jane".into()), &mut list);
    panel.apply(&mut list);
    assert_eq!(list.visible_ids(), vec![1]);

    // Empty-state style reset from the list, then a fresh draft edit
    list.apply_quick_filter(QuickFilter::TopMatches);
    list.clear_filters();
    panel.edit(FilterEdit::SetFlag(FlagDimension::Verified, Some(false)), &mut list);
    panel.apply(&mut list);

    assert_eq!(list.filters().search, "");
    assert!(!list.filters().range_is_active(RangeDimension::MatchScore));
    assert_eq!(list.visible_count(), 5);
}

#[test]
fn test_selection_survives_filtering() {
    let mut list = load_controller();
    list.set_tab(CandidateTab::Verified);
    list.toggle_select_all();
    assert_eq!(list.selection_count(), 7);

    list.apply_edit(FilterEdit::SetSearch("jane".into()));
    assert_eq!(list.selection_count(), 7);
    assert_eq!(list.stale_selection().len(), 6);

    // Every visible candidate is selected, so select-all clears
    list.toggle_select_all();
    assert_eq!(list.selection_count(), 0);
}

#[test]
fn test_empty_state_then_clear() {
    let mut list = load_controller();
    list.apply_edit(FilterEdit::SetSearch("nobody by this name".into()));

    match list.view_state() {
        ListView::Empty(empty) => {
            assert_eq!(empty.active_filters, 1);
            assert!(empty.can_clear);
        }
        ListView::Results(_) => panic!("expected empty state"),
    }

    list.clear_filters();
    match list.view_state() {
        ListView::Results(page) => assert_eq!(page.total_visible, 12),
        ListView::Empty(_) => panic!("expected results"),
    }
}

#[test]
fn test_observer_receives_events() {
    let mut list = load_controller();
    let log = EventLog::default();
    list.set_observer(Box::new(log.clone()));

    list.select(3, true);
    list.select(3, true);
    list.view(3);
    list.apply_quick_filter(QuickFilter::VerifiedOnly);
    list.prune_selection();

    assert_eq!(
        *log.0.borrow(),
        vec!["select 3 true", "view 3", "filters 1", "select 3 false"]
    );
}
