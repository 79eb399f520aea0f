//! # List Controller
//!
//! Owns everything a candidate list screen needs and derives what it renders:
//! 1. Hold the filter state, tab and sort state
//! 2. On every change, filter the roster and stable-sort the survivors
//! 3. Split the result into pages
//! 4. Track selection and expanded rows independently of filtering
//! 5. Report selections, detail views and applied filters to an observer
//!
//! Grid, list and expandable screens all use this one controller with a
//! different `PresentationMode`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use filtering::{
    CandidateTab, FilterEdit, FilterState, SortKey, SortState, filter_and_sort_indices,
};
use roster::{Candidate, CandidateId, Roster};

use crate::config::ControllerConfig;
use crate::observer::ListObserver;
use crate::pagination::Pagination;
use crate::panel::FilterSink;
use crate::quick_filter::QuickFilter;
use crate::view::{EmptyState, ListView, PageView};

/// How the list is laid out on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    #[default]
    Grid,
    List,
    /// List rows that expand in place to show details
    Expandable,
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PresentationMode::Grid => "grid",
            PresentationMode::List => "list",
            PresentationMode::Expandable => "expandable",
        })
    }
}

impl FromStr for PresentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(PresentationMode::Grid),
            "list" => Ok(PresentationMode::List),
            "expandable" => Ok(PresentationMode::Expandable),
            other => Err(format!(
                "unknown presentation mode '{other}' (expected grid, list or expandable)"
            )),
        }
    }
}

/// Filter, sort, selection and paging state for one candidate list
pub struct ListController {
    roster: Arc<Roster>,
    filters: FilterState,
    tab: CandidateTab,
    sort: SortState,
    selection: HashSet<CandidateId>,
    expanded: HashSet<CandidateId>,
    mode: PresentationMode,
    pagination: Pagination,
    /// Bumped whenever `filters` changes; panels re-sync when it moves
    revision: u64,
    /// Roster indices passing the filters, in sorted order
    visible: Vec<usize>,
    observer: Option<Box<dyn ListObserver>>,
}

impl ListController {
    /// Create a controller over a shared roster
    ///
    /// # Arguments
    /// * `roster` - Shared candidates; several screens may hold the same roster
    /// * `config` - Initial sort, tab, page size and presentation mode
    pub fn new(roster: Arc<Roster>, config: &ControllerConfig) -> Self {
        let mut controller = Self {
            roster,
            filters: FilterState::default(),
            tab: config.tab,
            sort: SortState::new(config.sort_by, config.sort_order),
            selection: HashSet::new(),
            expanded: HashSet::new(),
            mode: config.presentation,
            pagination: Pagination::new(config.page_size),
            revision: 0,
            visible: Vec::new(),
            observer: None,
        };
        controller.recompute();
        info!(
            "List controller ready: {} candidates, {} mode",
            controller.roster.len(),
            controller.mode
        );
        controller
    }

    /// Start from a saved filter state instead of the defaults
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self.revision += 1;
        self.recompute();
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn ListObserver>) {
        self.observer = Some(observer);
    }

    // ---------------------------------------------------------------------
    // Derived list
    // ---------------------------------------------------------------------

    /// Re-derive the visible list from scratch.
    ///
    /// ## Algorithm
    /// 1. Run the tab and filter pipeline over the roster, in load order
    /// 2. Stable-sort the survivors with the comparator, so ties keep load order
    /// 3. Clamp the current page to the new page count
    fn recompute(&mut self) {
        let candidates = self.roster.candidates();
        let visible = filter_and_sort_indices(candidates, self.tab, &self.filters, self.sort);

        debug!(
            "Recomputed list: {} of {} candidates visible ({} active filters, sort {} {})",
            visible.len(),
            candidates.len(),
            self.filters.active_filter_count(),
            self.sort.sort_by,
            self.sort.sort_order
        );

        self.visible = visible;
        self.pagination.set_total(self.visible.len());
    }

    /// All candidates passing the filters, sorted
    pub fn visible(&self) -> Vec<&Candidate> {
        let candidates = self.roster.candidates();
        self.visible.iter().map(|&idx| &candidates[idx]).collect()
    }

    pub fn visible_ids(&self) -> Vec<CandidateId> {
        let candidates = self.roster.candidates();
        self.visible.iter().map(|&idx| candidates[idx].id).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }

    /// Results page or empty state
    pub fn view_state(&self) -> ListView<'_> {
        if self.visible.is_empty() {
            if self.roster.is_empty() {
                return ListView::Empty(EmptyState::no_candidates());
            }
            return ListView::Empty(EmptyState::no_matches(
                self.filters.active_filter_count(),
                !self.filters.is_default() || self.tab.is_active(),
            ));
        }
        ListView::Results(PageView {
            items: self.page_items(),
            page: self.pagination.page(),
            total_pages: self.pagination.total_pages(),
            total_visible: self.pagination.total_items(),
            total_candidates: self.roster.len(),
        })
    }

    // ---------------------------------------------------------------------
    // Filters, tab, sort
    // ---------------------------------------------------------------------

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tab(&self) -> CandidateTab {
        self.tab
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Replace the filter state, returning to the first page
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.revision += 1;
        self.pagination.reset();
        self.recompute();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_apply_filters(&self.filters);
        }
    }

    pub fn apply_edit(&mut self, edit: FilterEdit) {
        let mut next = self.filters.clone();
        next.apply_edit(edit);
        self.set_filters(next);
    }

    /// Back to the full roster: default filters and the "all" tab
    pub fn clear_filters(&mut self) {
        self.tab = CandidateTab::All;
        self.set_filters(FilterState::default());
    }

    pub fn apply_quick_filter(&mut self, quick: QuickFilter) {
        debug!("Applying quick filter {}", quick);
        let next = quick.apply_to(&self.filters);
        self.set_filters(next);
    }

    pub fn set_tab(&mut self, tab: CandidateTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.pagination.reset();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.pagination.reset();
        self.recompute();
    }

    /// Sort by a key; choosing the current key again flips the direction
    pub fn sort_by(&mut self, key: SortKey) {
        let sort = if self.sort.sort_by == key {
            SortState::new(key, self.sort.sort_order.reversed())
        } else {
            SortState::new(key, self.sort.sort_order)
        };
        self.set_sort(sort);
    }

    pub fn toggle_sort_order(&mut self) {
        self.set_sort(SortState::new(self.sort.sort_by, self.sort.sort_order.reversed()));
    }

    pub fn set_mode(&mut self, mode: PresentationMode) {
        self.mode = mode;
        if mode != PresentationMode::Expandable {
            self.expanded.clear();
        }
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Select or deselect one candidate.
    ///
    /// Any candidate in the roster may be selected, visible or not. Returns
    /// false for an id the roster does not know.
    pub fn select(&mut self, id: CandidateId, selected: bool) -> bool {
        if !self.roster.contains(id) {
            warn!("Ignoring selection of unknown candidate {}", id);
            return false;
        }
        let changed = if selected {
            self.selection.insert(id)
        } else {
            self.selection.remove(&id)
        };
        if changed {
            self.notify_select(id, selected);
        }
        true
    }

    /// Select every visible candidate, or clear the selection when every
    /// visible candidate is already selected.
    ///
    /// Selecting replaces the selection with exactly the visible ids.
    pub fn toggle_select_all(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let visible: HashSet<CandidateId> = self.visible_ids().into_iter().collect();
        let all_selected = visible.iter().all(|id| self.selection.contains(id));

        let previous = std::mem::take(&mut self.selection);
        if !all_selected {
            self.selection = visible;
        }

        let mut removed: Vec<CandidateId> = previous.difference(&self.selection).copied().collect();
        let mut added: Vec<CandidateId> = self.selection.difference(&previous).copied().collect();
        removed.sort_unstable();
        added.sort_unstable();
        for id in removed {
            self.notify_select(id, false);
        }
        for id in added {
            self.notify_select(id, true);
        }
    }

    pub fn clear_selection(&mut self) {
        let mut previous: Vec<CandidateId> = self.selection.drain().collect();
        previous.sort_unstable();
        for id in previous {
            self.notify_select(id, false);
        }
    }

    pub fn is_selected(&self, id: CandidateId) -> bool {
        self.selection.contains(&id)
    }

    /// Size of the whole selection, including candidates filtered out of view
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    pub fn selected_ids(&self) -> Vec<CandidateId> {
        let mut ids: Vec<CandidateId> = self.selection.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Selected candidates in roster order, the targets of a bulk action
    pub fn selected_candidates(&self) -> Vec<&Candidate> {
        self.roster
            .candidates()
            .iter()
            .filter(|c| self.selection.contains(&c.id))
            .collect()
    }

    /// Selected ids that the current filters hide
    pub fn stale_selection(&self) -> Vec<CandidateId> {
        let visible: HashSet<CandidateId> = self.visible_ids().into_iter().collect();
        let mut stale: Vec<CandidateId> = self
            .selection
            .iter()
            .filter(|id| !visible.contains(id))
            .copied()
            .collect();
        stale.sort_unstable();
        stale
    }

    /// Drop hidden ids from the selection; returns how many were dropped.
    ///
    /// Filtering never does this on its own.
    pub fn prune_selection(&mut self) -> usize {
        let stale = self.stale_selection();
        for &id in &stale {
            self.selection.remove(&id);
            self.notify_select(id, false);
        }
        stale.len()
    }

    fn notify_select(&mut self, id: CandidateId, selected: bool) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_select(id, selected);
        }
    }

    // ---------------------------------------------------------------------
    // Detail and expansion
    // ---------------------------------------------------------------------

    /// Open a candidate's detail view
    pub fn view(&mut self, id: CandidateId) -> Option<&Candidate> {
        if !self.roster.contains(id) {
            warn!("Cannot view unknown candidate {}", id);
            return None;
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_view(id);
        }
        self.roster.get(id)
    }

    /// Expand or collapse a row; only expandable lists have rows to expand
    pub fn toggle_expanded(&mut self, id: CandidateId) -> bool {
        if self.mode != PresentationMode::Expandable || !self.roster.contains(id) {
            return false;
        }
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.expanded.contains(&id)
    }

    pub fn is_expanded(&self, id: CandidateId) -> bool {
        self.expanded.contains(&id)
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn set_page(&mut self, page: usize) -> usize {
        self.pagination.set_page(page)
    }

    pub fn next_page(&mut self) -> usize {
        self.pagination.next()
    }

    pub fn prev_page(&mut self) -> usize {
        self.pagination.prev()
    }

    /// Candidates on the current page
    pub fn page_items(&self) -> Vec<&Candidate> {
        let candidates = self.roster.candidates();
        self.visible[self.pagination.range()]
            .iter()
            .map(|&idx| &candidates[idx])
            .collect()
    }
}

impl FilterSink for ListController {
    fn filters(&self) -> &FilterState {
        &self.filters
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn apply_filters(&mut self, filters: FilterState) {
        self.set_filters(filters);
    }

    fn reset_filters(&mut self) {
        self.clear_filters();
    }
}
