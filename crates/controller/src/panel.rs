//! # Filter Panel
//!
//! Holds a draft `FilterState` that the user edits, and decides when the
//! draft reaches the list:
//! - Deferred mode: edits touch the draft only, `apply` sends it
//! - Immediate mode: every edit is sent as soon as it lands
//!
//! Changes made on the controller side (quick filters, a cleared empty state)
//! bump the controller revision. The panel pulls them back into the draft
//! before every edit or apply, so a stale draft never overwrites them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use filtering::{FilterEdit, FilterState};

/// Receiver of filter states produced by a panel
pub trait FilterSink {
    /// The filters currently in effect
    fn filters(&self) -> &FilterState;

    /// Moves whenever `filters` changes, from any side
    fn revision(&self) -> u64;

    fn apply_filters(&mut self, filters: FilterState);

    fn reset_filters(&mut self) {
        self.apply_filters(FilterState::default());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    Deferred,
    Immediate,
}

/// Screen class the panel is rendered on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Desktop => "desktop",
            Layout::Tablet => "tablet",
            Layout::Mobile => "mobile",
        })
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(Layout::Desktop),
            "tablet" => Ok(Layout::Tablet),
            "mobile" => Ok(Layout::Mobile),
            other => Err(format!(
                "unknown layout '{other}' (expected desktop, tablet or mobile)"
            )),
        }
    }
}

/// Desktop panels are always on screen; smaller layouts open as a drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    AlwaysVisible,
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub struct FilterPanel {
    layout: Layout,
    mode: ApplyMode,
    visibility: PanelVisibility,
    draft: FilterState,
    /// Last sink state the draft was synced from
    applied: FilterState,
    /// Deferred edits not yet applied, replayed on every re-sync
    pending: Vec<FilterEdit>,
    seen_revision: Option<u64>,
}

impl FilterPanel {
    /// Desktop panels apply immediately and stay visible. Tablet and mobile
    /// panels start closed and apply on demand.
    pub fn new(layout: Layout) -> Self {
        let (mode, visibility) = match layout {
            Layout::Desktop => (ApplyMode::Immediate, PanelVisibility::AlwaysVisible),
            Layout::Tablet | Layout::Mobile => (ApplyMode::Deferred, PanelVisibility::Closed),
        };
        Self {
            layout,
            mode,
            visibility,
            draft: FilterState::default(),
            applied: FilterState::default(),
            pending: Vec::new(),
            seen_revision: None,
        }
    }

    pub fn with_mode(mut self, mode: ApplyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn mode(&self) -> ApplyMode {
        self.mode
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility != PanelVisibility::Closed
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    /// Pull the list's filters into the draft when its revision moved.
    ///
    /// Unapplied deferred edits are replayed on top of the new filters.
    /// Returns whether the draft was rebuilt.
    pub fn sync(&mut self, filters: &FilterState, revision: u64) -> bool {
        if self.seen_revision == Some(revision) {
            return false;
        }
        debug!(
            "Filter panel re-synced to revision {} (was {:?}, {} pending edits)",
            revision,
            self.seen_revision,
            self.pending.len()
        );
        self.applied = filters.clone();
        self.draft = filters.clone();
        for edit in &self.pending {
            self.draft.apply_edit(edit.clone());
        }
        self.seen_revision = Some(revision);
        true
    }

    /// Edit the draft; immediate panels forward the result right away
    pub fn edit(&mut self, edit: FilterEdit, sink: &mut impl FilterSink) {
        self.sync(sink.filters(), sink.revision());
        self.draft.apply_edit(edit.clone());
        match self.mode {
            ApplyMode::Immediate => self.send(sink),
            ApplyMode::Deferred => self.pending.push(edit),
        }
    }

    /// Send the draft to the list. Mobile drawers close afterwards.
    pub fn apply(&mut self, sink: &mut impl FilterSink) {
        self.sync(sink.filters(), sink.revision());
        self.send(sink);
        if self.layout == Layout::Mobile && self.visibility == PanelVisibility::Open {
            self.visibility = PanelVisibility::Closed;
        }
    }

    /// Reset both the draft and the list to the default filters
    pub fn clear(&mut self, sink: &mut impl FilterSink) {
        self.draft = FilterState::default();
        self.applied = FilterState::default();
        self.pending.clear();
        sink.reset_filters();
        self.seen_revision = Some(sink.revision());
    }

    /// Open or close the drawer; no effect on an always-visible panel
    pub fn toggle(&mut self) -> PanelVisibility {
        self.visibility = match self.visibility {
            PanelVisibility::AlwaysVisible => PanelVisibility::AlwaysVisible,
            PanelVisibility::Closed => PanelVisibility::Open,
            PanelVisibility::Open => PanelVisibility::Closed,
        };
        self.visibility
    }

    /// Badge count, taken from the draft
    pub fn active_filter_count(&self) -> usize {
        self.draft.active_filter_count()
    }

    /// Whether the draft holds edits the list has not seen
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.applied
    }

    fn send(&mut self, sink: &mut impl FilterSink) {
        self.applied = self.draft.clone();
        self.pending.clear();
        sink.apply_filters(self.draft.clone());
        self.seen_revision = Some(sink.revision());
    }
}
