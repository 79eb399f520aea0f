//! Candidate list screens: state, derived view and the filter panel.
//!
//! This crate provides:
//! - ListController, the single controller behind grid, list and expandable lists
//! - FilterPanel with deferred or immediate apply and a visibility state machine
//! - Pagination, quick filters and the empty state
//! - ListObserver callbacks for selection, detail views and applied filters
//!
//! ## Example Usage
//! ```ignore
//! use controller::{ControllerConfig, FilterPanel, ListController};
//!
//! let config = ControllerConfig::default();
//! let mut list = ListController::new(roster, &config);
//! let mut panel = FilterPanel::new(config.layout);
//! panel.sync(list.filters(), list.revision());
//! panel.edit(FilterEdit::SetSearch("jane".into()), &mut list);
//! ```

pub mod config;
pub mod controller;
pub mod observer;
pub mod pagination;
pub mod panel;
pub mod quick_filter;
pub mod view;

// Re-export main types
pub use config::{ControllerConfig, DEFAULT_PAGE_SIZE};
pub use controller::{ListController, PresentationMode};
pub use observer::ListObserver;
pub use pagination::Pagination;
pub use panel::{ApplyMode, FilterPanel, FilterSink, Layout, PanelVisibility};
pub use quick_filter::QuickFilter;
pub use view::{EmptyState, ListView, PageView};
