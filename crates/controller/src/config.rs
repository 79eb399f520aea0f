//! Controller configuration, read from JSON.
//!
//! ```json
//! { "pageSize": 24, "sortBy": "rate", "sortOrder": "asc",
//!   "presentation": "list", "layout": "mobile" }
//! ```
//! Every key is optional.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

use filtering::{CandidateTab, SortKey, SortOrder};

use crate::controller::PresentationMode;
use crate::panel::Layout;

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControllerConfig {
    pub page_size: usize,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub tab: CandidateTab,
    pub presentation: PresentationMode,
    pub layout: Layout,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            tab: CandidateTab::default(),
            presentation: PresentationMode::default(),
            layout: Layout::default(),
        }
    }
}

impl ControllerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid controller config in {}", path.display()))?;
        config.validate()?;

        info!(
            "Loaded controller config from {}: page size {}, sort {} {}",
            path.display(),
            config.page_size,
            config.sort_by,
            config.sort_order
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("pageSize must be at least 1");
        }
        Ok(())
    }
}
