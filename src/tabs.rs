//! Tabbed "operations" component.
//!
//! Clicks are delegated to the tab container. A click carries the id of the
//! closest tab button, or nothing when it landed between buttons. Exactly one
//! tab, and its matching content area, is active at any time.

use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tabs {
    ids: Vec<String>,
    active: usize,
}

impl Tabs {
    /// Tabs in display order. The first one starts active.
    ///
    /// Returns `None` when `ids` is empty: a tab strip with no tabs has
    /// nothing to activate.
    pub fn new(ids: Vec<String>) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        Some(Self { ids, active: 0 })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Handle a click inside the tab container.
    ///
    /// Returns the id of the newly active tab, or `None` when the click did not
    /// hit a known tab.
    pub fn on_click(&mut self, clicked: Option<&str>) -> Option<&str> {
        let id = clicked?;
        let Some(pos) = self.ids.iter().position(|t| t == id) else {
            warn!(tab = id, "click on unknown tab ignored");
            return None;
        };
        self.active = pos;
        debug!(tab = id, "tab activated");
        Some(&self.ids[pos])
    }
}
