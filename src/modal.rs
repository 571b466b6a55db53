//! "Open account" modal dialog and its overlay.
//!
//! The modal and overlay are always shown and hidden together. Escape closes
//! the dialog only while it is open, so stray key presses elsewhere on the page
//! are no-ops.

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Modal {
    open: bool,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the modal was closed before.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        debug!(changed, "modal opened");
        changed
    }

    /// Returns `true` if the modal was open before.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        debug!(changed, "modal closed");
        changed
    }

    /// Handle a document-level key press. Returns `true` if it closed the modal.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            return self.close();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!Modal::default().is_open());
    }

    #[test]
    fn open_then_close() {
        let mut m = Modal::default();
        assert!(m.open());
        assert!(!m.open());
        assert!(m.is_open());
        assert!(m.close());
        assert!(!m.is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut m = Modal::default();
        assert!(!m.on_key("Escape"));
        m.open();
        assert!(!m.on_key("Enter"));
        assert!(m.is_open());
        assert!(m.on_key("Escape"));
        assert!(!m.is_open());
    }
}
