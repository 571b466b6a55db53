//! In-memory slider view.
//!
//! [`Projection`] records exactly what a browser would show after each slider
//! operation: one transform per panel and one active flag per indicator. The
//! static renderer reads it to server-render the initial slider markup, and
//! the simulator reads it to report what changed after each event.

use crate::slider::SliderView;
use serde::Serialize;

/// Recorded panel transforms and indicator states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    offsets: Vec<i64>,
    indicators: Vec<bool>,
}

impl Projection {
    /// Panel offsets in percent, in panel order.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    /// Indices of all active indicators. A consistent slider has exactly one.
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
            .collect()
    }

    /// CSS `transform` value for `panel`, e.g. `translateX(-100%)`.
    pub fn transform(&self, panel: usize) -> String {
        let offset = self.offsets.get(panel).copied().unwrap_or_default();
        format!("translateX({offset}%)")
    }
}

impl SliderView for Projection {
    fn insert_indicator(&mut self, index: usize) {
        debug_assert_eq!(index, self.indicators.len(), "indicators are appended in order");
        self.indicators.push(false);
    }

    fn set_panel_offset(&mut self, panel: usize, offset_percent: i64) {
        if panel >= self.offsets.len() {
            self.offsets.resize(panel + 1, 0);
        }
        self.offsets[panel] = offset_percent;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = active;
        }
    }
}
