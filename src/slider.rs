//! Image slider (carousel) state machine.
//!
//! The slider owns a fixed, ordered sequence of panels and one indicator dot
//! per panel. Its only mutable state is the index of the panel that is fully in
//! view. Every navigation operation mutates that index and then re-projects it
//! onto the view before returning, so a caller never observes a half-applied
//! transition.
//!
//! ## State Machine
//!
//! ```text
//!            advance                 advance
//!   ┌──► 0 ─────────► 1 ─────► … ─────────► N-1 ──┐
//!   │    ▲  ◄─────────   ◄─────   ◄─────────      │
//!   │    │   retreat        retreat               │
//!   └────┼────────────── advance (wrap) ──────────┘
//!        └────────────── retreat (wrap) from 0
//!
//!   jump_to(i): any state → i   (out-of-range i bounded by JumpPolicy)
//! ```
//!
//! ## Projection
//!
//! Panel `i` is translated horizontally by `100 * (i - current)` percent, so the
//! current panel sits at `0%`, panels to its left at negative offsets and panels
//! to its right at positive ones. See [`panel_offsets`].
//!
//! ## Collaborators
//!
//! The slider never touches a document directly. It receives a [`SliderView`]
//! at construction and writes panel offsets and indicator state through it.
//! [`crate::view::Projection`] is the in-memory view used for static rendering
//! and tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SliderError {
    #[error("slider needs at least one panel")]
    NoPanels,
}

/// What to do with a `jump_to` target outside `[0, slide_count)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpPolicy {
    /// Snap the target to the nearest valid index.
    #[default]
    Clamp,
    /// Leave the current index untouched.
    Ignore,
}

impl JumpPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            JumpPolicy::Clamp => "clamp",
            JumpPolicy::Ignore => "ignore",
        }
    }

    /// Bound `index` into `[0, slide_count)`, or `None` if the jump should be dropped.
    pub fn bound(self, index: usize, slide_count: usize) -> Option<usize> {
        if index < slide_count {
            return Some(index);
        }
        match self {
            JumpPolicy::Clamp => Some(slide_count - 1),
            JumpPolicy::Ignore => None,
        }
    }
}

/// Sink for the slider's visual projections.
///
/// Implementors own the panel elements and the indicator container. All
/// methods are infallible: the slider only ever passes indices it has
/// already validated.
pub trait SliderView {
    /// Append an indicator for `index` to the end of the indicator container.
    fn insert_indicator(&mut self, index: usize);
    /// Position panel `panel` at a horizontal offset, in percent of its width.
    fn set_panel_offset(&mut self, panel: usize, offset_percent: i64);
    /// Mark the indicator for `index` active or inactive.
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// The slider's mutable state: a panel count fixed at construction and the
/// index of the current panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderState {
    slide_count: usize,
    current: usize,
}

impl SliderState {
    pub fn new(slide_count: usize) -> Result<Self, SliderError> {
        if slide_count == 0 {
            return Err(SliderError::NoPanels);
        }
        Ok(Self {
            slide_count,
            current: 0,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn successor(&self) -> usize {
        (self.current + 1) % self.slide_count
    }

    fn predecessor(&self) -> usize {
        (self.current + self.slide_count - 1) % self.slide_count
    }
}

/// Horizontal offset, in percent, of `panel` when `index` is in view.
pub fn panel_offset(panel: usize, index: usize) -> i64 {
    100 * (panel as i64 - index as i64)
}

/// Offsets for every panel of a `slide_count`-panel slider showing `index`.
///
/// ```
/// use simple_landing::slider::panel_offsets;
///
/// assert_eq!(panel_offsets(4, 1), vec![-100, 0, 100, 200]);
/// ```
pub fn panel_offsets(slide_count: usize, index: usize) -> Vec<i64> {
    (0..slide_count).map(|i| panel_offset(i, index)).collect()
}

/// A slider bound to its view.
#[derive(Debug)]
pub struct Slider<V: SliderView> {
    state: SliderState,
    policy: JumpPolicy,
    view: V,
}

impl<V: SliderView> Slider<V> {
    /// Build the indicator set and show panel 0.
    ///
    /// Indicators are inserted in panel order, then every panel is positioned
    /// and indicator 0 is activated.
    pub fn initialize(slide_count: usize, view: V, policy: JumpPolicy) -> Result<Self, SliderError> {
        let state = SliderState::new(slide_count)?;
        let mut slider = Self {
            state,
            policy,
            view,
        };
        for i in 0..slide_count {
            slider.view.insert_indicator(i);
        }
        slider.render(0);
        slider.set_active_indicator(0);
        debug!(slide_count, "slider initialized");
        Ok(slider)
    }

    /// Move to the next panel, wrapping from the last to the first.
    pub fn advance(&mut self) -> usize {
        let to = self.state.successor();
        self.go_to(to, "advance");
        to
    }

    /// Move to the previous panel, wrapping from the first to the last.
    pub fn retreat(&mut self) -> usize {
        let to = self.state.predecessor();
        self.go_to(to, "retreat");
        to
    }

    /// Show panel `index` directly.
    ///
    /// Targets outside the panel range go through the slider's [`JumpPolicy`]
    /// before any state changes. Returns the resulting current index.
    pub fn jump_to(&mut self, index: usize) -> usize {
        let count = self.state.slide_count;
        match self.policy.bound(index, count) {
            Some(to) => {
                if to != index {
                    warn!(index, clamped = to, slide_count = count, "indicator target out of range, clamped");
                }
                self.go_to(to, "jump");
            }
            None => {
                warn!(index, slide_count = count, "indicator target out of range, ignored");
            }
        }
        self.state.current
    }

    /// Position every panel for `index`. Does not change the current index.
    pub fn render(&mut self, index: usize) {
        for (panel, offset) in panel_offsets(self.state.slide_count, index)
            .into_iter()
            .enumerate()
        {
            self.view.set_panel_offset(panel, offset);
        }
    }

    /// Deactivate every indicator, then activate the one for `index`.
    pub fn set_active_indicator(&mut self, index: usize) {
        for i in 0..self.state.slide_count {
            self.view.set_indicator_active(i, false);
        }
        self.view.set_indicator_active(index, true);
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn policy(&self) -> JumpPolicy {
        self.policy
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    // `to` is always in range here; callers bound it first.
    fn go_to(&mut self, to: usize, via: &'static str) {
        let from = self.state.current;
        self.state.current = to;
        self.render(to);
        self.set_active_indicator(to);
        debug!(from, to, via, "slide changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Projection;

    fn slider(count: usize) -> Slider<Projection> {
        Slider::initialize(count, Projection::default(), JumpPolicy::Clamp).unwrap()
    }

    #[test]
    fn zero_panels_is_rejected() {
        let result = Slider::initialize(0, Projection::default(), JumpPolicy::Clamp);
        assert_eq!(result.unwrap_err(), SliderError::NoPanels);
    }

    #[test]
    fn initialize_shows_first_panel() {
        let s = slider(4);
        assert_eq!(s.current(), 0);
        assert_eq!(s.view().offsets(), &[0, 100, 200, 300]);
        assert_eq!(s.view().active_indicators(), vec![0]);
        assert_eq!(s.view().indicator_count(), 4);
    }

    #[test]
    fn advance_from_zero() {
        let mut s = slider(4);
        assert_eq!(s.advance(), 1);
        assert_eq!(s.view().offsets(), &[-100, 0, 100, 200]);
        assert_eq!(s.view().active_indicators(), vec![1]);
    }

    #[test]
    fn retreat_from_zero_wraps_to_last() {
        let mut s = slider(4);
        assert_eq!(s.retreat(), 3);
        assert_eq!(s.view().offsets(), &[-300, -200, -100, 0]);
        assert_eq!(s.view().active_indicators(), vec![3]);
    }

    #[test]
    fn advance_from_last_wraps_to_first() {
        let mut s = slider(4);
        s.jump_to(3);
        assert_eq!(s.advance(), 0);
        assert_eq!(s.view().offsets(), &[0, 100, 200, 300]);
    }

    #[test]
    fn single_panel_stays_put() {
        let mut s = slider(1);
        assert_eq!(s.advance(), 0);
        assert_eq!(s.retreat(), 0);
        assert_eq!(s.view().offsets(), &[0]);
        assert_eq!(s.view().active_indicators(), vec![0]);
    }

    #[test]
    fn jump_activates_only_target_indicator() {
        let mut s = slider(4);
        s.advance();
        assert_eq!(s.jump_to(2), 2);
        assert_eq!(s.view().active_indicators(), vec![2]);
        assert_eq!(s.view().offsets(), &[-200, -100, 0, 100]);
    }

    #[test]
    fn jump_out_of_range_clamps() {
        let mut s = slider(4);
        assert_eq!(s.jump_to(17), 3);
        assert_eq!(s.view().active_indicators(), vec![3]);
    }

    #[test]
    fn jump_out_of_range_ignored_under_ignore_policy() {
        let mut s = Slider::initialize(4, Projection::default(), JumpPolicy::Ignore).unwrap();
        s.advance();
        assert_eq!(s.jump_to(4), 1);
        assert_eq!(s.view().active_indicators(), vec![1]);
        assert_eq!(s.view().offsets(), &[-100, 0, 100, 200]);
    }

    #[test]
    fn render_does_not_move_current() {
        let mut s = slider(3);
        s.render(2);
        assert_eq!(s.current(), 0);
        assert_eq!(s.view().offsets(), &[-200, -100, 0]);
    }

    #[test]
    fn policy_bound_passes_valid_index() {
        assert_eq!(JumpPolicy::Clamp.bound(2, 3), Some(2));
        assert_eq!(JumpPolicy::Ignore.bound(2, 3), Some(2));
        assert_eq!(JumpPolicy::Ignore.bound(3, 3), None);
        assert_eq!(JumpPolicy::Clamp.bound(usize::MAX, 3), Some(2));
    }

    #[test]
    fn policy_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            policy: JumpPolicy,
        }
        let w: Wrap = toml::from_str(r#"policy = "ignore""#).unwrap();
        assert_eq!(w.policy, JumpPolicy::Ignore);
    }

    #[test]
    fn offsets_for_concrete_scenario() {
        assert_eq!(panel_offsets(4, 0), vec![0, 100, 200, 300]);
        assert_eq!(panel_offsets(4, 1), vec![-100, 0, 100, 200]);
        assert_eq!(panel_offset(0, 3), -300);
    }
}
