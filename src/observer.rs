//! Viewport-intersection driven behaviors.
//!
//! Three components react to intersection entries delivered by the page's
//! observers:
//!
//! | Component | Observes | Options | Reaction |
//! |-----------|----------|---------|----------|
//! | [`StickyNav`] | header | threshold 0, margin `-nav height` | nav sticky while header is out of view |
//! | [`SectionReveal`] | every section | threshold `reveal_threshold` | reveal once, then stop observing |
//! | [`LazyImages`] | every `img[data-src]` | threshold 0, margin `+lazy margin` | swap in full image once, unblur on load |
//!
//! Observers fire an initial entry for every target when they start, usually
//! non-intersecting. Reveal and lazy loading ignore non-intersecting entries,
//! which covers that first callback.

use serde::Serialize;
use tracing::debug;

/// Intersection observer options, as handed to the page runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible, `0.0..=1.0`.
    pub threshold: f32,
    /// Margin grown (positive) or shrunk (negative) around the viewport.
    pub root_margin_px: i32,
}

impl ObserverOptions {
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

// ============================================================================
// Sticky navigation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StickyNav {
    options: ObserverOptions,
    sticky: bool,
}

impl StickyNav {
    /// The header observer's margin is shrunk by the nav height so the nav
    /// turns sticky just as it would start covering content.
    pub fn new(nav_height_px: u32) -> Self {
        Self {
            options: ObserverOptions {
                threshold: 0.0,
                root_margin_px: -i32::try_from(nav_height_px).unwrap_or(i32::MAX),
            },
            sticky: false,
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Returns `true` if stickiness changed.
    pub fn on_header_intersection(&mut self, is_intersecting: bool) -> bool {
        let was = self.sticky;
        self.sticky = !is_intersecting;
        if was != self.sticky {
            debug!(sticky = self.sticky, "nav stickiness changed");
        }
        was != self.sticky
    }
}

// ============================================================================
// Section reveal
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RevealTarget {
    id: String,
    revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReveal {
    options: ObserverOptions,
    sections: Vec<RevealTarget>,
}

impl SectionReveal {
    /// All sections start hidden and observed.
    pub fn new(ids: Vec<String>, threshold: f32) -> Self {
        Self {
            options: ObserverOptions {
                threshold,
                root_margin_px: 0,
            },
            sections: ids
                .into_iter()
                .map(|id| RevealTarget {
                    id,
                    revealed: false,
                })
                .collect(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id && !s.revealed)
    }

    /// Revealed sections are no longer observed.
    pub fn is_observing(&self, id: &str) -> bool {
        self.is_hidden(id)
    }

    pub fn hidden_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| !s.revealed)
            .map(|s| s.id.as_str())
            .collect()
    }

    /// Returns `true` if this entry revealed the section.
    pub fn on_intersection(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(target) = self.sections.iter_mut().find(|s| s.id == id && !s.revealed) else {
            return false;
        };
        target.revealed = true;
        debug!(section = id, "section revealed");
        true
    }
}

// ============================================================================
// Lazy images
// ============================================================================

/// Loading phase of one lazy image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LazyPhase {
    /// Showing the low-resolution placeholder; still observed.
    Placeholder,
    /// Full image requested, blur filter still applied; no longer observed.
    Loading,
    /// Full image loaded, blur removed.
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LazyImage {
    pub src: String,
    pub data_src: String,
    pub phase: LazyPhase,
}

impl LazyImage {
    pub fn has_blur(&self) -> bool {
        self.phase != LazyPhase::Loaded
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LazyImages {
    options: ObserverOptions,
    images: Vec<LazyImage>,
}

impl LazyImages {
    /// `images` are `(placeholder src, full-resolution data-src)` pairs.
    pub fn new(images: Vec<(String, String)>, threshold: f32, root_margin_px: i32) -> Self {
        Self {
            options: ObserverOptions {
                threshold,
                root_margin_px,
            },
            images: images
                .into_iter()
                .map(|(src, data_src)| LazyImage {
                    src,
                    data_src,
                    phase: LazyPhase::Placeholder,
                })
                .collect(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn images(&self) -> &[LazyImage] {
        &self.images
    }

    pub fn get(&self, data_src: &str) -> Option<&LazyImage> {
        self.images.iter().find(|i| i.data_src == data_src)
    }

    /// Swap in the full image on the first intersecting entry.
    pub fn on_intersection(&mut self, data_src: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(img) = self
            .images
            .iter_mut()
            .find(|i| i.data_src == data_src && i.phase == LazyPhase::Placeholder)
        else {
            return false;
        };
        img.src = img.data_src.clone();
        img.phase = LazyPhase::Loading;
        debug!(image = data_src, "lazy image requested");
        true
    }

    /// The browser finished loading the full image.
    pub fn on_load(&mut self, data_src: &str) -> bool {
        let Some(img) = self
            .images
            .iter_mut()
            .find(|i| i.data_src == data_src && i.phase == LazyPhase::Loading)
        else {
            return false;
        };
        img.phase = LazyPhase::Loaded;
        debug!(image = data_src, "lazy image loaded");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_sticks_when_header_leaves() {
        let mut nav = StickyNav::new(90);
        assert_eq!(nav.options().root_margin_css(), "-90px");
        assert!(!nav.is_sticky());
        assert!(nav.on_header_intersection(false));
        assert!(nav.is_sticky());
        assert!(!nav.on_header_intersection(false));
        assert!(nav.on_header_intersection(true));
        assert!(!nav.is_sticky());
    }

    #[test]
    fn sticky_margin_stays_negative_for_any_height() {
        let nav = StickyNav::new(u32::MAX);
        assert_eq!(nav.options().root_margin_px, -i32::MAX);
        let nav = StickyNav::new(3_000_000_000);
        assert!(nav.options().root_margin_px < 0);
    }

    #[test]
    fn section_reveals_once() {
        let mut reveal = SectionReveal::new(vec!["section--1".into(), "section--2".into()], 0.15);
        assert!(!reveal.on_intersection("section--1", false));
        assert!(reveal.is_hidden("section--1"));
        assert!(reveal.on_intersection("section--1", true));
        assert!(!reveal.is_observing("section--1"));
        assert!(!reveal.on_intersection("section--1", true));
        assert_eq!(reveal.hidden_ids(), vec!["section--2"]);
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut reveal = SectionReveal::new(vec!["section--1".into()], 0.15);
        assert!(!reveal.on_intersection("section--7", true));
    }

    #[test]
    fn lazy_image_lifecycle() {
        let mut lazy = LazyImages::new(
            vec![("img/digital-lazy.jpg".into(), "img/digital.jpg".into())],
            0.0,
            200,
        );
        assert_eq!(lazy.options().root_margin_css(), "200px");

        // load before swap means nothing
        assert!(!lazy.on_load("img/digital.jpg"));
        assert!(!lazy.on_intersection("img/digital.jpg", false));

        assert!(lazy.on_intersection("img/digital.jpg", true));
        let img = lazy.get("img/digital.jpg").unwrap();
        assert_eq!(img.src, "img/digital.jpg");
        assert!(img.has_blur());

        assert!(!lazy.on_intersection("img/digital.jpg", true));
        assert!(lazy.on_load("img/digital.jpg"));
        assert!(!lazy.get("img/digital.jpg").unwrap().has_blur());
        assert!(!lazy.on_load("img/digital.jpg"));
    }
}
