//! Navigation bar behaviors: hover fade and smooth-scroll targets.
//!
//! ## Hover Fade
//!
//! Hovering a nav link dims every other link and the logo; leaving it restores
//! them. The two reactions share one handler and differ only in the opacity
//! they apply, which is passed explicitly as a [`FadeRegistration`].
//!
//! ## Scroll Targets
//!
//! Nav links point at sections with in-page fragments (`#section--1`). Clicks
//! are delegated to the link list, so a click may land on the list itself or on
//! a link whose fragment matches nothing; both resolve to no target.

use serde::Serialize;
use tracing::debug;

/// Opacity applied to the non-hovered links and the logo for one event kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FadeRegistration {
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavFade {
    links: Vec<f32>,
    logo: f32,
    over: FadeRegistration,
    out: FadeRegistration,
}

impl NavFade {
    /// `link_count` links, all at `rest_opacity`.
    pub fn new(link_count: usize, hover_opacity: f32, rest_opacity: f32) -> Self {
        Self {
            links: vec![rest_opacity; link_count],
            logo: rest_opacity,
            over: FadeRegistration {
                opacity: hover_opacity,
            },
            out: FadeRegistration {
                opacity: rest_opacity,
            },
        }
    }

    pub fn link_opacity(&self, link: usize) -> Option<f32> {
        self.links.get(link).copied()
    }

    pub fn link_opacities(&self) -> &[f32] {
        &self.links
    }

    pub fn logo_opacity(&self) -> f32 {
        self.logo
    }

    /// Pointer entered `link` (or something in the nav bar that is not a link).
    pub fn on_mouse_over(&mut self, link: Option<usize>) -> bool {
        let reg = self.over;
        self.apply(link, reg)
    }

    /// Pointer left `link`.
    pub fn on_mouse_out(&mut self, link: Option<usize>) -> bool {
        let reg = self.out;
        self.apply(link, reg)
    }

    fn apply(&mut self, link: Option<usize>, reg: FadeRegistration) -> bool {
        let Some(hovered) = link.filter(|&l| l < self.links.len()) else {
            return false;
        };
        for (i, opacity) in self.links.iter_mut().enumerate() {
            if i != hovered {
                *opacity = reg.opacity;
            }
        }
        self.logo = reg.opacity;
        debug!(hovered, opacity = reg.opacity, "nav fade applied");
        true
    }
}

/// Known section ids, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrollTargets {
    ids: Vec<String>,
}

impl ScrollTargets {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// The section the hero's "learn more" button scrolls to.
    pub fn first(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    /// Resolve a nav link `href` like `#section--2` to its section id.
    pub fn resolve(&self, href: &str) -> Option<&str> {
        let id = href.strip_prefix('#')?;
        self.ids.iter().find(|s| *s == id).map(String::as_str)
    }
}
