//! One page's worth of interactive state.
//!
//! A [`Session`] owns an instance of every component, built from the page
//! content and site config, and routes each [`PageEvent`] to the components
//! that listen for it. Events are handled one at a time and each handler runs
//! to completion, so components never see interleaved updates.
//!
//! ## Routing
//!
//! | Event | Components |
//! |-------|-----------|
//! | click next / prev / dot | slider |
//! | click open-modal / close-modal / overlay | modal |
//! | click learn-more / nav | scroll targets |
//! | click tab | tabs |
//! | key | modal (Escape), slider (arrows, if enabled) |
//! | hover / unhover | nav fade |
//! | intersect header / section / image | sticky nav / reveal / lazy images |
//! | loaded | lazy images |

use crate::config::SiteConfig;
use crate::content::Page;
use crate::input::{ClickTarget, Observed, PageEvent, parse_indicator};
use crate::modal::Modal;
use crate::nav::{NavFade, ScrollTargets};
use crate::observer::{LazyImage, LazyImages, SectionReveal, StickyNav};
use crate::slider::{Slider, SliderError};
use crate::tabs::Tabs;
use crate::view::Projection;
use serde::Serialize;
use tracing::warn;

/// What a single event changed. An empty list means the event was ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reaction", rename_all = "kebab-case")]
pub enum Reaction {
    Slide { from: usize, to: usize },
    ModalOpened,
    ModalClosed,
    ScrollTo { section: String },
    TabActivated { tab: String },
    NavFaded { opacity: f32 },
    Sticky { sticky: bool },
    SectionRevealed { section: String },
    ImageRequested { data_src: String },
    ImageLoaded { data_src: String },
    /// Input that was absorbed instead of applied.
    Rejected { reason: String },
}

#[derive(Debug)]
pub struct Session {
    slider: Slider<Projection>,
    keyboard: bool,
    modal: Modal,
    tabs: Option<Tabs>,
    fade: NavFade,
    scroll: ScrollTargets,
    sticky: StickyNav,
    reveal: SectionReveal,
    lazy: LazyImages,
}

/// Serializable view of all transient UI state.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub slide: usize,
    pub slide_count: usize,
    pub projection: &'a Projection,
    pub modal_open: bool,
    pub active_tab: Option<&'a str>,
    pub link_opacities: &'a [f32],
    pub logo_opacity: f32,
    pub sticky: bool,
    pub hidden_sections: Vec<&'a str>,
    pub images: &'a [LazyImage],
}

impl Session {
    pub fn new(page: &Page, config: &SiteConfig) -> Result<Self, SliderError> {
        let slider = Slider::initialize(
            page.slides.len(),
            Projection::default(),
            config.slider.jump_policy,
        )?;
        Ok(Self {
            slider,
            keyboard: config.slider.keyboard,
            modal: Modal::default(),
            tabs: Tabs::new(page.tab_ids()),
            fade: NavFade::new(
                page.nav.len(),
                config.nav.hover_opacity,
                config.nav.rest_opacity,
            ),
            scroll: ScrollTargets::new(page.section_ids()),
            sticky: StickyNav::new(config.nav.height_px),
            reveal: SectionReveal::new(page.section_ids(), config.observers.reveal_threshold),
            lazy: LazyImages::new(
                page.lazy_images(),
                config.observers.lazy_threshold,
                config.observers.lazy_root_margin_px,
            ),
        })
    }

    pub fn slider(&self) -> &Slider<Projection> {
        &self.slider
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn tabs(&self) -> Option<&Tabs> {
        self.tabs.as_ref()
    }

    pub fn fade(&self) -> &NavFade {
        &self.fade
    }

    pub fn sticky(&self) -> &StickyNav {
        &self.sticky
    }

    pub fn reveal(&self) -> &SectionReveal {
        &self.reveal
    }

    pub fn lazy(&self) -> &LazyImages {
        &self.lazy
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            slide: self.slider.current(),
            slide_count: self.slider.slide_count(),
            projection: self.slider.view(),
            modal_open: self.modal.is_open(),
            active_tab: self.tabs.as_ref().map(Tabs::active_id),
            link_opacities: self.fade.link_opacities(),
            logo_opacity: self.fade.logo_opacity(),
            sticky: self.sticky.is_sticky(),
            hidden_sections: self.reveal.hidden_ids(),
            images: self.lazy.images(),
        }
    }

    /// Apply one event and report what it changed.
    pub fn handle(&mut self, event: &PageEvent) -> Vec<Reaction> {
        match event {
            PageEvent::Click { on } => self.click(on),
            PageEvent::KeyDown { key } => self.key(key),
            PageEvent::MouseOver { link } => {
                if self.fade.on_mouse_over(*link) {
                    vec![Reaction::NavFaded {
                        opacity: self.fade.logo_opacity(),
                    }]
                } else {
                    vec![]
                }
            }
            PageEvent::MouseOut { link } => {
                if self.fade.on_mouse_out(*link) {
                    vec![Reaction::NavFaded {
                        opacity: self.fade.logo_opacity(),
                    }]
                } else {
                    vec![]
                }
            }
            PageEvent::Intersect {
                target,
                is_intersecting,
            } => self.intersect(target, *is_intersecting),
            PageEvent::ImageLoaded { data_src } => {
                if self.lazy.on_load(data_src) {
                    vec![Reaction::ImageLoaded {
                        data_src: data_src.clone(),
                    }]
                } else {
                    vec![]
                }
            }
        }
    }

    fn click(&mut self, on: &ClickTarget) -> Vec<Reaction> {
        match on {
            ClickTarget::SliderNext => self.slide(|s| s.advance()),
            ClickTarget::SliderPrev => self.slide(|s| s.retreat()),
            ClickTarget::Dot(raw) => match parse_indicator(raw) {
                Ok(index) => {
                    let bounded = self.slider.policy().bound(index, self.slider.slide_count());
                    if bounded.is_none() {
                        // dropped by the jump policy; jump_to only logs it
                        self.slider.jump_to(index);
                        return vec![];
                    }
                    self.slide(|s| s.jump_to(index))
                }
                Err(e) => {
                    warn!(error = %e, "indicator click absorbed");
                    vec![Reaction::Rejected {
                        reason: e.to_string(),
                    }]
                }
            },
            ClickTarget::OpenModal => {
                if self.modal.open() {
                    vec![Reaction::ModalOpened]
                } else {
                    vec![]
                }
            }
            ClickTarget::CloseModal | ClickTarget::Overlay => {
                if self.modal.close() {
                    vec![Reaction::ModalClosed]
                } else {
                    vec![]
                }
            }
            ClickTarget::LearnMore => self.scroll_to(self.scroll.first().map(str::to_string)),
            ClickTarget::Nav(href) => {
                let section = href
                    .as_deref()
                    .and_then(|h| self.scroll.resolve(h))
                    .map(str::to_string);
                self.scroll_to(section)
            }
            ClickTarget::Tab(id) => {
                let Some(tabs) = self.tabs.as_mut() else {
                    return vec![];
                };
                match tabs.on_click(id.as_deref()) {
                    Some(tab) => vec![Reaction::TabActivated {
                        tab: tab.to_string(),
                    }],
                    None => vec![],
                }
            }
        }
    }

    fn key(&mut self, key: &str) -> Vec<Reaction> {
        let mut reactions = Vec::new();
        if self.modal.on_key(key) {
            reactions.push(Reaction::ModalClosed);
        }
        if self.keyboard {
            match key {
                "ArrowRight" => reactions.extend(self.slide(|s| s.advance())),
                "ArrowLeft" => reactions.extend(self.slide(|s| s.retreat())),
                _ => {}
            }
        }
        reactions
    }

    fn intersect(&mut self, target: &Observed, is_intersecting: bool) -> Vec<Reaction> {
        match target {
            Observed::Header => {
                if self.sticky.on_header_intersection(is_intersecting) {
                    vec![Reaction::Sticky {
                        sticky: self.sticky.is_sticky(),
                    }]
                } else {
                    vec![]
                }
            }
            Observed::Section(id) => {
                if self.reveal.on_intersection(id, is_intersecting) {
                    vec![Reaction::SectionRevealed {
                        section: id.clone(),
                    }]
                } else {
                    vec![]
                }
            }
            Observed::Image(data_src) => {
                if self.lazy.on_intersection(data_src, is_intersecting) {
                    vec![Reaction::ImageRequested {
                        data_src: data_src.clone(),
                    }]
                } else {
                    vec![]
                }
            }
        }
    }

    fn slide(&mut self, op: impl FnOnce(&mut Slider<Projection>) -> usize) -> Vec<Reaction> {
        let from = self.slider.current();
        let to = op(&mut self.slider);
        vec![Reaction::Slide { from, to }]
    }

    fn scroll_to(&self, section: Option<String>) -> Vec<Reaction> {
        section
            .map(|section| vec![Reaction::ScrollTo { section }])
            .unwrap_or_default()
    }
}
