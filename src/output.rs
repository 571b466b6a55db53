//! CLI output formatting for all commands.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Page: Lumen | Banking, simplified
//! Nav
//! 001 Features → #section--1
//! Sections
//! 001 Features (section--1)
//!     Lazy images: 3
//! Tabs
//! 001 Instant Transfers (tab 1)
//! Slides
//! 001 Best financial decision ever!
//!     Author: Aarav Lynn
//! Slider: 4 slides, jump policy clamp, keyboard on
//! ```
//!
//! ## Simulate
//!
//! One line per event: step index, the event, what it changed, and the slider
//! position with its dots.
//!
//! ```text
//! 001 click next → slide 0 → 1   [●○○○ → ○●○○]
//! 002 key Escape → ignored       [○●○○]
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → dist/index.html
//! Generated 3 sections, 3 tabs, 4 slides, 3 lazy images
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure and do no I/O.

use crate::config::SiteConfig;
use crate::content::Page;
use crate::input::{ClickTarget, Observed, PageEvent};
use crate::session::Reaction;
use crate::view::Projection;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Render indicator state as filled / hollow dots, e.g. `○●○○`.
pub fn format_dots(projection: &Projection) -> String {
    (0..projection.indicator_count())
        .map(|i| if projection.is_indicator_active(i) { '●' } else { '○' })
        .collect()
}

/// Event as written in an event script.
pub fn describe_event(event: &PageEvent) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    match event {
        PageEvent::Click { on } => match on {
            ClickTarget::SliderNext => "click next".to_string(),
            ClickTarget::SliderPrev => "click prev".to_string(),
            ClickTarget::Dot(raw) => format!("click dot {raw}"),
            ClickTarget::OpenModal => "click open-modal".to_string(),
            ClickTarget::CloseModal => "click close-modal".to_string(),
            ClickTarget::Overlay => "click overlay".to_string(),
            ClickTarget::LearnMore => "click learn-more".to_string(),
            ClickTarget::Nav(Some(href)) => format!("click nav {href}"),
            ClickTarget::Nav(None) => "click nav".to_string(),
            ClickTarget::Tab(Some(id)) => format!("click tab {id}"),
            ClickTarget::Tab(None) => "click tab".to_string(),
        },
        PageEvent::KeyDown { key } => format!("key {key}"),
        PageEvent::MouseOver { link: Some(l) } => format!("hover {l}"),
        PageEvent::MouseOver { link: None } => "hover".to_string(),
        PageEvent::MouseOut { link: Some(l) } => format!("unhover {l}"),
        PageEvent::MouseOut { link: None } => "unhover".to_string(),
        PageEvent::Intersect {
            target,
            is_intersecting,
        } => match target {
            Observed::Header => format!("intersect header {}", yes_no(*is_intersecting)),
            Observed::Section(id) => format!("intersect section {id} {}", yes_no(*is_intersecting)),
            Observed::Image(src) => format!("intersect image {src} {}", yes_no(*is_intersecting)),
        },
        PageEvent::ImageLoaded { data_src } => format!("loaded {data_src}"),
    }
}

/// One reaction in words.
pub fn describe_reaction(reaction: &Reaction) -> String {
    match reaction {
        Reaction::Slide { from, to } => format!("slide {from} → {to}"),
        Reaction::ModalOpened => "modal opened".to_string(),
        Reaction::ModalClosed => "modal closed".to_string(),
        Reaction::ScrollTo { section } => format!("scroll to #{section}"),
        Reaction::TabActivated { tab } => format!("tab {tab} active"),
        Reaction::NavFaded { opacity } => format!("nav faded to {opacity}"),
        Reaction::Sticky { sticky: true } => "nav sticky".to_string(),
        Reaction::Sticky { sticky: false } => "nav unstuck".to_string(),
        Reaction::SectionRevealed { section } => format!("revealed #{section}"),
        Reaction::ImageRequested { data_src } => format!("loading {data_src}"),
        Reaction::ImageLoaded { data_src } => format!("unblurred {data_src}"),
        Reaction::Rejected { reason } => format!("rejected ({reason})"),
    }
}

// ============================================================================
// Simulate
// ============================================================================

/// Format one simulated step.
///
/// `before` and `after` are the slider's dots before and after the event; the
/// dot column shows a transition only when they differ.
pub fn format_step(
    step: usize,
    event: &PageEvent,
    reactions: &[Reaction],
    before: &str,
    after: &str,
) -> String {
    let changed = if reactions.is_empty() {
        "ignored".to_string()
    } else {
        reactions
            .iter()
            .map(describe_reaction)
            .collect::<Vec<_>>()
            .join("; ")
    };
    let dots = if before == after {
        format!("[{after}]")
    } else {
        format!("[{before} → {after}]")
    };
    format!(
        "{} {} → {}   {}",
        format_index(step),
        describe_event(event),
        changed,
        dots
    )
}

pub fn print_step(step: usize, event: &PageEvent, reactions: &[Reaction], before: &str, after: &str) {
    println!("{}", format_step(step, event, reactions, before, after));
}

// ============================================================================
// Check
// ============================================================================

/// Format the content inventory for `check`.
pub fn format_check_output(page: &Page, config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![format!("Page: {}", page.title)];

    if !page.nav.is_empty() {
        lines.push("Nav".to_string());
        for (i, link) in page.nav.iter().enumerate() {
            lines.push(format!("{} {} → {}", format_index(i + 1), link.label, link.href));
        }
    }

    if !page.sections.is_empty() {
        lines.push("Sections".to_string());
        for (i, section) in page.sections.iter().enumerate() {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                section.description,
                section.id
            ));
            if !section.images.is_empty() {
                lines.push(format!("{}Lazy images: {}", indent(1), section.images.len()));
            }
        }
    }

    if !page.tabs.is_empty() {
        lines.push("Tabs".to_string());
        for (i, tab) in page.tabs.iter().enumerate() {
            lines.push(format!("{} {} (tab {})", format_index(i + 1), tab.label, tab.id));
        }
    }

    lines.push("Slides".to_string());
    for (i, slide) in page.slides.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), slide.heading));
        lines.push(format!("{}Author: {}", indent(1), slide.author));
    }

    lines.push(format!(
        "Slider: {} slides, jump policy {}, keyboard {}",
        page.slides.len(),
        config.slider.jump_policy.as_str(),
        if config.slider.keyboard { "on" } else { "off" }
    ));
    lines
}

pub fn print_check_output(page: &Page, config: &SiteConfig) {
    for line in format_check_output(page, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(page: &Page, written: &Path) -> Vec<String> {
    vec![
        format!("Home → {}", written.display()),
        format!(
            "Generated {} sections, {} tabs, {} slides, {} lazy images",
            page.sections.len(),
            page.tabs.len(),
            page.slides.len(),
            page.lazy_images().len()
        ),
    ]
}

pub fn print_generate_output(page: &Page, written: &Path) {
    for line in format_generate_output(page, written) {
        println!("{}", line);
    }
}
