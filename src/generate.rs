//! Static HTML generation.
//!
//! Renders the landing page to a single `index.html`. Every interactive
//! component is server-rendered in its initial state by building a fresh
//! [`Session`] and reading it back, so the first paint already matches what
//! the components will report before any event arrives:
//!
//! - **Slider**: panels carry `transform: translateX(N%)` from the initialized
//!   [`Projection`]; one `dots__dot` button per panel, the first one active
//! - **Sections**: rendered with `section--hidden` until revealed
//! - **Tabs**: the first tab and its content area are active
//! - **Lazy images**: placeholder `src`, full-resolution `data-src`, `lazy-img` blur
//! - **Modal**: modal and overlay both `hidden`
//!
//! ## Runtime
//!
//! `static/page.js` is embedded at compile time and inlined at the end of
//! `<body>`. It wires the same behaviors in the browser and reads its options
//! (hover opacities, observer thresholds and margins, slider jump policy,
//! keyboard navigation) from `data-*` attributes on `<body>`.
//!
//! ## Static Assets
//!
//! - `static/style.css`: embedded; the palette from `config.toml` is prepended
//!   as CSS custom properties
//! - `static/page.js`: page runtime
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::content::{ModalCopy, NavLink, Page, Section, Slide, Tab};
use crate::session::Session;
use crate::slider::SliderError;
use crate::view::Projection;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/page.js");

/// Write `index.html` for `page` into `output_dir`. Returns the written path.
pub fn generate(page: &Page, config: &SiteConfig, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    let markup = render_page(page, config)?;
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, markup.into_string())?;
    info!(path = %path.display(), "generated landing page");
    Ok(path)
}

/// Render the full page document.
pub fn render_page(page: &Page, config: &SiteConfig) -> Result<Markup, SliderError> {
    let session = Session::new(page, config)?;
    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);

    let sticky = session.sticky().options();
    let reveal = session.reveal().options();
    let lazy = session.lazy().options();

    let content = html! {
        (render_header(page))
        @for section in &page.sections {
            (render_section(section))
        }
        @if let Some(tabs) = session.tabs() {
            section.section id="operations" {
                (render_tabs(&page.tabs, tabs.active_id()))
            }
        }
        section.section id="testimonials" {
            (render_slider(&page.slides, session.slider().view()))
        }
        (render_modal(&page.modal, session.modal().is_open()))
    };

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                style { (PreEscaped(css)) }
            }
            body
                data-jump-policy=(config.slider.jump_policy.as_str())
                data-keyboard=(config.slider.keyboard.to_string())
                data-hover-opacity=(config.nav.hover_opacity)
                data-rest-opacity=(config.nav.rest_opacity)
                data-sticky-margin=(sticky.root_margin_css())
                data-reveal-threshold=(reveal.threshold)
                data-lazy-threshold=(lazy.threshold)
                data-lazy-margin=(lazy.root_margin_css())
            {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    })
}

fn markdown(source: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    PreEscaped(out)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the nav bar: logo plus the delegated link list.
pub fn render_nav(logo: Option<&str>, links: &[NavLink]) -> Markup {
    html! {
        nav.nav {
            @if let Some(src) = logo {
                img."nav__logo" src=(src) alt="Logo";
            }
            ul."nav__links" {
                @for link in links {
                    li."nav__item" {
                        a."nav__link" href=(link.href) { (link.label) }
                    }
                }
                li."nav__item" {
                    a."nav__link"."nav__link--btn"."btn--show-modal" href="#" { "Open account" }
                }
            }
        }
    }
}

fn render_header(page: &Page) -> Markup {
    html! {
        header.header {
            (render_nav(page.logo.as_deref(), &page.nav))
            div."header__title" {
                h1 { (page.hero_title) }
                @if let Some(sub) = &page.hero_subtitle {
                    h4 { (sub) }
                }
                button."btn--text"."btn--scroll-to" { "Learn more ↓" }
            }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    html! {
        section.section."section--hidden" id=(section.id) {
            div."section__title" {
                h2."section__description" { (section.description) }
                h3."section__header" { (section.header) }
            }
            @if !section.body.is_empty() {
                div."section__body" { (markdown(&section.body)) }
            }
            @for image in &section.images {
                img."features__img"."lazy-img" src=(image.src) data-src=(image.data_src) alt=(image.alt);
            }
        }
    }
}

/// Renders the tabbed component with `active` selected.
pub fn render_tabs(tabs: &[Tab], active: &str) -> Markup {
    html! {
        div.operations {
            div."operations__tab-container" {
                @for tab in tabs {
                    button class=(tab_class("btn operations__tab", "operations__tab", &tab.id, active))
                        data-tab=(tab.id) {
                        (tab.label)
                    }
                }
            }
            @for tab in tabs {
                div class=(tab_class("operations__content", "operations__content", &tab.id, active)) {
                    h5."operations__header" { (tab.title) }
                    (markdown(&tab.body))
                }
            }
        }
    }
}

/// Renders the slider panels and dots from a projection.
pub fn render_slider(slides: &[Slide], projection: &Projection) -> Markup {
    html! {
        div.slider {
            @for (i, slide) in slides.iter().enumerate() {
                div.slide style={ "transform: " (projection.transform(i)) } {
                    div.testimonial {
                        h5."testimonial__header" { (slide.heading) }
                        blockquote."testimonial__text" { (markdown(&slide.quote)) }
                        address."testimonial__author" {
                            h6."testimonial__name" { (slide.author) }
                            @if let Some(place) = &slide.place {
                                p."testimonial__location" { (place) }
                            }
                        }
                    }
                }
            }
            button."slider__btn"."slider__btn--left" { "←" }
            button."slider__btn"."slider__btn--right" { "→" }
            div.dots {
                @for i in 0..projection.indicator_count() {
                    button class=(dot_class(projection.is_indicator_active(i))) data-slide=(i) {}
                }
            }
        }
    }
}

// `btn operations__tab operations__tab--2 operations__tab--active`
fn tab_class(base: &str, block: &str, id: &str, active: &str) -> String {
    let mut class = format!("{base} {block}--{id}");
    if id == active {
        class.push_str(&format!(" {block}--active"));
    }
    class
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "dots__dot dots__dot--active"
    } else {
        "dots__dot"
    }
}

fn render_modal(copy: &ModalCopy, open: bool) -> Markup {
    html! {
        div.modal.hidden[!open] {
            button."btn--close-modal" { "×" }
            h2."modal__header" { (copy.title) }
            form."modal__form" {
                label { "First Name" }
                input type="text";
                label { "Last Name" }
                input type="text";
                label { "Email Address" }
                input type="email";
                button.btn { (copy.button) }
            }
        }
        div.overlay.hidden[!open] {}
    }
}

// ============================================================================
// Tests
// ============================================================================
