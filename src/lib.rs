//! # Simple Landing
//!
//! A single-page marketing site with the usual interactive furniture: an
//! image slider, a modal sign-up form, smooth-scrolling nav links, tabbed
//! content, a fading hover nav, a sticky header, sections that reveal on
//! scroll, and lazy-loaded images.
//!
//! Every interactive component is modelled as a small state machine that
//! takes typed events and reports what changed. Nothing here touches a real
//! document: components write through narrow view traits, so the same code
//! drives the static renderer, the event-script simulator, and the tests.
//!
//! # Architecture
//!
//! ```text
//! content/page.toml  ─┐
//!                     ├─► Session ──► generate  →  dist/index.html
//! content/config.toml ┘      ▲
//!                            └── PageEvent (script or runtime)  →  Reaction
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slider`] | Carousel state machine: wraparound navigation, indicator jumps, panel projection |
//! | [`view`] | In-memory [`slider::SliderView`] used for rendering and tests |
//! | [`modal`] | Open/closed dialog with Escape handling |
//! | [`nav`] | Hover fade across nav links and fragment-link scroll targets |
//! | [`tabs`] | Exactly-one-active tab group |
//! | [`observer`] | Intersection-driven behaviors: sticky nav, section reveal, lazy images |
//! | [`input`] | Typed UI events and the event-script parser |
//! | [`session`] | Owns one of every component and routes events to them |
//! | [`simulate`] | Replays an event script against a fresh session |
//! | [`content`] | `page.toml` loading and validation |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`generate`] | Renders the page to static HTML using Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Wiring
//!
//! Components never look up the elements they act on. A [`session::Session`]
//! is built from content and config and hands each component exactly the ids,
//! counts and options it needs. Adding a component means adding a field and a
//! routing arm, nothing else.
//!
//! ## Server-Rendered Initial State
//!
//! The static page is rendered from a freshly built session, so the markup
//! shipped to the browser is the components' own initial state rather than a
//! hand-maintained copy of it.
//!
//! ## Out-of-Range Indicator Jumps
//!
//! A `data-slide` target past the last panel is clamped by default. Setting
//! `jump_policy = "ignore"` under `[slider]` drops such jumps instead. Targets
//! that are not integers at all are absorbed before they reach the slider.

pub mod config;
pub mod content;
pub mod generate;
pub mod input;
pub mod modal;
pub mod nav;
pub mod observer;
pub mod output;
pub mod session;
pub mod simulate;
pub mod slider;
pub mod tabs;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
