//! Typed UI events and the event-script parser.
//!
//! The page runtime delivers one [`PageEvent`] at a time. For `simulate`, the
//! same events are read from a line-oriented script:
//!
//! ```text
//! # slider
//! click next
//! click prev
//! click dot 2
//! key ArrowRight
//!
//! # modal
//! click open-modal
//! key Escape
//! click close-modal
//! click overlay
//!
//! # navigation
//! click learn-more
//! click nav #section--2
//! click nav                 # click on the bar itself, not on a link
//! hover 1
//! unhover 1
//!
//! # tabs
//! click tab 2
//! click tab                 # click between tab buttons
//!
//! # observers
//! intersect header no
//! intersect section section--1 yes
//! intersect image img/digital.jpg yes
//! loaded img/digital.jpg
//! ```
//!
//! A `#` at the start of a line or after whitespace begins a comment. The one
//! exception is the href right after `click nav`, which is a fragment.
//!
//! Indicator targets stay raw strings here: they come from a `data-slide`
//! attribute and are validated by [`parse_indicator`] when dispatched.

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("empty event")]
    Empty,
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("unknown click target: {0}")]
    UnknownTarget(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("expected yes or no, got {0:?}")]
    BadFlag(String),
    #[error("invalid link index: {0:?}")]
    BadLink(String),
    #[error("unexpected trailing input: {0:?}")]
    Trailing(String),
    #[error("invalid indicator target: {0:?}")]
    InvalidIndicator(String),
    #[error("line {line}: {source}")]
    Line { line: usize, source: Box<InputError> },
}

/// Something a click landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", content = "arg", rename_all = "kebab-case")]
pub enum ClickTarget {
    SliderNext,
    SliderPrev,
    /// A dot with its raw `data-slide` attribute.
    Dot(String),
    OpenModal,
    CloseModal,
    Overlay,
    LearnMore,
    /// Somewhere in the nav link list; the `href` of the link hit, if any.
    Nav(Option<String>),
    /// Somewhere in the tab container; the closest tab's id, if any.
    Tab(Option<String>),
}

/// Which observed element an intersection entry is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Observed {
    Header,
    Section(String),
    /// Keyed by `data-src`.
    Image(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum PageEvent {
    Click { on: ClickTarget },
    KeyDown { key: String },
    MouseOver { link: Option<usize> },
    MouseOut { link: Option<usize> },
    Intersect { target: Observed, is_intersecting: bool },
    ImageLoaded { data_src: String },
}

/// Validate a `data-slide` attribute as a panel index.
///
/// Only the range check is left to the slider; anything that is not a
/// non-negative integer is rejected here.
pub fn parse_indicator(raw: &str) -> Result<usize, InputError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| InputError::InvalidIndicator(raw.to_string()))
}

fn flag(word: Option<&str>) -> Result<bool, InputError> {
    match word {
        Some("yes" | "true") => Ok(true),
        Some("no" | "false") => Ok(false),
        Some(other) => Err(InputError::BadFlag(other.to_string())),
        None => Err(InputError::MissingArgument("intersect")),
    }
}

fn link(word: Option<&str>) -> Result<Option<usize>, InputError> {
    word.map(|w| w.parse::<usize>().map_err(|_| InputError::BadLink(w.to_string())))
        .transpose()
}

fn required<'a>(word: Option<&'a str>, what: &'static str) -> Result<&'a str, InputError> {
    word.ok_or(InputError::MissingArgument(what))
}

impl FromStr for PageEvent {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(InputError::Empty)?;

        let event = match verb {
            "click" => {
                let target = required(words.next(), "click")?;
                let arg = words.next().map(str::to_string);
                let on = match target {
                    "next" => ClickTarget::SliderNext,
                    "prev" => ClickTarget::SliderPrev,
                    "dot" => ClickTarget::Dot(arg.ok_or(InputError::MissingArgument("click dot"))?),
                    "open-modal" => ClickTarget::OpenModal,
                    "close-modal" => ClickTarget::CloseModal,
                    "overlay" => ClickTarget::Overlay,
                    "learn-more" => ClickTarget::LearnMore,
                    "nav" => ClickTarget::Nav(arg),
                    "tab" => ClickTarget::Tab(arg),
                    other => return Err(InputError::UnknownTarget(other.to_string())),
                };
                PageEvent::Click { on }
            }
            "key" => PageEvent::KeyDown {
                key: required(words.next(), "key")?.to_string(),
            },
            "hover" => PageEvent::MouseOver {
                link: link(words.next())?,
            },
            "unhover" => PageEvent::MouseOut {
                link: link(words.next())?,
            },
            "intersect" => {
                let kind = required(words.next(), "intersect")?;
                let target = match kind {
                    "header" => Observed::Header,
                    "section" => Observed::Section(required(words.next(), "intersect section")?.to_string()),
                    "image" => Observed::Image(required(words.next(), "intersect image")?.to_string()),
                    other => return Err(InputError::UnknownTarget(other.to_string())),
                };
                PageEvent::Intersect {
                    target,
                    is_intersecting: flag(words.next())?,
                }
            }
            "loaded" => PageEvent::ImageLoaded {
                data_src: required(words.next(), "loaded")?.to_string(),
            },
            other => return Err(InputError::UnknownEvent(other.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(InputError::Trailing(rest.join(" ")));
        }
        Ok(event)
    }
}

/// Parse a whole event script. Comments (`#` to end of line) and blank lines
/// are skipped; errors carry the 1-based line number.
pub fn parse_script(script: &str) -> Result<Vec<PageEvent>, InputError> {
    script
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = strip_comment(raw).trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(line, text)| {
            text.parse().map_err(|e| InputError::Line {
                line,
                source: Box::new(e),
            })
        })
        .collect()
}

// `#` at line start or after whitespace starts a comment, except for the
// fragment argument of `click nav`, so `click nav #section--1` keeps it.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#'
            && (i == 0 || bytes[i - 1].is_ascii_whitespace())
            && !is_nav_fragment(&line[..i], &line[i + 1..])
        {
            return &line[..i];
        }
    }
    line
}

fn is_nav_fragment(before: &str, after: &str) -> bool {
    let mut words = before.split_whitespace();
    words.next() == Some("click")
        && words.next() == Some("nav")
        && words.next().is_none()
        && after.chars().next().is_some_and(|c| !c.is_whitespace())
}
