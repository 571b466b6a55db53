//! Replay an event script against a fresh [`Session`].
//!
//! Each event is handled to completion before the next one is read, exactly as
//! the page runtime would deliver them. For every event the replay records what
//! changed plus the slider's dots before and after, which is what `simulate`
//! prints.

use crate::config::SiteConfig;
use crate::content::Page;
use crate::input::{InputError, PageEvent, parse_script};
use crate::output::format_dots;
use crate::session::{Reaction, Session};
use crate::slider::SliderError;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SimulateError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Script error: {0}")]
    Script(#[from] InputError),
    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One replayed event.
#[derive(Debug)]
pub struct Step {
    /// 1-based position in the script.
    pub index: usize,
    pub event: PageEvent,
    pub reactions: Vec<Reaction>,
    pub dots_before: String,
    pub dots_after: String,
}

/// The session after the last event, plus every step that led there.
#[derive(Debug)]
pub struct Replay {
    pub session: Session,
    pub steps: Vec<Step>,
}

impl Replay {
    /// Final UI state as pretty-printed JSON.
    pub fn snapshot_json(&self) -> Result<String, SimulateError> {
        Ok(serde_json::to_string_pretty(&self.session.snapshot())?)
    }
}

/// Read and parse an event script.
pub fn load_script(path: &Path) -> Result<Vec<PageEvent>, SimulateError> {
    let script = fs::read_to_string(path).map_err(|source| SimulateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_script(&script)?)
}

/// Handle `events` in order against a session built from `page` and `config`.
pub fn replay(events: Vec<PageEvent>, page: &Page, config: &SiteConfig) -> Result<Replay, SimulateError> {
    let mut session = Session::new(page, config)?;
    let mut steps = Vec::with_capacity(events.len());

    for (i, event) in events.into_iter().enumerate() {
        let dots_before = format_dots(session.slider().view());
        let reactions = session.handle(&event);
        let dots_after = format_dots(session.slider().view());
        debug!(step = i + 1, reactions = reactions.len(), "event handled");
        steps.push(Step {
            index: i + 1,
            event,
            reactions,
            dots_before,
            dots_after,
        });
    }

    Ok(Replay { session, steps })
}
