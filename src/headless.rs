//! Headless mode - NDJSON result output without the TUI
//!
//! Runs one query against the catalog and writes one JSON object per line:
//!
//! ```json
//! {"event":"results","total":40,"remaining":4,"page":1}
//! {"event":"book","id":"b1","title":"Mort","author":"Terry Pratchett","image":"covers/b1.jpg"}
//! ```
//!
//! A query that matches nothing produces a single `no_results` event.

use std::io::{self, Write};

use bookview_app::AppState;
use bookview_core::prelude::*;
use bookview_core::{BookPreview, FilterCriteria, Selector};
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Summary of the rendered window
    Results {
        total: usize,
        remaining: usize,
        page: usize,
    },

    /// One visible preview, in result order
    Book {
        id: String,
        title: String,
        author: String,
        image: String,
    },

    /// The filter matched nothing
    NoResults,
}

impl From<&BookPreview> for HeadlessEvent {
    fn from(preview: &BookPreview) -> Self {
        HeadlessEvent::Book {
            id: preview.id.to_string(),
            title: preview.title.clone(),
            author: preview.author.clone(),
            image: preview.image.clone(),
        }
    }
}

impl HeadlessEvent {
    /// Write this event as a single JSON line
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}

/// Filter and page requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessQuery {
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    /// 1-based; values below 1 are treated as 1
    pub page: usize,
}

impl Default for HeadlessQuery {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: None,
            genre: None,
            page: 1,
        }
    }
}

impl HeadlessQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.title.clone(),
            self.author.as_deref().map(Selector::parse).unwrap_or_default(),
            self.genre.as_deref().map(Selector::parse).unwrap_or_default(),
        )
    }
}

/// Apply `query` to `state` and collect the events describing the result.
///
/// Reaching `page` takes `page - 1` "show more" steps; asking past the end
/// stops at the last page.
pub fn run_query(state: &mut AppState, query: &HeadlessQuery) -> Vec<HeadlessEvent> {
    state.apply_filter(query.criteria());
    if state.shows_no_results() {
        return vec![HeadlessEvent::NoResults];
    }

    for _ in 1..query.page.max(1) {
        if !state.show_more() {
            break;
        }
    }

    let mut events = Vec::with_capacity(state.previews.len() + 1);
    events.push(HeadlessEvent::Results {
        total: state.total_matches(),
        remaining: state.remaining(),
        page: state.pagination.page(),
    });
    events.extend(state.previews.iter().map(HeadlessEvent::from));
    events
}

/// Run the query and write its events to `out`
pub fn write_query(state: &mut AppState, query: &HeadlessQuery, out: &mut impl Write) -> Result<()> {
    for event in run_query(state, query) {
        event.write_to(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Headless entry point: events go to stdout
pub fn run_headless(mut state: AppState, query: &HeadlessQuery) -> Result<()> {
    info!("Headless query: {:?}", query);
    let mut stdout = io::stdout().lock();
    write_query(&mut state, query, &mut stdout).context("Failed to write headless output")
}
