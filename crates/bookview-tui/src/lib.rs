//! bookview-tui - Terminal UI for bookview
//!
//! Renders an [`bookview_app::AppState`] with ratatui and turns crossterm
//! key events into [`bookview_app::Message`]s.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
