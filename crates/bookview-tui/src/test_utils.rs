//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and the full view can be
//! rendered and inspected without a real terminal.

use std::collections::BTreeMap;

use bookview_app::{AppState, Settings};
use bookview_core::{default_themes, ActiveTheme, AuthorId, Book, BookId, Catalog, GenreId};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Frame;
use ratatui::Terminal;

use crate::theme::Palette;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing small layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string (for debugging failed assertions)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// `count` books titled `Book 0`, `Book 1`, ... Even books are by
/// `a1` (Alice Author) in `fiction`, odd books by `a2` (Bob Writer) in
/// `history`.
pub fn sample_catalog(count: usize) -> Catalog {
    let books = (0..count)
        .map(|i| Book {
            id: BookId::new(format!("b{i}")),
            title: format!("Book {i}"),
            image: format!("covers/{i}.jpg"),
            author: AuthorId::new(if i % 2 == 0 { "a1" } else { "a2" }),
            genres: vec![GenreId::new(if i % 2 == 0 { "fiction" } else { "history" })],
            published: "2001-02-03T00:00:00Z".parse().unwrap(),
            description: format!("Description {i}"),
        })
        .collect();
    let authors = BTreeMap::from([
        (AuthorId::new("a1"), "Alice Author".to_string()),
        (AuthorId::new("a2"), "Bob Writer".to_string()),
    ]);
    Catalog::new(books, authors, BTreeMap::new()).unwrap()
}

pub fn sample_state(count: usize) -> AppState {
    AppState::new(sample_catalog(count), Settings::default()).unwrap()
}

pub fn day_palette() -> Palette {
    Palette::from_theme(&ActiveTheme::resolve(&default_themes(), "day").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_sizes() {
        let term = TestTerminal::new();
        assert_eq!(term.area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        let term = TestTerminal::compact();
        assert_eq!(term.area(), Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(
            ratatui::widgets::Paragraph::new("\nsecond"),
            term.area(),
        );
        assert!(term.line_contains(1, "second"));
        assert!(!term.line_contains(0, "second"));
    }
}
