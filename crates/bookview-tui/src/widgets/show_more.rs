//! "Show more" affordance with the remaining-count label

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Palette};

pub struct ShowMore<'a> {
    remaining: usize,
    palette: &'a Palette,
}

impl<'a> ShowMore<'a> {
    pub fn new(remaining: usize, palette: &'a Palette) -> Self {
        Self { remaining, palette }
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }

    pub fn is_enabled(&self) -> bool {
        self.remaining > 0
    }
}

impl Widget for ShowMore<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let style = if self.is_enabled() {
            styles::border_active(p).add_modifier(Modifier::BOLD)
        } else {
            styles::text_muted(p).add_modifier(Modifier::DIM)
        };
        let mut spans = vec![Span::styled(format!("[ {} ]", self.label()), style)];
        if self.is_enabled() {
            spans.push(Span::styled("  m", styles::keybinding(p)));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day_palette, TestTerminal};

    #[test]
    fn test_enabled_label() {
        let palette = day_palette();
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(ShowMore::new(4, &palette), term.area());
        assert!(term.buffer_contains("[ Show more (4) ]"));
    }

    #[test]
    fn test_disabled_at_zero() {
        let palette = day_palette();
        let widget = ShowMore::new(0, &palette);
        assert!(!widget.is_enabled());

        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(widget, term.area());
        assert!(term.buffer_contains("Show more (0)"));
        assert!(!term.buffer_contains("  m"));
    }
}
