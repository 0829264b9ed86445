//! Detail overlay for a single book

use bookview_core::BookDetail;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::modal_overlay::{centered_rect_percent, clear_area, dim_background, render_shadow};
use crate::theme::{styles, Palette};

pub struct DetailOverlay<'a> {
    detail: &'a BookDetail,
    palette: &'a Palette,
}

impl<'a> DetailOverlay<'a> {
    pub fn new(detail: &'a BookDetail, palette: &'a Palette) -> Self {
        Self { detail, palette }
    }

    fn heading(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let d = self.detail;
        let genres = if d.genres.is_empty() {
            "-".to_string()
        } else {
            d.genres.join(", ")
        };
        vec![
            Line::from(Span::styled(d.title.clone(), styles::title(p))),
            Line::from(Span::styled(d.subtitle.clone(), styles::text_muted(p))),
            Line::default(),
            Line::from(vec![
                Span::styled("Genres  ", styles::text_muted(p)),
                Span::raw(genres),
            ]),
            Line::from(vec![
                Span::styled("Cover   ", styles::text_muted(p)),
                Span::raw(d.image.clone()),
            ]),
        ]
    }
}

impl Widget for DetailOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        dim_background(buf, area, p);
        let modal = centered_rect_percent(70, 70, area);
        render_shadow(buf, modal, p);
        clear_area(buf, modal);

        let block = styles::modal_block(p).title(" Book ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let base = Style::default().fg(p.fg).bg(p.popup_bg);
        let [heading_area, description_area, hint_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner.inner(Margin::new(1, 0)));

        Paragraph::new(self.heading())
            .style(base)
            .render(heading_area, buf);

        let description = if self.detail.description.is_empty() {
            Span::styled("No description available.", styles::text_muted(p))
        } else {
            Span::raw(self.detail.description.clone())
        };
        Paragraph::new(Line::from(description))
            .style(base)
            .wrap(Wrap { trim: true })
            .render(description_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled("/", styles::text_muted(p)),
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" close", styles::text_muted(p)),
        ]))
        .style(base)
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day_palette, sample_state, TestTerminal};
    use bookview_core::BookId;

    #[test]
    fn test_renders_detail_fields() {
        let state = sample_state(3);
        let detail = BookDetail::lookup(&state.catalog, &BookId::new("b1")).unwrap();
        let palette = day_palette();
        let mut term = TestTerminal::new();
        term.render_widget(DetailOverlay::new(&detail, &palette), term.area());

        assert!(term.buffer_contains("Book 1"));
        assert!(term.buffer_contains("Bob Writer (2001)"));
        assert!(term.buffer_contains("history"));
        assert!(term.buffer_contains("covers/1.jpg"));
        assert!(term.buffer_contains("Description 1"));
        assert!(term.buffer_contains("close"));
    }

    #[test]
    fn test_empty_description_placeholder() {
        let state = sample_state(1);
        let mut detail = BookDetail::lookup(&state.catalog, &BookId::new("b0")).unwrap();
        detail.description.clear();
        let palette = day_palette();
        let mut term = TestTerminal::new();
        term.render_widget(DetailOverlay::new(&detail, &palette), term.area());

        assert!(term.buffer_contains("No description available."));
    }
}
