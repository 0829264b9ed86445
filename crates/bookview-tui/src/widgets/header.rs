//! Main header: app title, match count, theme and the active filter

use bookview_app::search_form::{ALL_AUTHORS, ALL_GENRES};
use bookview_app::AppState;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::truncate_to_width;
use crate::theme::{styles, Palette};

pub struct Header<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn match_label(&self) -> String {
        match self.state.total_matches() {
            1 => "1 match".to_string(),
            n => format!("{n} matches"),
        }
    }

    /// One-line description of the submitted criteria
    fn filter_summary(&self) -> String {
        let criteria = &self.state.criteria;
        if criteria.is_default() {
            return "All books".to_string();
        }
        let catalog = &self.state.catalog;
        let author = criteria
            .author
            .as_option()
            .map(|id| catalog.author_name(id).unwrap_or(id.as_str()))
            .unwrap_or(ALL_AUTHORS);
        let genre = criteria
            .genre
            .as_option()
            .map(|id| catalog.genre_name(id).unwrap_or(id.as_str()))
            .unwrap_or(ALL_GENRES);

        let mut parts = Vec::with_capacity(3);
        if !criteria.title.trim().is_empty() {
            parts.push(format!("Title \"{}\"", criteria.title.trim()));
        }
        parts.push(author.to_string());
        parts.push(genre.to_string());
        parts.join(" · ")
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::panel_block(p);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let right = format!("{}  theme: {}", self.match_label(), self.state.theme.name);
        let right_width = right.width() as u16 + 1;
        let [title_area, count_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(right_width)])
                .areas(Rect::new(inner.x, inner.y, inner.width, 1));

        Paragraph::new(Line::from(vec![
            Span::styled(" bookview", styles::title(p)),
            Span::styled("  catalog browser", styles::text_muted(p)),
        ]))
        .render(title_area, buf);

        Paragraph::new(Line::from(Span::styled(right, styles::text_muted(p)))).render(count_area, buf);

        if inner.height > 1 {
            let summary = truncate_to_width(
                &format!(" Filter: {}", self.filter_summary()),
                inner.width as usize,
            );
            Paragraph::new(Line::from(Span::styled(summary, styles::text_muted(p)))).render(
                Rect::new(inner.x, inner.y + 1, inner.width, 1),
                buf,
            );
        }
    }
}
