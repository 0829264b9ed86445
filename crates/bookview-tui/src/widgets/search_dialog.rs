//! Search overlay: title input plus author and genre selectors

use bookview_app::search_form::{SearchField, SearchFormState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay::prepare_modal;
use super::truncate_to_width;
use crate::theme::{styles, Palette};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 11;
const LABEL_WIDTH: usize = 9;

pub struct SearchDialog<'a> {
    form: &'a SearchFormState,
    palette: &'a Palette,
}

impl<'a> SearchDialog<'a> {
    pub fn new(form: &'a SearchFormState, palette: &'a Palette) -> Self {
        Self { form, palette }
    }

    fn label_style(&self, field: SearchField) -> Style {
        if self.form.focus == field {
            styles::focused_field(self.palette)
        } else {
            styles::text_muted(self.palette)
        }
    }

    fn marker(&self, field: SearchField) -> &'static str {
        if self.form.focus == field {
            "›"
        } else {
            " "
        }
    }

    fn title_line(&self, width: usize) -> Line<'static> {
        let field = SearchField::Title;
        let mut value = truncate_to_width(&self.form.title, width.saturating_sub(LABEL_WIDTH + 4));
        if self.form.focus == field {
            value.push('▏');
        }
        Line::from(vec![
            Span::styled(
                format!("{} {:<LABEL_WIDTH$}", self.marker(field), "Title"),
                self.label_style(field),
            ),
            Span::styled(value, styles::text_primary(self.palette)),
        ])
    }

    fn selector_line(&self, field: SearchField, label: &str, value: &str) -> Line<'static> {
        let value_style = if self.form.focus == field {
            styles::focused_field(self.palette)
        } else {
            Style::default().fg(self.palette.fg)
        };
        Line::from(vec![
            Span::styled(
                format!("{} {:<LABEL_WIDTH$}", self.marker(field), label),
                self.label_style(field),
            ),
            Span::styled(format!("◀ {value} ▶"), value_style),
        ])
    }
}

impl Widget for SearchDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = prepare_modal(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT, p);

        let block = styles::modal_block(p).title(" Search ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let width = inner.width as usize;
        let lines = vec![
            Line::default(),
            self.title_line(width),
            Line::default(),
            self.selector_line(
                SearchField::Author,
                "Author",
                &self.form.authors.selected().label,
            ),
            self.selector_line(
                SearchField::Genre,
                "Genre",
                &self.form.genres.selected().label,
            ),
            Line::default(),
            Line::from(vec![
                Span::styled(" Tab", styles::keybinding(p)),
                Span::styled(" field  ", styles::text_muted(p)),
                Span::styled("←/→", styles::keybinding(p)),
                Span::styled(" option  ", styles::text_muted(p)),
                Span::styled("Enter", styles::keybinding(p)),
                Span::styled(" search  ", styles::text_muted(p)),
                Span::styled("Esc", styles::keybinding(p)),
                Span::styled(" cancel", styles::text_muted(p)),
            ]),
        ];
        Paragraph::new(lines)
            .style(Style::default().fg(p.fg).bg(p.popup_bg))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day_palette, sample_state, TestTerminal};
    use bookview_app::search_form::{ALL_AUTHORS, ALL_GENRES};

    #[test]
    fn test_renders_fields_with_defaults() {
        let state = sample_state(4);
        let palette = day_palette();
        let mut term = TestTerminal::new();
        term.render_widget(SearchDialog::new(&state.search_form, &palette), term.area());

        assert!(term.buffer_contains("Search"));
        assert!(term.buffer_contains("Title"));
        assert!(term.buffer_contains(ALL_AUTHORS));
        assert!(term.buffer_contains(ALL_GENRES));
        assert!(term.buffer_contains("Esc cancel"));
    }

    #[test]
    fn test_renders_typed_title_and_selection() {
        let mut state = sample_state(4);
        state.search_form.title = "earthsea".to_string();
        state.search_form.focus = SearchField::Author;
        state.search_form.authors.cycle(true);

        let palette = day_palette();
        let mut term = TestTerminal::new();
        term.render_widget(SearchDialog::new(&state.search_form, &palette), term.area());

        assert!(term.buffer_contains("earthsea"));
        assert!(term.buffer_contains("◀ Alice Author ▶"));
        assert!(term.buffer_contains("› Author"));
    }
}
