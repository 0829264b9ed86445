//! Settings overlay: theme selector with a color preview

use bookview_app::settings_form::SettingsFormState;
use bookview_core::ThemeTable;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay::prepare_modal;
use crate::theme::palette::to_color;
use crate::theme::{styles, Palette};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 9;

pub struct SettingsDialog<'a> {
    form: &'a SettingsFormState,
    themes: &'a ThemeTable,
    palette: &'a Palette,
}

impl<'a> SettingsDialog<'a> {
    pub fn new(form: &'a SettingsFormState, themes: &'a ThemeTable, palette: &'a Palette) -> Self {
        Self {
            form,
            themes,
            palette,
        }
    }

    /// Sample text drawn in the highlighted theme's own colors
    fn preview_line(&self) -> Line<'static> {
        let colors = self.form.selected().and_then(|name| self.themes.get(name));
        match colors {
            Some(colors) => Line::from(vec![
                Span::styled("  Preview ", styles::text_muted(self.palette)),
                Span::styled(
                    " Aa The quick brown fox ",
                    Style::default()
                        .fg(to_color(colors.dark))
                        .bg(to_color(colors.light)),
                ),
            ]),
            None => Line::default(),
        }
    }
}

impl Widget for SettingsDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = prepare_modal(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT, p);

        let block = styles::modal_block(p).title(" Settings ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let selected = self.form.selected().unwrap_or("-");
        let position = self
            .form
            .themes()
            .iter()
            .position(|t| t == selected)
            .map_or(0, |i| i + 1);

        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled("  Theme    ", styles::focused_field(p)),
                Span::styled(format!("◀ {selected} ▶"), styles::focused_field(p)),
                Span::styled(
                    format!("  {position}/{}", self.form.themes().len()),
                    styles::text_muted(p),
                ),
            ]),
            Line::default(),
            self.preview_line(),
            Line::default(),
            Line::from(vec![
                Span::styled("  ←/→", styles::keybinding(p)),
                Span::styled(" theme  ", styles::text_muted(p)),
                Span::styled("Enter", styles::keybinding(p)),
                Span::styled(" apply  ", styles::text_muted(p)),
                Span::styled("Esc", styles::keybinding(p)),
                Span::styled(" cancel", styles::text_muted(p)),
            ]),
        ];
        Paragraph::new(lines)
            .style(Style::default().fg(p.fg).bg(p.popup_bg))
            .render(inner, buf);
    }
}
