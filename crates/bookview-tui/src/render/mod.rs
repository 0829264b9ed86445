//! Main render/view function (View in TEA pattern)


use bookview_app::{AppState, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, ListState, Paragraph};
use ratatui::Frame;

use crate::layout;
use crate::theme::{styles, Palette};
use crate::widgets;

/// Render the complete UI.
///
/// The only state this touches is the list scroll offset, which the list
/// widget adjusts to keep the selection visible.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::from_theme(&state.theme);

    frame.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state, &palette), areas.header);

    let mut list_state = ListState::default()
        .with_offset(state.list_offset)
        .with_selected(state.selected);
    frame.render_stateful_widget(
        widgets::BookList::new(&state.previews, &palette),
        areas.results,
        &mut list_state,
    );
    state.list_offset = list_state.offset();

    render_footer(frame, areas.footer, state, &palette);

    match state.ui_mode {
        UiMode::Browse => {}
        UiMode::Search => {
            frame.render_widget(widgets::SearchDialog::new(&state.search_form, &palette), area);
        }
        UiMode::Settings => {
            frame.render_widget(
                widgets::SettingsDialog::new(
                    &state.settings_form,
                    &state.settings.themes,
                    &palette,
                ),
                area,
            );
        }
        UiMode::Detail => {
            if let Some(detail) = &state.detail {
                frame.render_widget(widgets::DetailOverlay::new(detail, &palette), area);
            }
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let button = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(widgets::ShowMore::new(state.remaining(), palette), button);

    if area.height > 1 {
        let hints = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(key_hints(state, palette), hints);
    }
}

fn key_hints(state: &AppState, p: &Palette) -> Paragraph<'static> {
    let shown = format!(
        "  {}/{} shown",
        state.previews.len(),
        state.total_matches()
    );
    let bindings: &[(&str, &str)] = &[
        ("↑↓", "select"),
        ("Enter", "details"),
        ("/", "search"),
        ("r", "reset"),
        ("t", "theme"),
        ("q", "quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in bindings {
        spans.push(Span::styled(*key, styles::keybinding(p)));
        spans.push(Span::styled(format!(" {action}  "), styles::text_muted(p)));
    }
    spans.push(Span::styled(shown, styles::text_muted(p)));
    Paragraph::new(Line::from(spans))
}
