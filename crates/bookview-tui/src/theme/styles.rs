//! Semantic style builders on top of a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::{self, Palette};

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.fg).bg(p.bg)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.muted)
}

pub fn title(p: &Palette) -> Style {
    Style::default().fg(p.fg).add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

// --- Selection ---
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.bg)
        .bg(p.fg)
        .add_modifier(Modifier::BOLD)
}

pub fn focused_field(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Status ---
pub fn no_results() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

// --- Containers ---

/// Rounded bordered panel used for the main areas
pub fn panel_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive(p))
        .style(Style::default().fg(p.fg).bg(p.bg))
}

/// Rounded bordered panel with the accent border, for modals
pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().fg(p.fg).bg(p.popup_bg))
}
