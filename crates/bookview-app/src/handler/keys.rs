//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::search_form::SearchField;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::Search => handle_key_search(state, key),
        UiMode::Settings => handle_key_settings(key),
        UiMode::Detail => handle_key_detail(key),
    }
}

/// Handle key events in browse mode
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Overlay triggers
        InputKey::Char('/' | 's') => Some(Message::OpenSearch),
        InputKey::Char('t') => Some(Message::OpenSettings),
        InputKey::Enter => state
            .selected_preview()
            .map(|preview| Message::OpenDetail {
                id: preview.id.clone(),
            }),

        // Pagination
        InputKey::Char('m' | ' ') => Some(Message::ShowMore),
        InputKey::Char('r') => Some(Message::ResetFilters),

        // Selection
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::PageDown => Some(Message::SelectPageDown),
        InputKey::PageUp => Some(Message::SelectPageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),

        _ => None,
    }
}

/// Handle key events in the search overlay
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    let form = &state.search_form;
    match key {
        InputKey::Esc => Some(Message::CloseOverlay),
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Tab => Some(Message::SearchNextField),
        InputKey::BackTab => Some(Message::SearchPreviousField),

        InputKey::Left => Some(Message::SearchCycleOption { forward: false }),
        InputKey::Right => Some(Message::SearchCycleOption { forward: true }),

        // Title editing only applies while the title field has focus
        InputKey::Char(c) if form.focus == SearchField::Title => {
            let mut text = form.title.clone();
            text.push(c);
            Some(Message::SearchInput { text })
        }
        InputKey::Backspace if form.focus == SearchField::Title => {
            let mut text = form.title.clone();
            text.pop();
            Some(Message::SearchInput { text })
        }
        InputKey::CharCtrl('u') if form.focus == SearchField::Title => {
            Some(Message::SearchInput {
                text: String::new(),
            })
        }

        // Up/Down also cycle selectors, matching dropdown behavior
        InputKey::Up if form.focus != SearchField::Title => {
            Some(Message::SearchCycleOption { forward: false })
        }
        InputKey::Down if form.focus != SearchField::Title => {
            Some(Message::SearchCycleOption { forward: true })
        }

        _ => None,
    }
}

/// Handle key events in the settings overlay
fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseOverlay),
        InputKey::Enter => Some(Message::SubmitSettings),
        InputKey::Left | InputKey::Up | InputKey::BackTab => {
            Some(Message::SettingsCycleTheme { forward: false })
        }
        InputKey::Right | InputKey::Down | InputKey::Tab => {
            Some(Message::SettingsCycleTheme { forward: true })
        }
        _ => None,
    }
}

/// Handle key events in the detail overlay
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseOverlay),
        InputKey::Enter | InputKey::Char('c') => Some(Message::CloseDetail),
        _ => None,
    }
}
