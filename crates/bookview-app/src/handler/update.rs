//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{browse, detail, keys::handle_key, search, settings, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Browse Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => browse::handle_select_relative(state, 1),
        Message::SelectPrevious => browse::handle_select_relative(state, -1),
        Message::SelectPageDown => {
            browse::handle_select_relative(state, browse::PAGE_STEP as isize)
        }
        Message::SelectPageUp => {
            browse::handle_select_relative(state, -(browse::PAGE_STEP as isize))
        }
        Message::SelectFirst => browse::handle_select_first(state),
        Message::SelectLast => browse::handle_select_last(state),
        Message::ShowMore => browse::handle_show_more(state),
        Message::ResetFilters => search::handle_reset_filters(state),

        // ─────────────────────────────────────────────────────────
        // Search Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSearch => search::handle_open(state),
        Message::SearchInput { text } => search::handle_input(state, text),
        Message::SearchNextField => search::handle_next_field(state),
        Message::SearchPreviousField => search::handle_previous_field(state),
        Message::SearchCycleOption { forward } => search::handle_cycle_option(state, forward),
        Message::SubmitSearch => search::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Settings Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSettings => settings::handle_open(state),
        Message::SettingsCycleTheme { forward } => settings::handle_cycle_theme(state, forward),
        Message::SubmitSettings => settings::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Detail Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail { id } => detail::handle_open(state, &id),
        Message::CloseDetail => detail::handle_close(state),

        Message::CloseOverlay => {
            state.close_overlay();
            UpdateResult::none()
        }
    }
}
