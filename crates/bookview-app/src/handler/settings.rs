//! Theme settings overlay handlers

use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.has_overlay() {
        return UpdateResult::none();
    }
    let current = state.theme.name.clone();
    state.settings_form.load(&current);
    state.ui_mode = UiMode::Settings;
    UpdateResult::none()
}

pub fn handle_cycle_theme(state: &mut AppState, forward: bool) -> UpdateResult {
    if state.ui_mode == UiMode::Settings {
        state.settings_form.cycle(forward);
    }
    UpdateResult::none()
}

/// Apply the selected theme and close the overlay
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::Settings {
        return UpdateResult::none();
    }
    if let Some(name) = state.settings_form.selected().map(str::to_string) {
        state.apply_theme(&name);
    }
    state.close_overlay();
    UpdateResult::none()
}
