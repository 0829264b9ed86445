//! Browse mode handlers: selection movement and "show more"

use crate::state::AppState;

use super::UpdateResult;

/// Rows moved by PageUp/PageDown
pub const PAGE_STEP: usize = 10;

/// Move the selection by `delta` rows, clamped to the rendered previews
pub fn handle_select_relative(state: &mut AppState, delta: isize) -> UpdateResult {
    if state.previews.is_empty() {
        return UpdateResult::none();
    }
    let last = state.previews.len() - 1;
    let current = state.selected.unwrap_or(0);
    let next = current.saturating_add_signed(delta).min(last);
    state.selected = Some(next);
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    if !state.previews.is_empty() {
        state.selected = Some(0);
    }
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    if let Some(last) = state.previews.len().checked_sub(1) {
        state.selected = Some(last);
    }
    UpdateResult::none()
}

/// Append the next window and move the selection onto its first row
pub fn handle_show_more(state: &mut AppState) -> UpdateResult {
    if state.has_overlay() {
        return UpdateResult::none();
    }
    let before = state.previews.len();
    if state.show_more() {
        state.selected = Some(before);
    }
    UpdateResult::none()
}
