//! Detail overlay handlers

use bookview_core::BookId;

use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Open the detail overlay for `id`; unresolvable ids are ignored
pub fn handle_open(state: &mut AppState, id: &BookId) -> UpdateResult {
    if state.has_overlay() {
        return UpdateResult::none();
    }
    state.open_detail(id);
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Detail {
        state.close_overlay();
    }
    UpdateResult::none()
}
