//! Search overlay handlers

use bookview_core::prelude::*;
use bookview_core::FilterCriteria;

use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Open the search form, showing the active criteria
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.has_overlay() {
        return UpdateResult::none();
    }
    let criteria = state.criteria.clone();
    state.search_form.load(&criteria);
    state.ui_mode = UiMode::Search;
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, text: String) -> UpdateResult {
    if state.ui_mode == UiMode::Search {
        state.search_form.title = text;
    }
    UpdateResult::none()
}

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Search {
        state.search_form.focus = state.search_form.focus.next();
    }
    UpdateResult::none()
}

pub fn handle_previous_field(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Search {
        state.search_form.focus = state.search_form.focus.previous();
    }
    UpdateResult::none()
}

pub fn handle_cycle_option(state: &mut AppState, forward: bool) -> UpdateResult {
    if state.ui_mode == UiMode::Search {
        state.search_form.cycle_focused(forward);
    }
    UpdateResult::none()
}

/// Filter with the form contents, reset to the first window, close the form
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::Search {
        return UpdateResult::none();
    }
    let criteria = state.search_form.to_criteria();
    state.apply_filter(criteria);
    state.close_overlay();
    UpdateResult::none()
}

/// Submit default criteria from browse mode
pub fn handle_reset_filters(state: &mut AppState) -> UpdateResult {
    if state.has_overlay() {
        return UpdateResult::none();
    }
    debug!("Resetting filters");
    state.apply_filter(FilterCriteria::default());
    UpdateResult::none()
}
