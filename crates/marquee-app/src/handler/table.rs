//! Search, sort and scroll handlers for the film table
//!
//! Every recompute of the rows hides the tooltip; the rows it pointed at
//! may no longer exist.

use crate::state::{AppState, UiMode};
use crate::table_view::{SortOrder, TableView};

use super::pointer::hover_at;
use super::UpdateResult;

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.search_before_edit = Some(state.table.search().to_string());
    state.ui_mode = UiMode::SearchInput;
    UpdateResult::none()
}

pub fn handle_search_input(state: &mut AppState, c: char) -> UpdateResult {
    state.table.push_search_char(c, &state.catalog);
    state.tooltip.hide();
    UpdateResult::none()
}

pub fn handle_search_backspace(state: &mut AppState) -> UpdateResult {
    state.table.pop_search_char(&state.catalog);
    state.tooltip.hide();
    UpdateResult::none()
}

pub fn handle_search_clear(state: &mut AppState) -> UpdateResult {
    state.table.set_search("", &state.catalog);
    state.tooltip.hide();
    UpdateResult::none()
}

pub fn handle_submit_search(state: &mut AppState) -> UpdateResult {
    state.search_before_edit = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_cancel_search(state: &mut AppState) -> UpdateResult {
    if let Some(previous) = state.search_before_edit.take() {
        if previous != state.table.search() {
            state.table.set_search(previous, &state.catalog);
            state.tooltip.hide();
        }
    }
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_sort(state: &mut AppState, order: SortOrder) -> UpdateResult {
    tracing::debug!("Sorting table by {}", order.label());
    match order {
        SortOrder::None => state.table.clear_sort(&state.catalog),
        _ => state.table.set_sort(order, &state.catalog),
    }
    state.tooltip.hide();
    UpdateResult::none()
}

/// Apply a keyboard scroll, then re-hit-test the row now under the pointer.
pub fn handle_scroll(state: &mut AppState, scroll: impl FnOnce(&mut TableView)) -> UpdateResult {
    scroll(&mut state.table);
    if let Some((column, row)) = state.last_pointer {
        hover_at(state, column, row);
    }
    UpdateResult::none()
}
