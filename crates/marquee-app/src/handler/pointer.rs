//! Pointer handling: row hover, wheel scrolling and control clicks
//!
//! Hit-testing only looks at the regions recorded by the renderer. The
//! tooltip overlay is never a target, so a pointer resting on the overlay
//! addresses whatever row lies beneath it.

use crate::input::{PointerEvent, PointerKind};
use crate::message::Message;
use crate::state::{AppState, ChartSlot, Focus};
use crate::table_view::SortOrder;
use crate::tooltip::RowBounds;

use super::UpdateResult;

/// Rows moved per wheel notch
const WHEEL_ROWS: usize = 3;

pub fn handle_pointer(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    state.last_pointer = Some((event.column, event.row));
    match event.kind {
        PointerKind::Moved => {
            hover_at(state, event.column, event.row);
            UpdateResult::none()
        }
        PointerKind::ScrollUp | PointerKind::ScrollDown => {
            if state.regions.table_body.contains(event.column, event.row) {
                if event.kind == PointerKind::ScrollUp {
                    state.table.scroll_up(WHEEL_ROWS);
                } else {
                    state.table.scroll_down(WHEEL_ROWS);
                }
                // Content moved under a stationary pointer
                hover_at(state, event.column, event.row);
            }
            UpdateResult::none()
        }
        PointerKind::Down => click_at(state, event.column, event.row),
    }
}

/// Table row under a screen cell, with its screen bounds.
fn row_under(state: &AppState, column: u16, row: u16) -> Option<(usize, RowBounds)> {
    let body = state.regions.table_body;
    if !body.contains(column, row) {
        return None;
    }
    let index = state.table.row_at(usize::from(row - body.y))?;
    let bounds = RowBounds {
        left: i32::from(body.x),
        top: i32::from(row),
        width: i32::from(body.width),
        height: 1,
    };
    Some((index, bounds))
}

/// Update the hovered row and drive the tooltip enter/leave transitions.
pub(super) fn hover_at(state: &mut AppState, column: u16, row: u16) {
    let target = row_under(state, column, row);
    let target_index = target.map(|(index, _)| index);
    if target_index == state.table.hovered {
        return;
    }

    if let Some(previous) = state.table.hovered.take() {
        state.tooltip.pointer_leave(previous);
    }

    if let Some((index, bounds)) = target {
        state.table.hovered = Some(index);
        if let Some(table_row) = state.table.row(index) {
            state
                .tooltip
                .pointer_enter(index, table_row, bounds, state.table.offset);
        }
    }
}

fn click_at(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    let regions = state.regions;

    if regions.search_box.contains(column, row) {
        return UpdateResult::message(Message::StartSearch);
    }
    if regions.sort_year_button.contains(column, row) {
        return UpdateResult::message(Message::SortTable(SortOrder::ByYear));
    }
    if regions.sort_box_office_button.contains(column, row) {
        return UpdateResult::message(Message::SortTable(SortOrder::ByBoxOffice));
    }
    if regions.table_body.contains(column, row) {
        state.focus = Focus::Table;
        return UpdateResult::none();
    }
    if let Some(slot) = ChartSlot::ALL
        .into_iter()
        .find(|slot| regions.charts[slot.index()].contains(column, row))
    {
        state.focus = Focus::Chart(slot);
    }
    UpdateResult::none()
}
