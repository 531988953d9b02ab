//! Focus and chart point selection handlers

use crate::state::{AppState, ChartSlot, Focus};

use super::UpdateResult;

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.prev();
    UpdateResult::none()
}

fn focused_chart(state: &AppState) -> Option<ChartSlot> {
    match state.focus {
        Focus::Chart(slot) => Some(slot),
        Focus::Table => None,
    }
}

pub fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    if let Some(slot) = focused_chart(state) {
        let cursor = &mut state.chart_cursor[slot.index()];
        *cursor = cursor.saturating_sub(1);
    }
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if let Some(slot) = focused_chart(state) {
        let last = state.chart_len(slot).saturating_sub(1);
        let cursor = &mut state.chart_cursor[slot.index()];
        *cursor = (*cursor + 1).min(last);
    }
    UpdateResult::none()
}

/// Activate the selected point. A top film reports its insight; other
/// charts report their tooltip text.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(slot) = focused_chart(state) else {
        return UpdateResult::none();
    };
    let Some(index) = state.selected_point(slot) else {
        return UpdateResult::none();
    };
    let Some(dashboard) = state.dashboard.as_ref() else {
        return UpdateResult::none();
    };

    let chart = dashboard.chart(slot);
    let label = chart.labels.get(index).cloned().unwrap_or_default();
    let status = match slot {
        ChartSlot::TopFilms => match chart.insight(index) {
            Some(insight) => {
                tracing::info!("Insight for {}: {}", label, insight);
                format!("{}: {}", label, insight)
            }
            None => format!("{}: no insight recorded", label),
        },
        _ => {
            let text = chart.tooltip_lines(index).join(" ");
            tracing::info!("{} / {}: {}", chart.title, label, text);
            // Count tooltips already lead with the label
            if text.starts_with(&label) {
                text
            } else {
                format!("{}: {}", label, text)
            }
        }
    };
    state.status_message = Some(status);
    UpdateResult::none()
}
