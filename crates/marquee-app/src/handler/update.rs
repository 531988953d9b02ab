//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::{error, info};

use super::{charts, keys::handle_key, pointer, table, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Lifecycle Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadDataset => {
            if state.loading {
                return UpdateResult::none();
            }
            state.loading = true;
            state.status_message = None;
            UpdateResult::action(UpdateAction::LoadDataset {
                path: state.dataset_path.clone(),
            })
        }

        Message::DatasetLoaded { catalog } => {
            info!(
                "Loaded {} films from {}",
                catalog.len(),
                state.dataset_path.display()
            );
            state.install_catalog(catalog);
            UpdateResult::message(Message::ControlsReady)
        }

        Message::DatasetLoadFailed { error: reason } => {
            error!("Dataset load failed: {}", reason);
            state.loading = false;
            state.load_error = Some(reason);
            UpdateResult::none()
        }

        Message::ControlsReady => {
            if state.phase == AppPhase::Loaded {
                state.phase = AppPhase::Interactive;
            }
            UpdateResult::none()
        }

        // Everything below is user input and waits for the controls
        _ if !state.is_interactive() => UpdateResult::none(),

        Message::Pointer(event) => pointer::handle_pointer(state, event),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => table::handle_start_search(state),
        Message::SearchInput(c) => table::handle_search_input(state, c),
        Message::SearchBackspace => table::handle_search_backspace(state),
        Message::SearchClear => table::handle_search_clear(state),
        Message::SubmitSearch => table::handle_submit_search(state),
        Message::CancelSearch => table::handle_cancel_search(state),

        // ─────────────────────────────────────────────────────────
        // Table Messages
        // ─────────────────────────────────────────────────────────
        Message::SortTable(order) => table::handle_sort(state, order),
        Message::ScrollUp => table::handle_scroll(state, |t| t.scroll_up(1)),
        Message::ScrollDown => table::handle_scroll(state, |t| t.scroll_down(1)),
        Message::ScrollToTop => table::handle_scroll(state, |t| t.scroll_to_top()),
        Message::ScrollToBottom => table::handle_scroll(state, |t| t.scroll_to_bottom()),
        Message::PageUp => table::handle_scroll(state, |t| t.page_up()),
        Message::PageDown => table::handle_scroll(state, |t| t.page_down()),

        // ─────────────────────────────────────────────────────────
        // Chart Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => charts::handle_focus_next(state),
        Message::FocusPrev => charts::handle_focus_prev(state),
        Message::SelectPrevPoint => charts::handle_select_prev(state),
        Message::SelectNextPoint => charts::handle_select_next(state),
        Message::ActivatePoint => charts::handle_activate(state),
    }
}
