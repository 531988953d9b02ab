//! Key event handlers for different UI modes

use crate::input::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};
use crate::table_view::SortOrder;

/// Convert key events to messages based on current phase and UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if !state.is_interactive() {
        return handle_key_loading(state, key);
    }
    match state.ui_mode {
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events before the dashboard accepts input
fn handle_key_loading(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        // Retry after a failed load
        InputKey::Char('r') if state.load_error.is_some() => Some(Message::LoadDataset),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        // Restore the previous term
        InputKey::Esc => Some(Message::CancelSearch),

        // Keep the term, back to normal mode
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Backspace => Some(Message::SearchBackspace),

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchClear),

        InputKey::Char(c) => Some(Message::SearchInput(c)),

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Controls
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('y') => Some(Message::SortTable(SortOrder::ByYear)),
        InputKey::Char('b') => Some(Message::SortTable(SortOrder::ByBoxOffice)),
        InputKey::Char('n') => Some(Message::SortTable(SortOrder::None)),

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),

        _ => match state.focus {
            Focus::Table => handle_key_table(key),
            Focus::Chart(_) => handle_key_chart(key),
        },
    }
}

/// Navigation keys while the table has focus
fn handle_key_table(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        _ => None,
    }
}

/// Navigation keys while a chart has focus
fn handle_key_chart(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up | InputKey::Char('h') | InputKey::Char('k') => {
            Some(Message::SelectPrevPoint)
        }
        InputKey::Right | InputKey::Down | InputKey::Char('l') | InputKey::Char('j') => {
            Some(Message::SelectNextPoint)
        }
        InputKey::Enter => Some(Message::ActivatePoint),
        _ => None,
    }
}
