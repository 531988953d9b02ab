//! Message types for the application (TEA pattern)

use marquee_core::Catalog;

use crate::input::{InputKey, PointerEvent};
use crate::table_view::SortOrder;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Pointer(PointerEvent),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Lifecycle Messages
    // ─────────────────────────────────────────────────────────
    /// Start loading the dataset (initial load or reload)
    LoadDataset,
    /// Dataset parsed successfully
    DatasetLoaded { catalog: Catalog },
    /// Dataset could not be read or parsed
    DatasetLoadFailed { error: String },
    /// Dashboard is built; start accepting input
    ControlsReady,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearch,
    /// Append a character to the search term
    SearchInput(char),
    /// Delete the last search character
    SearchBackspace,
    /// Clear the search term
    SearchClear,
    /// Keep the current search term and leave search mode
    SubmitSearch,
    /// Restore the previous search term and leave search mode
    CancelSearch,

    // ─────────────────────────────────────────────────────────
    // Table Messages
    // ─────────────────────────────────────────────────────────
    /// Re-sort the table (`SortOrder::None` restores catalog order)
    SortTable(SortOrder),
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Chart Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next panel
    FocusNext,
    /// Move focus to the previous panel
    FocusPrev,
    /// Select the previous point of the focused chart
    SelectPrevPoint,
    /// Select the next point of the focused chart
    SelectNextPoint,
    /// Activate the selected point of the focused chart
    ActivatePoint,
}
