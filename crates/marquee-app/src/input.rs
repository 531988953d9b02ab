//! Abstract input events, independent of the terminal library.
//!
//! The TUI converts crossterm key and mouse events into these types at the
//! boundary so that marquee-app never depends on crossterm.

/// Keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer moved without a button held
    Moved,
    /// Primary button pressed
    Down,
    ScrollUp,
    ScrollDown,
}

/// Pointer event at a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }

    pub fn moved(column: u16, row: u16) -> Self {
        Self::new(PointerKind::Moved, column, row)
    }

    pub fn down(column: u16, row: u16) -> Self {
        Self::new(PointerKind::Down, column, row)
    }
}
