//! Color palette: dark cards with a gold accent.

use marquee_core::Rgba;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 28, 34);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = GOLD;

// --- Accent ---
pub const GOLD: Color = Color::Rgb(212, 175, 55);
pub const ACCENT: Color = GOLD;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Table ---
pub const ROW_HOVER_BG: Color = Color::Rgb(58, 50, 22);

// --- Effects ---
pub const SHADOW: Color = Color::Black;

/// Terminal color for a chart color. Alpha is dropped; terminals have no blending.
pub fn chart_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}
