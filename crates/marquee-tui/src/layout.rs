//! Screen layout definitions for the TUI
//!
//! Header, stat cards, a 2x2 chart grid, the control row, the film table
//! and an optional help footer, top to bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,
    /// Three stat cards
    pub stats: Rect,
    /// Chart panels in dashboard order: top films, directors, over time, countries
    pub charts: [Rect; 4],
    /// Search box and sort buttons
    pub controls: Rect,
    /// Film table (glass container)
    pub table: Rect,
    /// Key hints and status line
    pub footer: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let footer_height = if show_footer { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header
        Constraint::Length(3),             // Stat cards
        Constraint::Percentage(45),        // Charts
        Constraint::Length(1),             // Controls
        Constraint::Min(4),                // Table
        Constraint::Length(footer_height), // Footer
    ])
    .split(area);

    let chart_rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let halves = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let top = Layout::horizontal(halves).split(chart_rows[0]);
    let bottom = Layout::horizontal(halves).split(chart_rows[1]);

    ScreenAreas {
        header: chunks[0],
        stats: chunks[1],
        charts: [top[0], top[1], bottom[0], bottom[1]],
        controls: chunks[3],
        table: chunks[4],
        footer: show_footer.then_some(chunks[5]),
    }
}
