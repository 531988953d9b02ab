//! Shared chrome for the four chart panels

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use marquee_core::ChartConfig;

use crate::theme::styles;

/// Panel block titled with the chart name. A focused panel shows the
/// selected point's tooltip text along its bottom border.
pub fn panel_block<'a>(
    chart: &'a ChartConfig,
    focused: bool,
    selected: Option<usize>,
) -> Block<'a> {
    let title_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    let mut block = styles::glass_block(focused)
        .title(Line::styled(format!(" {} ", chart.title), title_style));

    if focused {
        if let Some(index) = selected {
            let text = chart.tooltip_lines(index).join(" · ");
            if !text.is_empty() {
                block = block.title_bottom(Line::styled(format!(" {} ", text), styles::accent()));
            }
        }
    }
    block
}

/// Placeholder for a chart without data points.
pub fn render_empty(area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    Paragraph::new(Line::styled("No data", styles::text_muted()))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y, area.width, 1), buf);
}

/// Keep `selected` visible in a window of `rows` entries, returning the
/// first entry to draw.
pub fn window_start(selected: Option<usize>, rows: usize, len: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    let selected = selected.unwrap_or(0).min(len - 1);
    if selected < rows {
        0
    } else {
        (selected + 1 - rows).min(len - rows)
    }
}
