//! Floating tooltip overlay for the hovered table row
//!
//! The controller keeps the overlay position in document coordinates; this
//! module maps it back onto the screen and draws it above everything else.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};

use marquee_app::{Placement, TooltipContent};

use crate::theme::{palette, styles};

/// Screen rect for an overlay of `width` x `height` placed at `placement`.
///
/// `offset` is the table scroll offset used to go from document to screen
/// rows. The rect is shifted left to stay inside `area` and clipped at its
/// bottom edge. Returns `None` when the overlay would start outside `area`
/// or has no room for a single line of content.
pub fn overlay_rect(
    placement: Placement,
    offset: usize,
    width: u16,
    height: u16,
    area: Rect,
) -> Option<Rect> {
    let screen = placement.to_screen(i32::try_from(offset).unwrap_or(i32::MAX));
    let area_top = i32::from(area.y);
    let area_bottom = i32::from(area.y) + i32::from(area.height);
    if screen.top < area_top || screen.top >= area_bottom {
        return None;
    }

    let width = width.min(area.width);
    let max_left = i32::from(area.x) + i32::from(area.width - width);
    let left = screen.left.clamp(i32::from(area.x), max_left);
    let available = area_bottom - screen.top;
    let height = i32::from(height).min(available);
    // Border plus at least one line
    if height < 3 {
        return None;
    }

    Some(Rect::new(
        u16::try_from(left).ok()?,
        u16::try_from(screen.top).ok()?,
        width,
        u16::try_from(height).ok()?,
    ))
}

/// Lines shown inside an overlay `width` cells wide.
pub fn overlay_lines(content: &TooltipContent, width: u16) -> Vec<String> {
    content.lines(usize::from(width.saturating_sub(2)).max(1))
}

/// Draw a 1-cell shadow to the right of and below `rect`.
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = rect.x.saturating_add(rect.width);
    for y in rect.y.saturating_add(1)..rect.y.saturating_add(rect.height).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = rect.y.saturating_add(rect.height);
    for x in rect.x.saturating_add(1)..rect.x.saturating_add(rect.width).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

pub struct TooltipOverlay {
    lines: Vec<String>,
}

impl TooltipOverlay {
    /// Overlay for `content` sized to `width` cells.
    pub fn new(content: &TooltipContent, width: u16) -> Self {
        Self {
            lines: overlay_lines(content, width),
        }
    }

    /// Total height including the border.
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len() + 2).unwrap_or(u16::MAX)
    }
}

impl Widget for TooltipOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut lines = self.lines.into_iter();
        let mut text: Vec<Line> = Vec::new();
        if let Some(first) = lines.next() {
            text.push(Line::styled(first, styles::accent_bold()));
        }
        text.extend(lines.map(|line| Line::styled(line, styles::text_primary())));

        Paragraph::new(text)
            .block(styles::popup_block())
            .render(area, buf);
    }
}
