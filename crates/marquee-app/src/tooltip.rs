//! Tooltip controller for the film table.
//!
//! One shared overlay shows the box office and insight of at most one
//! hovered row. Placement is kept in document coordinates (scrolled content
//! space) so the overlay stays attached to its row while the table scrolls.

use marquee_core::{escape_html, format_box_office, wrap_text};

use crate::table_view::TableRow;

/// Text shown in the overlay for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub box_office: Option<f64>,
    pub insight: String,
}

impl TooltipContent {
    /// Content for `row`, or `None` when the row has no insight.
    pub fn for_row(row: &TableRow) -> Option<Self> {
        if !row.has_insight() {
            return None;
        }
        Some(Self {
            box_office: row.box_office,
            insight: row.insight.clone(),
        })
    }

    /// Overlay lines: the gross followed by the insight wrapped to `width`.
    pub fn lines(&self, width: usize) -> Vec<String> {
        let mut lines = vec![format!("Box Office: {}", format_box_office(self.box_office))];
        lines.extend(wrap_text(&self.insight, width));
        lines
    }

    /// Markup for a browser overlay. Dataset text is escaped first.
    pub fn to_html(&self) -> String {
        format!(
            "<p><strong>Box Office:</strong> {}</p><p>{}</p>",
            escape_html(&format_box_office(self.box_office)),
            escape_html(&self.insight)
        )
    }
}

/// Screen bounds of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowBounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl RowBounds {
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Overlay top-left corner in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub left: i32,
    pub top: i32,
}

impl Placement {
    /// Convert back to screen space for the current scroll offset.
    pub fn to_screen(self, scroll_offset: i32) -> Placement {
        Placement {
            left: self.left,
            top: self.top - scroll_offset,
        }
    }
}

/// Anchor an overlay of `overlay_width` below `bounds`, horizontally centered.
pub fn anchor_below(
    bounds: RowBounds,
    scroll_offset: i32,
    overlay_width: i32,
    gap: i32,
) -> Placement {
    Placement {
        left: bounds.left + bounds.width / 2 - overlay_width / 2,
        top: bounds.bottom() + scroll_offset + gap,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        /// Row index the overlay belongs to
        row: usize,
        content: TooltipContent,
        placement: Placement,
    },
}

/// Owns the single overlay and drives its Hidden/Visible transitions.
#[derive(Debug, Clone)]
pub struct TooltipController {
    state: TooltipState,
    overlay_width: i32,
    gap: i32,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(44, 0)
    }
}

impl TooltipController {
    pub fn new(overlay_width: u16, gap: u16) -> Self {
        Self {
            state: TooltipState::Hidden,
            overlay_width: i32::from(overlay_width),
            gap: i32::from(gap),
        }
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn overlay_width(&self) -> u16 {
        u16::try_from(self.overlay_width).unwrap_or(u16::MAX)
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// Row the visible overlay is bound to.
    pub fn bound_row(&self) -> Option<usize> {
        match &self.state {
            TooltipState::Visible { row, .. } => Some(*row),
            TooltipState::Hidden => None,
        }
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        match &self.state {
            TooltipState::Visible { content, .. } => Some(content),
            TooltipState::Hidden => None,
        }
    }

    pub fn placement(&self) -> Option<Placement> {
        match &self.state {
            TooltipState::Visible { placement, .. } => Some(*placement),
            TooltipState::Hidden => None,
        }
    }

    /// Pointer entered row `index`. Rows without an insight hide the overlay.
    pub fn pointer_enter(
        &mut self,
        index: usize,
        row: &TableRow,
        bounds: RowBounds,
        scroll_offset: usize,
    ) {
        match TooltipContent::for_row(row) {
            Some(content) => {
                let scroll = i32::try_from(scroll_offset).unwrap_or(i32::MAX);
                let placement = anchor_below(bounds, scroll, self.overlay_width, self.gap);
                tracing::trace!("Tooltip shown for row {} at {:?}", index, placement);
                self.state = TooltipState::Visible {
                    row: index,
                    content,
                    placement,
                };
            }
            None => self.hide(),
        }
    }

    /// Pointer left row `index`. Leaving some other row leaves the overlay alone.
    pub fn pointer_leave(&mut self, index: usize) {
        if self.bound_row() == Some(index) {
            self.hide();
        }
    }

    pub fn hide(&mut self) {
        if self.is_visible() {
            tracing::trace!("Tooltip hidden");
        }
        self.state = TooltipState::Hidden;
    }
}
