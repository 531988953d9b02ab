//! Stat cards: film count, highest single gross and total gross

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use marquee_core::{format_count, format_currency, StatSummary};

use crate::theme::styles;

/// Three side-by-side stat cards
pub struct StatBar<'a> {
    summary: &'a StatSummary,
}

impl<'a> StatBar<'a> {
    pub fn new(summary: &'a StatSummary) -> Self {
        Self { summary }
    }

    fn cards(&self) -> [(&'static str, String); 3] {
        [
            ("Total Films", format_count(self.summary.count)),
            (
                "Highest Box Office",
                format_currency(self.summary.max_box_office),
            ),
            (
                "Total Box Office",
                format_currency(self.summary.total_box_office),
            ),
        ]
    }
}

impl Widget for StatBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for ((label, value), column) in self.cards().into_iter().zip(columns.iter()) {
            let block = styles::glass_block(false)
                .title(Line::styled(format!(" {} ", label), styles::text_secondary()));
            let inner = block.inner(*column);
            block.render(*column, buf);
            Paragraph::new(Line::styled(value, styles::accent_bold()))
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}
