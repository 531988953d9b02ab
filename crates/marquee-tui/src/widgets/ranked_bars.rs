//! Horizontal bar chart for ranked values (top films, director leaderboard)

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Widget},
};

use marquee_core::{format_compact_currency, ChartConfig};

use super::chart_panel::{panel_block, render_empty, window_start};
use crate::theme::{palette, styles};

/// Widest label drawn beside a bar
const MAX_LABEL_WIDTH: usize = 18;

/// One bar per data point, highest first.
pub struct RankedBars<'a> {
    chart: &'a ChartConfig,
    focused: bool,
    selected: Option<usize>,
}

impl<'a> RankedBars<'a> {
    pub fn new(chart: &'a ChartConfig) -> Self {
        Self {
            chart,
            focused: false,
            selected: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_WIDTH {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_LABEL_WIDTH - 1).collect();
    short.push('…');
    short
}

impl Widget for RankedBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.chart, self.focused, self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.chart.is_empty() {
            render_empty(inner, buf);
            return;
        }

        let rows = usize::from(inner.height);
        let start = window_start(self.selected, rows, self.chart.len());
        let bar_color = palette::chart_color(self.chart.color_for(0));

        let bars: Vec<Bar> = self
            .chart
            .labels
            .iter()
            .zip(self.chart.values.iter())
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(index, (label, value))| {
                let is_selected = self.focused && self.selected == Some(index);
                let style = if is_selected {
                    styles::accent_bold()
                } else {
                    ratatui::style::Style::default().fg(bar_color)
                };
                Bar::default()
                    .label(Line::from(truncate_label(label)))
                    .value(value.max(0.0) as u64)
                    .text_value(format_compact_currency(*value))
                    .style(style)
                    .value_style(if is_selected {
                        styles::focused_selected()
                    } else {
                        styles::text_primary()
                    })
            })
            .collect();

        BarChart::default()
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(0)
            .render(inner, buf);
    }
}
