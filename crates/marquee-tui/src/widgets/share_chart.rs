//! Country distribution: a colored legend with proportional share bars

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use marquee_core::ChartConfig;

use super::chart_panel::{panel_block, render_empty, window_start};
use crate::theme::{palette, styles};

/// Width reserved for the country name
const NAME_WIDTH: usize = 14;

pub struct ShareChart<'a> {
    chart: &'a ChartConfig,
    focused: bool,
    selected: Option<usize>,
}

impl<'a> ShareChart<'a> {
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

/// Share of `value` in `total` as a percentage, 0 when the total is 0.
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

fn pad_name(name: &str) -> String {
    let mut padded: String = name.chars().take(NAME_WIDTH).collect();
    let len = padded.chars().count();
    padded.push_str(&" ".repeat(NAME_WIDTH - len));
    padded
}

impl Widget for ShareChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.chart, self.focused, self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.chart.is_empty() {
            render_empty(inner, buf);
            return;
        }

        let total: f64 = self.chart.values.iter().sum();
        let rows = usize::from(inner.height);
        let start = window_start(self.selected, rows, self.chart.len());
        // "■ " + name + " " + "nnn (100.0%) "
        let bar_space = usize::from(inner.width).saturating_sub(NAME_WIDTH + 17);

        let lines: Vec<Line> = self
            .chart
            .labels
            .iter()
            .zip(self.chart.values.iter())
            .enumerate()
            .skip(start)
            .take(rows)
            .map(|(index, (label, value))| {
                let color = palette::chart_color(self.chart.color_for(index));
                let percent = share_percent(*value, total);
                let bar_len = (bar_space as f64 * percent / 100.0).round() as usize;
                let is_selected = self.focused && self.selected == Some(index);
                let name_style = if is_selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(color)),
                    Span::styled(pad_name(label), name_style),
                    Span::styled(
                        format!(" {:>3} ({:>5.1}%) ", *value as u64, percent),
                        styles::text_secondary(),
                    ),
                    Span::styled("█".repeat(bar_len), Style::default().fg(color)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
