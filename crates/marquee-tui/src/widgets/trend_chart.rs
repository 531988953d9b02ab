//! Line chart of box office totals per year

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use marquee_core::{format_compact_currency, ChartConfig};

use super::chart_panel::{panel_block, render_empty};
use crate::theme::{palette, styles};

pub struct TrendChart<'a> {
    chart: &'a ChartConfig,
    focused: bool,
    selected: Option<usize>,
}

impl<'a> TrendChart<'a> {
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

    /// `(year, total)` points; labels that are not years are skipped.
    fn points(&self) -> Vec<(f64, f64)> {
        self.chart
            .labels
            .iter()
            .zip(self.chart.values.iter())
            .filter_map(|(label, value)| label.parse::<f64>().ok().map(|year| (year, *value)))
            .collect()
    }
}

/// Axis bounds padded so a single point still spans a visible range.
fn bounds(min: f64, max: f64) -> [f64; 2] {
    if (max - min).abs() < f64::EPSILON {
        [min - 1.0, max + 1.0]
    } else {
        [min, max]
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(self.chart, self.focused, self.selected);

        let points = self.points();
        if points.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            render_empty(inner, buf);
            return;
        }

        let first_year = points[0].0;
        let last_year = points[points.len() - 1].0;
        let peak = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

        let line_color = palette::chart_color(self.chart.border.unwrap_or(self.chart.color_for(0)));
        let mut datasets = vec![Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line_color))
            .data(&points)];

        let highlight: Vec<(f64, f64)> = self
            .selected
            .filter(|_| self.focused)
            .and_then(|i| points.get(i).copied())
            .into_iter()
            .collect();
        if !highlight.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(styles::accent_bold())
                    .data(&highlight),
            );
        }

        let x_axis = Axis::default()
            .style(styles::text_muted())
            .bounds(bounds(first_year, last_year))
            .labels(vec![
                Span::styled(format!("{}", first_year as i64), styles::text_secondary()),
                Span::styled(format!("{}", last_year as i64), styles::text_secondary()),
            ]);
        let y_axis = Axis::default()
            .style(styles::text_muted())
            .bounds([0.0, if peak > 0.0 { peak * 1.1 } else { 1.0 }])
            .labels(vec![
                Span::styled("$0", styles::text_secondary()),
                Span::styled(format_compact_currency(peak), styles::text_secondary()),
            ]);

        Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}
