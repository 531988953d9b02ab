//! Header bar widget
//!
//! App title on the left, dataset name and load status on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use marquee_app::AppPhase;

use crate::theme::styles;

/// Load status shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

impl LoadStatus {
    pub fn from_state(phase: AppPhase, loading: bool, failed: bool) -> Self {
        if failed {
            LoadStatus::Failed
        } else if loading || phase == AppPhase::Init {
            LoadStatus::Loading
        } else {
            LoadStatus::Ready
        }
    }

    fn indicator(&self) -> (&'static str, Style) {
        match self {
            LoadStatus::Loading => ("○ Loading", styles::status_yellow()),
            LoadStatus::Ready => ("● Ready", styles::status_green()),
            LoadStatus::Failed => ("✗ Load failed", styles::status_red()),
        }
    }
}

/// Main header showing the app title and dataset
pub struct MainHeader<'a> {
    dataset_name: &'a str,
    status: LoadStatus,
}

impl<'a> MainHeader<'a> {
    pub fn new(dataset_name: &'a str, status: LoadStatus) -> Self {
        Self {
            dataset_name,
            status,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("★ Marquee", styles::accent_bold()),
            Span::styled("  Box Office Dashboard", styles::text_secondary()),
        ]);
        Paragraph::new(title).render(inner, buf);

        let (indicator, indicator_style) = self.status.indicator();
        let right = Line::from(vec![
            Span::styled(self.dataset_name, styles::text_muted()),
            Span::raw("  "),
            Span::styled(indicator, indicator_style),
        ]);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
