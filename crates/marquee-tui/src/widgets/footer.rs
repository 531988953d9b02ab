//! Footer line: key hints, or the current status when there is one
//!
//! Priority: load error, loading, status message, key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use marquee_app::{AppState, Focus, UiMode};

use crate::theme::styles;

const NORMAL_HINTS: &[(&str, &str)] = &[
    ("/", "search"),
    ("y", "year"),
    ("b", "box office"),
    ("n", "unsorted"),
    ("Tab", "focus"),
    ("q", "quit"),
];

const TABLE_HINTS: &[(&str, &str)] = &[("j/k", "scroll"), ("g/G", "top/bottom")];

const CHART_HINTS: &[(&str, &str)] = &[("←/→", "select"), ("Enter", "details")];

const SEARCH_HINTS: &[(&str, &str)] = &[
    ("Enter", "apply"),
    ("Esc", "cancel"),
    ("Ctrl+U", "clear"),
];

/// Footer widget showing key hints and status
pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(pairs: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, (key, label)) in pairs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", label), styles::text_secondary()));
        }
        spans
    }

    fn line(&self) -> Line<'static> {
        let state = self.state;
        if let Some(error) = &state.load_error {
            return Line::from(vec![
                Span::styled(format!("✗ {}", error), styles::status_red()),
                Span::styled("  ", styles::text_muted()),
                Span::styled("r", styles::keybinding()),
                Span::styled(" retry · ", styles::text_secondary()),
                Span::styled("q", styles::keybinding()),
                Span::styled(" quit", styles::text_secondary()),
            ]);
        }
        if state.loading {
            let name = state.dataset_path.display().to_string();
            return Line::styled(format!("Loading {}…", name), styles::status_yellow());
        }
        if state.ui_mode == UiMode::SearchInput {
            return Line::from(Self::hints(SEARCH_HINTS));
        }
        if let Some(status) = &state.status_message {
            return Line::styled(status.clone(), styles::accent());
        }

        let mut pairs: Vec<(&'static str, &'static str)> = NORMAL_HINTS.to_vec();
        match state.focus {
            Focus::Table => pairs.extend_from_slice(TABLE_HINTS),
            Focus::Chart(_) => pairs.extend_from_slice(CHART_HINTS),
        }
        Line::from(Self::hints(&pairs))
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
