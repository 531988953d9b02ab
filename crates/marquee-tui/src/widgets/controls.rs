//! Control row: search box and the two sort buttons

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use marquee_app::SortOrder;

use crate::theme::styles;

/// Split the control row into search box, sort-by-year and sort-by-box-office.
pub fn control_areas(area: Rect) -> [Rect; 3] {
    let chunks = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(24),
    ])
    .spacing(1)
    .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

pub struct Controls<'a> {
    search: &'a str,
    editing: bool,
    sort: SortOrder,
    matches: usize,
}

impl<'a> Controls<'a> {
    pub fn new(search: &'a str, editing: bool, sort: SortOrder, matches: usize) -> Self {
        Self {
            search,
            editing,
            sort,
            matches,
        }
    }

    fn search_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled("/ ", styles::keybinding()),
            Span::styled("Search: ", styles::text_secondary()),
        ];
        if self.search.is_empty() && !self.editing {
            spans.push(Span::styled("title…", styles::text_muted()));
        } else {
            spans.push(Span::styled(self.search, styles::text_primary()));
        }
        if self.editing {
            spans.push(Span::styled("_", styles::accent()));
        }
        if !self.search.is_empty() {
            let style = if self.matches > 0 {
                styles::status_green()
            } else {
                styles::status_red()
            };
            spans.push(Span::styled(format!("  [{} found]", self.matches), style));
        }
        Line::from(spans)
    }

    fn button(key: &'static str, label: &'static str, active: bool) -> Line<'static> {
        let label_style = if active {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(format!("[{}] ", key), styles::keybinding()),
            Span::styled(label, label_style),
        ])
    }
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [search, year, box_office] = control_areas(area);
        Paragraph::new(self.search_line()).render(search, buf);
        Paragraph::new(Self::button(
            "y",
            "Sort by Year",
            self.sort == SortOrder::ByYear,
        ))
        .render(year, buf);
        Paragraph::new(Self::button(
            "b",
            "Sort by Box Office",
            self.sort == SortOrder::ByBoxOffice,
        ))
        .render(box_office, buf);
    }
}
