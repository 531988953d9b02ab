//! Film table widget
//!
//! Draws the header and the rows inside the viewport of a [`TableView`].
//! The caller sizes the viewport before rendering; see [`body_area`].

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, Table, Widget},
};

use marquee_app::{TableRow, TableView};

use crate::theme::styles;

const HEADER: [&str; 5] = ["Title", "Year", "Director", "Box Office", "Country"];

const WIDTHS: [Constraint; 5] = [
    Constraint::Fill(3),
    Constraint::Length(6),
    Constraint::Fill(2),
    Constraint::Length(16),
    Constraint::Fill(1),
];

/// Table rows area inside the container: below the border and header line.
pub fn body_area(table_area: Rect) -> Rect {
    let inner = styles::glass_block(false).inner(table_area);
    Rect::new(
        inner.x,
        inner.y.saturating_add(1),
        inner.width,
        inner.height.saturating_sub(1),
    )
}

pub struct FilmTable<'a> {
    view: &'a TableView,
    focused: bool,
}

impl<'a> FilmTable<'a> {
    pub fn new(view: &'a TableView) -> Self {
        Self {
            view,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(record: &TableRow) -> Row<'static> {
        Row::new(vec![
            Cell::from(record.title.clone()),
            Cell::from(record.year_display()),
            Cell::from(record.director.clone()),
            Cell::from(Line::from(record.box_office_display()).right_aligned()),
            Cell::from(record.country_display().to_string()),
        ])
    }

    fn title(&self) -> Line<'static> {
        let mut title = format!(" Films ({}) ", self.view.len());
        if self.view.len() > self.view.visible_rows && self.view.visible_rows > 0 {
            let last = (self.view.offset + self.view.visible_rows).min(self.view.len());
            title = format!(
                " Films ({}) · {}-{} ",
                self.view.len(),
                self.view.offset + 1,
                last
            );
        }
        Line::styled(title, styles::text_secondary())
    }
}

impl Widget for FilmTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(self.title());

        let rows: Vec<Row> = self
            .view
            .visible()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = Self::row(record);
                if self.view.hovered == Some(self.view.offset + i) {
                    row.style(styles::hovered_row())
                } else {
                    row.style(styles::text_primary())
                }
            })
            .collect();

        let header = Row::new(HEADER.to_vec()).style(styles::table_header());

        Table::new(rows, WIDTHS)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use marquee_core::{Catalog, FilmRecord};

    fn view() -> TableView {
        let catalog = Catalog::new(vec![
            FilmRecord::new("Spiderman", "Sam Raimi")
                .with_year(2002)
                .with_box_office(821_708_551.0)
                .with_country("USA"),
            FilmRecord::new("Batman", "Tim Burton").with_year(1989),
        ]);
        let mut view = TableView::new();
        view.rebuild(&catalog);
        view.set_visible_rows(5);
        view
    }

    #[test]
    fn test_table_renders_header_and_rows() {
        let view = view();
        let mut term = TestTerminal::with_size(100, 8);
        term.render_widget(FilmTable::new(&view), Rect::new(0, 0, 100, 8));
        assert!(term.line_contains(1, "Title"));
        assert!(term.line_contains(1, "Box Office"));
        assert!(term.line_contains(2, "Spiderman"));
        assert!(term.line_contains(2, "$821,708,551"));
        assert!(term.line_contains(3, "Batman"));
        // Absent gross renders as $0
        assert!(term.line_contains(3, "$0"));
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let mut view = TableView::new();
        view.rebuild(&Catalog::default());
        let mut term = TestTerminal::with_size(100, 6);
        term.render_widget(FilmTable::new(&view), Rect::new(0, 0, 100, 6));
        assert!(term.line_contains(1, "Title"));
        assert!(term.buffer_contains("Films (0)"));
    }

    #[test]
    fn test_hovered_row_is_highlighted() {
        let mut view = view();
        view.hovered = Some(1);
        let mut term = TestTerminal::with_size(100, 8);
        term.render_widget(FilmTable::new(&view), Rect::new(0, 0, 100, 8));
        let cell = &term.buffer()[(3, 3)];
        assert_eq!(cell.bg, crate::theme::palette::ROW_HOVER_BG);
    }

    #[test]
    fn test_body_area_excludes_border_and_header() {
        let body = body_area(Rect::new(0, 10, 80, 10));
        assert_eq!(body, Rect::new(1, 12, 78, 7));
    }
}
