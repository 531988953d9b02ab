//! Film table state - search filter, sort order, row snapshots and scrolling.
//!
//! Every change to the search term or sort order recomputes the visible rows
//! from the full catalog, never from the previously filtered rows, so
//! narrowing and then widening a search always gets every match back.

use marquee_core::{format_box_office, Catalog, FilmRecord};

use crate::tooltip::TooltipContent;

// ─────────────────────────────────────────────────────────────────────────────
// SortOrder
// ─────────────────────────────────────────────────────────────────────────────

/// Table sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    None,
    /// Oldest first; films without a year sort as year 0
    ByYear,
    /// Highest gross first; films without a gross sort as 0
    ByBoxOffice,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "catalog order",
            SortOrder::ByYear => "release year",
            SortOrder::ByBoxOffice => "box office",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TableRow
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of one film taken when the rows were recomputed.
///
/// Tooltips read from the snapshot only; the catalog is never re-queried
/// for a rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub title: String,
    pub release_year: Option<i32>,
    pub director: String,
    pub box_office: Option<f64>,
    pub country: Option<String>,
    /// Empty when the film has no insight
    pub insight: String,
}

impl TableRow {
    pub fn from_film(film: &FilmRecord) -> Self {
        Self {
            title: film.title.clone(),
            release_year: film.release_year,
            director: film.director.clone(),
            box_office: film.box_office,
            country: film.country.clone(),
            insight: film.insight.clone().unwrap_or_default(),
        }
    }

    /// Year cell text; blank when absent.
    pub fn year_display(&self) -> String {
        self.release_year.map(|y| y.to_string()).unwrap_or_default()
    }

    pub fn box_office_display(&self) -> String {
        format_box_office(self.box_office)
    }

    /// Country cell text; blank when absent.
    pub fn country_display(&self) -> &str {
        self.country.as_deref().unwrap_or("")
    }

    pub fn has_insight(&self) -> bool {
        !self.insight.is_empty()
    }

    /// Tooltip content for this row, `None` when there is no insight.
    pub fn tooltip_content(&self) -> Option<TooltipContent> {
        TooltipContent::for_row(self)
    }
}

/// Films matching `search` (case-insensitive title substring), ordered by `sort`.
pub fn visible_films<'a>(
    films: &'a [FilmRecord],
    search: &str,
    sort: SortOrder,
) -> Vec<&'a FilmRecord> {
    let needle = search.to_lowercase();
    let mut matched: Vec<&FilmRecord> = films
        .iter()
        .filter(|f| needle.is_empty() || f.title.to_lowercase().contains(&needle))
        .collect();

    match sort {
        SortOrder::None => {}
        SortOrder::ByYear => matched.sort_by_key(|f| f.year_or_zero()),
        SortOrder::ByBoxOffice => {
            matched.sort_by(|a, b| b.box_office_or_zero().total_cmp(&a.box_office_or_zero()))
        }
    }
    matched
}

// ─────────────────────────────────────────────────────────────────────────────
// TableView
// ─────────────────────────────────────────────────────────────────────────────

/// Filterable, sortable, scrollable projection of the catalog.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    search: String,
    sort: SortOrder,
    rows: Vec<TableRow>,
    /// First visible row
    pub offset: usize,
    /// Rows that fit in the table body (set during render)
    pub visible_rows: usize,
    /// Row under the pointer, as an index into `rows`
    pub hovered: Option<usize>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Recompute rows from the full catalog with the current search and sort.
    pub fn rebuild(&mut self, catalog: &Catalog) {
        self.rows = visible_films(catalog.films(), &self.search, self.sort)
            .into_iter()
            .map(TableRow::from_film)
            .collect();
        self.hovered = None;
        self.clamp_offset();
    }

    pub fn set_search(&mut self, term: impl Into<String>, catalog: &Catalog) {
        self.search = term.into();
        self.offset = 0;
        self.rebuild(catalog);
    }

    pub fn push_search_char(&mut self, c: char, catalog: &Catalog) {
        self.search.push(c);
        self.offset = 0;
        self.rebuild(catalog);
    }

    pub fn pop_search_char(&mut self, catalog: &Catalog) {
        if self.search.pop().is_some() {
            self.offset = 0;
            self.rebuild(catalog);
        }
    }

    pub fn set_sort(&mut self, sort: SortOrder, catalog: &Catalog) {
        self.sort = sort;
        self.offset = 0;
        self.rebuild(catalog);
    }

    /// Back to catalog order, keeping the search term.
    pub fn clear_sort(&mut self, catalog: &Catalog) {
        self.set_sort(SortOrder::None, catalog);
    }

    /// Rows currently inside the viewport.
    pub fn visible(&self) -> &[TableRow] {
        let start = self.offset.min(self.rows.len());
        let end = (start + self.visible_rows).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Map a line inside the table body to a row index.
    pub fn row_at(&self, body_line: usize) -> Option<usize> {
        if body_line >= self.visible_rows {
            return None;
        }
        let index = self.offset + body_line;
        (index < self.rows.len()).then_some(index)
    }

    fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.visible_rows)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the viewport height, keeping the offset in range.
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows;
        self.clamp_offset();
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_rows.saturating_sub(1).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_rows.saturating_sub(1).max(1);
        self.scroll_down(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            FilmRecord::new("Spiderman", "Sam Raimi")
                .with_year(2002)
                .with_box_office(821_708_551.0),
            FilmRecord::new("Batman", "Tim Burton")
                .with_year(1989)
                .with_box_office(411_348_924.0)
                .with_insight("Launched the modern superhero blockbuster"),
            FilmRecord::new("Inception", "Christopher Nolan")
                .with_year(2010)
                .with_box_office(836_836_967.0),
            FilmRecord::new("Undated", "Someone"),
        ])
    }

    fn titles(view: &TableView) -> Vec<&str> {
        view.rows().iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_filter_man_keeps_original_order() {
        let catalog = catalog();
        let films = visible_films(catalog.films(), "man", SortOrder::None);
        let names: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(names, vec!["Spiderman", "Batman"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = catalog();
        let films = visible_films(catalog.films(), "BAT", SortOrder::None);
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "Batman");
    }

    #[test]
    fn test_search_always_resets_against_full_catalog() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.rebuild(&catalog);
        assert_eq!(view.len(), 4);

        view.set_search("batman", &catalog);
        assert_eq!(titles(&view), vec!["Batman"]);

        // Widening the search brings back rows the narrower search removed
        view.set_search("man", &catalog);
        assert_eq!(titles(&view), vec!["Spiderman", "Batman"]);

        view.set_search("", &catalog);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_backspace_widens_search() {
        let catalog = catalog();
        let mut view = TableView::new();
        for c in "spx".chars() {
            view.push_search_char(c, &catalog);
        }
        assert!(view.is_empty());
        view.pop_search_char(&catalog);
        assert_eq!(titles(&view), vec!["Spiderman"]);
    }

    #[test]
    fn test_sort_by_year_ascending_absent_first() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.set_sort(SortOrder::ByYear, &catalog);
        assert_eq!(
            titles(&view),
            vec!["Undated", "Batman", "Spiderman", "Inception"]
        );
    }

    #[test]
    fn test_sort_by_box_office_descending_absent_last() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.set_sort(SortOrder::ByBoxOffice, &catalog);
        assert_eq!(
            titles(&view),
            vec!["Inception", "Spiderman", "Batman", "Undated"]
        );
    }

    #[test]
    fn test_filter_and_sort_compose() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.set_search("man", &catalog);
        view.set_sort(SortOrder::ByYear, &catalog);
        assert_eq!(titles(&view), vec!["Batman", "Spiderman"]);
    }

    #[test]
    fn test_clear_sort_keeps_search() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.set_search("man", &catalog);
        view.set_sort(SortOrder::ByBoxOffice, &catalog);
        view.clear_sort(&catalog);
        assert_eq!(view.sort(), SortOrder::None);
        assert_eq!(view.search(), "man");
        assert_eq!(titles(&view), vec!["Spiderman", "Batman"]);
    }

    #[test]
    fn test_row_snapshot_fields() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.rebuild(&catalog);
        let undated = view.row(3).unwrap();
        assert_eq!(undated.year_display(), "");
        assert_eq!(undated.box_office_display(), "$0");
        assert_eq!(undated.country_display(), "");
        assert!(!undated.has_insight());
        assert!(undated.tooltip_content().is_none());
        assert!(view.row(1).unwrap().tooltip_content().is_some());
    }

    #[test]
    fn test_empty_catalog_has_no_rows() {
        let mut view = TableView::new();
        view.rebuild(&Catalog::default());
        assert!(view.is_empty());
        assert!(view.visible().is_empty());
        assert_eq!(view.row_at(0), None);
    }

    #[test]
    fn test_scrolling_is_clamped() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.rebuild(&catalog);
        view.set_visible_rows(2);

        view.scroll_down(10);
        assert_eq!(view.offset, 2);
        assert_eq!(view.visible().len(), 2);

        view.scroll_up(10);
        assert_eq!(view.offset, 0);

        view.scroll_to_bottom();
        assert_eq!(view.offset, 2);
        view.scroll_to_top();
        assert_eq!(view.offset, 0);

        view.page_down();
        assert_eq!(view.offset, 1);
    }

    #[test]
    fn test_offset_clamped_when_rows_shrink() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.rebuild(&catalog);
        view.set_visible_rows(1);
        view.scroll_to_bottom();
        assert_eq!(view.offset, 3);

        view.set_search("bat", &catalog);
        assert_eq!(view.offset, 0);
    }

    #[test]
    fn test_row_at_maps_body_lines() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.rebuild(&catalog);
        view.set_visible_rows(3);
        view.scroll_down(1);
        assert_eq!(view.row_at(0), Some(1));
        assert_eq!(view.row_at(2), Some(3));
        assert_eq!(view.row_at(3), None);
    }

    #[test]
    fn test_rebuild_clears_hover() {
        let catalog = catalog();
        let mut view = TableView::new();
        view.rebuild(&catalog);
        view.hovered = Some(1);
        view.set_sort(SortOrder::ByYear, &catalog);
        assert_eq!(view.hovered, None);
    }
}
