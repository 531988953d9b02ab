//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use marquee_core::Catalog;

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::table_view::TableView;
use crate::tooltip::TooltipController;

/// Application lifecycle.
///
/// `Init` until the dataset arrives, `Loaded` once the dashboard is built,
/// `Interactive` once the controls accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Init,
    Loaded,
    Interactive,
    Quitting,
}

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Typing into the search box
    SearchInput,
}

/// One of the four chart panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    TopFilms,
    Directors,
    OverTime,
    Countries,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::TopFilms,
        ChartSlot::Directors,
        ChartSlot::OverTime,
        ChartSlot::Countries,
    ];

    pub fn index(self) -> usize {
        match self {
            ChartSlot::TopFilms => 0,
            ChartSlot::Directors => 1,
            ChartSlot::OverTime => 2,
            ChartSlot::Countries => 3,
        }
    }
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Chart(ChartSlot),
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Table => Focus::Chart(ChartSlot::TopFilms),
            Focus::Chart(ChartSlot::TopFilms) => Focus::Chart(ChartSlot::Directors),
            Focus::Chart(ChartSlot::Directors) => Focus::Chart(ChartSlot::OverTime),
            Focus::Chart(ChartSlot::OverTime) => Focus::Chart(ChartSlot::Countries),
            Focus::Chart(ChartSlot::Countries) => Focus::Table,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Table => Focus::Chart(ChartSlot::Countries),
            Focus::Chart(ChartSlot::TopFilms) => Focus::Table,
            Focus::Chart(ChartSlot::Directors) => Focus::Chart(ChartSlot::TopFilms),
            Focus::Chart(ChartSlot::OverTime) => Focus::Chart(ChartSlot::Directors),
            Focus::Chart(ChartSlot::Countries) => Focus::Chart(ChartSlot::OverTime),
        }
    }
}

/// Screen rectangle recorded by the renderer for pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Where each interactive element was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRegions {
    /// Table rows, excluding the header
    pub table_body: Region,
    pub search_box: Region,
    pub sort_year_button: Region,
    pub sort_box_office_button: Region,
    /// Indexed by [`ChartSlot::index`]
    pub charts: [Region; 4],
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    pub dataset_path: PathBuf,
    pub settings: Settings,

    /// Every loaded film; empty until the load completes
    pub catalog: Catalog,
    /// Stats and charts, built once per load
    pub dashboard: Option<Dashboard>,
    /// Set while the load task is running
    pub loading: bool,
    /// Load failure shown in the status line
    pub load_error: Option<String>,

    pub table: TableView,
    pub tooltip: TooltipController,

    pub focus: Focus,
    /// Selected point per chart, indexed by [`ChartSlot::index`]
    pub chart_cursor: [usize; 4],

    /// Search text when search input began, restored on cancel
    pub search_before_edit: Option<String>,

    pub regions: ScreenRegions,
    /// Last pointer position, used to re-hit-test after scrolling
    pub last_pointer: Option<(u16, u16)>,

    /// One-line feedback, e.g. an activated chart point
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset_path: PathBuf, settings: Settings) -> Self {
        let tooltip = TooltipController::new(settings.tooltip.max_width, settings.tooltip.gap);
        Self {
            phase: AppPhase::Init,
            ui_mode: UiMode::Normal,
            dataset_path,
            settings,
            catalog: Catalog::default(),
            dashboard: None,
            loading: false,
            load_error: None,
            table: TableView::new(),
            tooltip,
            focus: Focus::Table,
            chart_cursor: [0; 4],
            search_before_edit: None,
            regions: ScreenRegions::default(),
            last_pointer: None,
            status_message: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == AppPhase::Interactive
    }

    /// Install a freshly loaded catalog and rebuild everything derived from it.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.dashboard = Some(Dashboard::build(&catalog, self.settings.chart_options()));
        self.catalog = catalog;
        self.table.rebuild(&self.catalog);
        self.tooltip.hide();
        self.chart_cursor = [0; 4];
        self.loading = false;
        self.load_error = None;
        self.phase = AppPhase::Loaded;
    }

    /// Number of points in a chart, 0 before the dashboard exists.
    pub fn chart_len(&self, slot: ChartSlot) -> usize {
        self.dashboard
            .as_ref()
            .map(|d| d.chart(slot).len())
            .unwrap_or(0)
    }

    /// Selected point of a chart, clamped to its length.
    pub fn selected_point(&self, slot: ChartSlot) -> Option<usize> {
        let len = self.chart_len(slot);
        (len > 0).then(|| self.chart_cursor[slot.index()].min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::FilmRecord;

    #[test]
    fn test_focus_cycle_round_trips() {
        let mut focus = Focus::Table;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Table);
        assert_eq!(Focus::Table.prev(), Focus::Chart(ChartSlot::Countries));
        assert_eq!(Focus::Table.next().prev(), Focus::Table);
    }

    #[test]
    fn test_region_contains() {
        let region = Region::new(2, 3, 4, 2);
        assert!(region.contains(2, 3));
        assert!(region.contains(5, 4));
        assert!(!region.contains(6, 4));
        assert!(!region.contains(5, 5));
        assert!(!region.contains(1, 3));
        assert!(!Region::default().contains(0, 0));
    }

    #[test]
    fn test_new_state_is_init() {
        let state = AppState::new(PathBuf::from("films.json"), Settings::default());
        assert_eq!(state.phase, AppPhase::Init);
        assert!(state.dashboard.is_none());
        assert!(state.table.is_empty());
        assert_eq!(state.selected_point(ChartSlot::TopFilms), None);
    }

    #[test]
    fn test_install_catalog_moves_to_loaded() {
        let mut state = AppState::new(PathBuf::from("films.json"), Settings::default());
        state.loading = true;
        state.install_catalog(Catalog::new(vec![
            FilmRecord::new("A", "X").with_box_office(1.0),
            FilmRecord::new("B", "Y").with_box_office(2.0),
        ]));
        assert_eq!(state.phase, AppPhase::Loaded);
        assert!(!state.loading);
        assert_eq!(state.table.len(), 2);
        assert_eq!(state.chart_len(ChartSlot::TopFilms), 2);
        assert_eq!(state.selected_point(ChartSlot::TopFilms), Some(0));
    }
}
