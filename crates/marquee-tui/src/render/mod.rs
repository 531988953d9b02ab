//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use marquee_app::{AppState, ChartSlot, Dashboard, Focus, Region, ScreenRegions, UiMode};
use marquee_core::Catalog;

use crate::layout::{self, ScreenAreas};
use crate::theme::{palette, styles};
use crate::widgets;

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Record where the interactive elements land so pointer events can be
/// hit-tested against this frame, and size the table viewport.
fn record_regions(state: &mut AppState, areas: &ScreenAreas) {
    let body = widgets::body_area(areas.table);
    let [search, year, box_office] = widgets::control_areas(areas.controls);
    state.regions = ScreenRegions {
        table_body: region(body),
        search_box: region(search),
        sort_year_button: region(year),
        sort_box_office_button: region(box_office),
        charts: areas.charts.map(region),
    };
    state.table.set_visible_rows(usize::from(body.height));
}

fn render_chart(
    frame: &mut Frame,
    state: &AppState,
    dashboard: &Dashboard,
    slot: ChartSlot,
    area: Rect,
) {
    let chart = dashboard.chart(slot);
    let focused = state.focus == Focus::Chart(slot);
    let selected = state.selected_point(slot);
    match slot {
        ChartSlot::TopFilms | ChartSlot::Directors => frame.render_widget(
            widgets::RankedBars::new(chart)
                .focused(focused)
                .selected(selected),
            area,
        ),
        ChartSlot::OverTime => frame.render_widget(
            widgets::TrendChart::new(chart)
                .focused(focused)
                .selected(selected),
            area,
        ),
        ChartSlot::Countries => frame.render_widget(
            widgets::ShareChart::new(chart)
                .focused(focused)
                .selected(selected),
            area,
        ),
    }
}

/// Draw the hovered row's tooltip on top of everything else.
fn render_tooltip(frame: &mut Frame, state: &AppState) {
    let (Some(content), Some(placement)) = (state.tooltip.content(), state.tooltip.placement())
    else {
        return;
    };
    let overlay = widgets::TooltipOverlay::new(content, state.tooltip.overlay_width());
    let Some(rect) = widgets::overlay_rect(
        placement,
        state.table.offset,
        state.tooltip.overlay_width(),
        overlay.height(),
        frame.area(),
    ) else {
        return;
    };
    widgets::render_shadow(frame.buffer_mut(), rect);
    frame.render_widget(overlay, rect);
}

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, records the screen regions used for pointer
/// hit-testing and the table viewport height.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let show_footer = state.settings.ui.show_help
        || state.load_error.is_some()
        || state.status_message.is_some();
    let areas = layout::create(area, show_footer);
    record_regions(state, &areas);
    let state: &AppState = state;

    let dataset_name = state
        .dataset_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| state.dataset_path.display().to_string());
    let status = widgets::LoadStatus::from_state(
        state.phase,
        state.loading,
        state.load_error.is_some(),
    );
    frame.render_widget(widgets::MainHeader::new(&dataset_name, status), areas.header);

    // Before the first load completes everything renders empty
    let empty;
    let dashboard = match &state.dashboard {
        Some(dashboard) => dashboard,
        None => {
            empty = Dashboard::build(&Catalog::default(), state.settings.chart_options());
            &empty
        }
    };

    frame.render_widget(widgets::StatBar::new(&dashboard.summary), areas.stats);
    for slot in ChartSlot::ALL {
        render_chart(frame, state, dashboard, slot, areas.charts[slot.index()]);
    }

    frame.render_widget(
        widgets::Controls::new(
            state.table.search(),
            state.ui_mode == UiMode::SearchInput,
            state.table.sort(),
            state.table.len(),
        ),
        areas.controls,
    );

    frame.render_widget(
        widgets::FilmTable::new(&state.table).focused(state.focus == Focus::Table),
        areas.table,
    );
    if state.table.is_empty() && !state.table.search().is_empty() {
        let body = widgets::body_area(areas.table);
        frame.render_widget(
            Paragraph::new("No matching films")
                .style(styles::text_muted())
                .alignment(Alignment::Center),
            body,
        );
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::Footer::new(state), footer);
    }

    render_tooltip(frame, state);
}
