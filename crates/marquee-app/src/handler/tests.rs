//! Tests for handler module

use std::path::PathBuf;

use super::*;
use crate::config::Settings;
use crate::input::{InputKey, PointerEvent, PointerKind};
use crate::message::Message;
use crate::state::{AppPhase, AppState, ChartSlot, Focus, Region, UiMode};
use crate::table_view::SortOrder;
use marquee_core::{Catalog, FilmRecord};

fn films() -> Vec<FilmRecord> {
    vec![
        FilmRecord::new("Spiderman", "Sam Raimi")
            .with_year(2002)
            .with_box_office(821_708_551.0)
            .with_country("USA")
            .with_insight("Web-slinging origin story"),
        FilmRecord::new("Batman", "Tim Burton")
            .with_year(1989)
            .with_box_office(411_348_924.0)
            .with_country("USA"),
        FilmRecord::new("Inception", "Christopher Nolan")
            .with_year(2010)
            .with_box_office(836_836_967.0)
            .with_country("UK")
            .with_insight("Dreams within dreams"),
    ]
}

fn new_state() -> AppState {
    AppState::new(PathBuf::from("films.json"), Settings::default())
}

/// State with the catalog loaded, controls ready and a table body laid out
/// at rows 10..20, columns 0..80.
fn interactive_state() -> AppState {
    let mut state = new_state();
    process(&mut state, Message::DatasetLoaded {
        catalog: Catalog::new(films()),
    });
    state.regions.table_body = Region::new(0, 10, 80, 10);
    state.table.set_visible_rows(10);
    state
}

/// Run a message and every follow-up message, like the event loop does.
fn process(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn titles(state: &AppState) -> Vec<&str> {
    state.table.rows().iter().map(|r| r.title.as_str()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = new_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_load_dataset_requests_action() {
    let mut state = new_state();
    let actions = process(&mut state, Message::LoadDataset);
    assert_eq!(
        actions,
        vec![UpdateAction::LoadDataset {
            path: PathBuf::from("films.json")
        }]
    );
    assert!(state.loading);
}

#[test]
fn test_load_dataset_ignored_while_loading() {
    let mut state = new_state();
    process(&mut state, Message::LoadDataset);
    assert!(process(&mut state, Message::LoadDataset).is_empty());
}

#[test]
fn test_dataset_loaded_reaches_interactive() {
    let state = interactive_state();
    assert_eq!(state.phase, AppPhase::Interactive);
    assert_eq!(state.table.len(), 3);
    let dashboard = state.dashboard.as_ref().unwrap();
    assert_eq!(dashboard.summary.count, 3);
    assert_eq!(dashboard.summary.max_box_office, 836_836_967.0);
}

#[test]
fn test_dataset_loaded_stops_at_loaded_before_controls_ready() {
    let mut state = new_state();
    let result = update(
        &mut state,
        Message::DatasetLoaded {
            catalog: Catalog::new(films()),
        },
    );
    assert_eq!(state.phase, AppPhase::Loaded);
    assert!(matches!(result.message, Some(Message::ControlsReady)));
}

#[test]
fn test_load_failure_keeps_dashboard_empty() {
    let mut state = new_state();
    process(&mut state, Message::LoadDataset);
    process(
        &mut state,
        Message::DatasetLoadFailed {
            error: "Dataset not found: films.json".to_string(),
        },
    );
    assert_eq!(state.phase, AppPhase::Init);
    assert!(state.dashboard.is_none());
    assert!(!state.loading);
    assert!(state.load_error.is_some());
}

#[test]
fn test_input_ignored_before_interactive() {
    let mut state = new_state();
    state.catalog = Catalog::new(films());
    process(&mut state, Message::SortTable(SortOrder::ByYear));
    process(&mut state, Message::StartSearch);
    process(&mut state, Message::FocusNext);
    assert_eq!(state.table.sort(), SortOrder::None);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.focus, Focus::Table);
}

#[test]
fn test_keys_before_interactive_only_quit() {
    let state = new_state();
    assert!(handle_key(&state, InputKey::Char('y')).is_none());
    assert!(handle_key(&state, InputKey::Char('/')).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_r_retries_after_failed_load() {
    let mut state = new_state();
    assert!(handle_key(&state, InputKey::Char('r')).is_none());
    state.load_error = Some("bad json".to_string());
    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::LoadDataset)
    ));
}

#[test]
fn test_r_does_not_reload_once_interactive() {
    let mut state = interactive_state();
    assert!(handle_key(&state, InputKey::Char('r')).is_none());
    let actions = process(&mut state, Message::Key(InputKey::Char('r')));
    assert!(actions.is_empty());
    assert_eq!(state.table.len(), 3);
    assert!(state.is_interactive());
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    let state = interactive_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    assert!(matches!(handle_key(&state, InputKey::Esc), Some(Message::Quit)));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_sort_keys() {
    let state = interactive_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('y')),
        Some(Message::SortTable(SortOrder::ByYear))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('b')),
        Some(Message::SortTable(SortOrder::ByBoxOffice))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('n')),
        Some(Message::SortTable(SortOrder::None))
    ));
}

#[test]
fn test_arrow_keys_depend_on_focus() {
    let mut state = interactive_state();
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::ScrollDown)
    ));
    state.focus = Focus::Chart(ChartSlot::Directors);
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::SelectNextPoint)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ActivatePoint)
    ));
}

#[test]
fn test_search_mode_keys() {
    let mut state = interactive_state();
    state.ui_mode = UiMode::SearchInput;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::SearchInput('q'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CancelSearch)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SubmitSearch)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Search and sort
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_typing_search_filters_live() {
    let mut state = interactive_state();
    process(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(state.ui_mode, UiMode::SearchInput);

    for c in "man".chars() {
        process(&mut state, Message::Key(InputKey::Char(c)));
    }
    assert_eq!(titles(&state), vec!["Spiderman", "Batman"]);

    process(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.table.search(), "man");
}

#[test]
fn test_cancel_search_restores_previous_term() {
    let mut state = interactive_state();
    process(&mut state, Message::StartSearch);
    process(&mut state, Message::SearchInput('b'));
    process(&mut state, Message::SubmitSearch);

    process(&mut state, Message::StartSearch);
    process(&mut state, Message::SearchInput('x'));
    assert!(state.table.is_empty());
    process(&mut state, Message::CancelSearch);

    assert_eq!(state.table.search(), "b");
    assert_eq!(titles(&state), vec!["Batman"]);
}

#[test]
fn test_search_clear_shows_everything() {
    let mut state = interactive_state();
    process(&mut state, Message::StartSearch);
    process(&mut state, Message::SearchInput('z'));
    process(&mut state, Message::SearchClear);
    assert_eq!(state.table.len(), 3);
}

#[test]
fn test_sort_composes_with_search() {
    let mut state = interactive_state();
    process(&mut state, Message::StartSearch);
    for c in "man".chars() {
        process(&mut state, Message::SearchInput(c));
    }
    process(&mut state, Message::SubmitSearch);
    process(&mut state, Message::SortTable(SortOrder::ByYear));
    assert_eq!(titles(&state), vec!["Batman", "Spiderman"]);

    process(&mut state, Message::SortTable(SortOrder::None));
    assert_eq!(titles(&state), vec!["Spiderman", "Batman"]);
}

#[test]
fn test_sort_does_not_touch_dashboard() {
    let mut state = interactive_state();
    let before = state.dashboard.clone();
    process(&mut state, Message::SortTable(SortOrder::ByBoxOffice));
    process(&mut state, Message::StartSearch);
    process(&mut state, Message::SearchInput('b'));
    assert_eq!(state.dashboard, before);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pointer and tooltip
// ─────────────────────────────────────────────────────────────────────────────

fn pointer(kind: PointerKind, column: u16, row: u16) -> Message {
    Message::Pointer(PointerEvent::new(kind, column, row))
}

#[test]
fn test_hover_row_with_insight_shows_tooltip() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    assert_eq!(state.table.hovered, Some(0));
    assert!(state.tooltip.is_visible());
    assert_eq!(state.tooltip.bound_row(), Some(0));

    // Centered below the row: 0 + 80/2 - 44/2, row 10 + height 1
    let placement = state.tooltip.placement().unwrap();
    assert_eq!(placement.left, 18);
    assert_eq!(placement.top, 11);
}

#[test]
fn test_hover_row_without_insight_hides_tooltip() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    process(&mut state, pointer(PointerKind::Moved, 5, 11));
    assert_eq!(state.table.hovered, Some(1));
    assert!(!state.tooltip.is_visible());
}

#[test]
fn test_moving_to_next_insight_row_rebinds() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    process(&mut state, pointer(PointerKind::Moved, 5, 12));
    assert_eq!(state.tooltip.bound_row(), Some(2));
}

#[test]
fn test_leaving_table_hides_tooltip() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    process(&mut state, pointer(PointerKind::Moved, 5, 2));
    assert_eq!(state.table.hovered, None);
    assert!(!state.tooltip.is_visible());
}

#[test]
fn test_pointer_over_overlay_targets_row_beneath() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    // The overlay sits at row 11; the row there is Batman, without insight
    process(&mut state, pointer(PointerKind::Moved, 30, 11));
    assert_eq!(state.table.hovered, Some(1));
    assert!(!state.tooltip.is_visible());
}

#[test]
fn test_hover_below_last_row_is_nothing() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 15));
    assert_eq!(state.table.hovered, None);
}

#[test]
fn test_search_hides_tooltip() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    assert!(state.tooltip.is_visible());
    process(&mut state, Message::StartSearch);
    process(&mut state, Message::SearchInput('i'));
    assert!(!state.tooltip.is_visible());
    assert_eq!(state.table.hovered, None);
}

#[test]
fn test_sort_hides_tooltip() {
    let mut state = interactive_state();
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    process(&mut state, Message::SortTable(SortOrder::ByYear));
    assert!(!state.tooltip.is_visible());
}

#[test]
fn test_wheel_scroll_rehovers() {
    let mut state = interactive_state();
    state.table.set_visible_rows(1);
    state.regions.table_body = Region::new(0, 10, 80, 1);
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    assert_eq!(state.table.hovered, Some(0));

    process(&mut state, pointer(PointerKind::ScrollDown, 5, 10));
    assert_eq!(state.table.offset, 2);
    assert_eq!(state.table.hovered, Some(2));
    assert_eq!(state.tooltip.bound_row(), Some(2));
}

#[test]
fn test_keyboard_scroll_rehovers_under_pointer() {
    let mut state = interactive_state();
    state.table.set_visible_rows(1);
    state.regions.table_body = Region::new(0, 10, 80, 1);
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    assert_eq!(state.tooltip.bound_row(), Some(0));

    // Batman scrolls under the pointer and has no insight
    process(&mut state, Message::ScrollDown);
    assert_eq!(state.table.offset, 1);
    assert_eq!(state.table.hovered, Some(1));
    assert!(!state.tooltip.is_visible());

    process(&mut state, Message::ScrollDown);
    assert_eq!(state.table.hovered, Some(2));
    assert_eq!(state.tooltip.bound_row(), Some(2));
}

#[test]
fn test_keyboard_scroll_without_pointer_hovers_nothing() {
    let mut state = interactive_state();
    state.table.set_visible_rows(1);
    process(&mut state, Message::ScrollDown);
    assert_eq!(state.table.offset, 1);
    assert_eq!(state.table.hovered, None);
    assert!(!state.tooltip.is_visible());
}

#[test]
fn test_pointer_ignored_before_interactive() {
    let mut state = new_state();
    state.regions.table_body = Region::new(0, 10, 80, 10);
    process(&mut state, pointer(PointerKind::Moved, 5, 10));
    assert!(state.last_pointer.is_none());
}

#[test]
fn test_click_controls() {
    let mut state = interactive_state();
    state.regions.search_box = Region::new(0, 5, 20, 1);
    state.regions.sort_year_button = Region::new(22, 5, 10, 1);
    state.regions.sort_box_office_button = Region::new(34, 5, 10, 1);

    process(&mut state, pointer(PointerKind::Down, 23, 5));
    assert_eq!(state.table.sort(), SortOrder::ByYear);

    process(&mut state, pointer(PointerKind::Down, 40, 5));
    assert_eq!(state.table.sort(), SortOrder::ByBoxOffice);

    process(&mut state, pointer(PointerKind::Down, 3, 5));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
}

#[test]
fn test_click_chart_focuses_it() {
    let mut state = interactive_state();
    state.regions.charts[ChartSlot::OverTime.index()] = Region::new(40, 0, 40, 5);
    process(&mut state, pointer(PointerKind::Down, 50, 2));
    assert_eq!(state.focus, Focus::Chart(ChartSlot::OverTime));
    process(&mut state, pointer(PointerKind::Down, 5, 12));
    assert_eq!(state.focus, Focus::Table);
}

// ─────────────────────────────────────────────────────────────────────────────
// Charts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_focus_cycles_through_charts() {
    let mut state = interactive_state();
    process(&mut state, Message::FocusNext);
    assert_eq!(state.focus, Focus::Chart(ChartSlot::TopFilms));
    process(&mut state, Message::FocusPrev);
    process(&mut state, Message::FocusPrev);
    assert_eq!(state.focus, Focus::Chart(ChartSlot::Countries));
}

#[test]
fn test_point_selection_is_clamped() {
    let mut state = interactive_state();
    state.focus = Focus::Chart(ChartSlot::TopFilms);
    for _ in 0..10 {
        process(&mut state, Message::SelectNextPoint);
    }
    assert_eq!(state.selected_point(ChartSlot::TopFilms), Some(2));
    for _ in 0..10 {
        process(&mut state, Message::SelectPrevPoint);
    }
    assert_eq!(state.selected_point(ChartSlot::TopFilms), Some(0));
}

#[test]
fn test_activate_top_film_reports_insight() {
    let mut state = interactive_state();
    state.focus = Focus::Chart(ChartSlot::TopFilms);
    process(&mut state, Message::ActivatePoint);
    // Inception grossed the most
    assert_eq!(
        state.status_message.as_deref(),
        Some("Inception: Dreams within dreams")
    );
}

#[test]
fn test_activate_country_reports_count() {
    let mut state = interactive_state();
    state.focus = Focus::Chart(ChartSlot::Countries);
    process(&mut state, Message::ActivatePoint);
    assert_eq!(state.status_message.as_deref(), Some("USA: 2 film(s)"));
}

#[test]
fn test_activate_director_reports_total() {
    let mut state = interactive_state();
    state.focus = Focus::Chart(ChartSlot::Directors);
    process(&mut state, Message::ActivatePoint);
    assert_eq!(
        state.status_message.as_deref(),
        Some("Christopher Nolan: Total Box Office: $836,836,967")
    );
}

#[test]
fn test_activate_with_table_focus_does_nothing() {
    let mut state = interactive_state();
    process(&mut state, Message::ActivatePoint);
    assert!(state.status_message.is_none());
}
