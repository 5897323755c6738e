use egui::Id;
use egui_kittest::Harness;
use egui_kittest::kittest::{NodeT as _, Queryable as _};
use egui_year_month_picker::{
    Calendar, CalendarEvent, MonthNames, SelectionValue, YearMonth, month_cells, parse_locale,
    year_cells,
};

#[derive(Default)]
struct State {
    open: bool,
    value: Option<SelectionValue>,
    events: Vec<CalendarEvent>,
}

fn calendar_ui(ui: &mut egui::Ui, state: &mut State) {
    let names = MonthNames::default();
    let value = state.value.unwrap_or(SelectionValue::Month(None));
    let event = Calendar::new(Id::new("calendar"), value, &names)
        .open(state.open)
        .current_year(2124)
        .show(ui);
    state.events.extend(event);
}

#[test]
fn closed_calendar_shows_nothing() {
    let harness = Harness::new_ui_state(calendar_ui, State::default());
    for month in ["January", "June", "December"] {
        assert!(harness.query_by_label(month).is_none());
    }
}

#[test]
fn month_cells_report_clicks() {
    let mut harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            ..Default::default()
        },
    );

    harness.get_by_label("June").click();
    harness.run();
    harness.get_by_label("June").click();
    harness.run();

    // No toggling in the calendar itself
    assert_eq!(
        harness.state().events,
        vec![CalendarEvent::Month(6), CalendarEvent::Month(6)]
    );
}

#[test]
fn year_cells_follow_current_year() {
    let harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            value: Some(SelectionValue::Year(Some(2124))),
            ..Default::default()
        },
    );

    assert!(harness.query_by_label("2024").is_some());
    assert!(harness.query_by_label("2223").is_some());
    assert!(harness.query_by_label("2023").is_none());
    assert!(harness.query_by_label("2224").is_none());
}

#[test]
fn year_month_shows_both_grids() {
    let mut harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            value: Some(SelectionValue::YearMonth(YearMonth::new(2124, 2))),
            ..Default::default()
        },
    );

    assert!(harness.query_by_label("February").is_some());
    harness.get_by_label("2100").click_accesskit();
    harness.run();
    assert_eq!(harness.state().events, vec![CalendarEvent::Year(2100)]);
}

#[test]
fn month_labels_use_locale() {
    let german = MonthNames::new(parse_locale("de_DE").expect("German is a known locale"));
    let harness = Harness::new_ui(move |ui| {
        Calendar::new(Id::new("months"), SelectionValue::Month(None), &german).show(ui);
    });
    assert!(harness.query_by_label("März").is_some());
    assert!(harness.query_by_label("March").is_none());
}

fn pressed_labels(harness: &Harness<'_, State>, labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .filter(|label| harness.get_by_label(label).accesskit_node().is_selected() == Some(true))
        .cloned()
        .collect()
}

fn year_labels() -> Vec<String> {
    year_cells(2124).iter().map(|year| year.to_string()).collect()
}

fn month_labels() -> Vec<String> {
    let names = MonthNames::default();
    month_cells()
        .into_iter()
        .filter_map(|month| names.long(month))
        .collect()
}

#[test]
fn only_the_selected_year_is_pressed() {
    let harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            value: Some(SelectionValue::Year(Some(2100))),
            ..Default::default()
        },
    );

    assert_eq!(pressed_labels(&harness, &year_labels()), vec!["2100".to_owned()]);
}

#[test]
fn nothing_pressed_without_selection() {
    let harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            value: Some(SelectionValue::Year(None)),
            ..Default::default()
        },
    );
    assert!(pressed_labels(&harness, &year_labels()).is_empty());

    let harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            value: Some(SelectionValue::Month(None)),
            ..Default::default()
        },
    );
    assert!(pressed_labels(&harness, &month_labels()).is_empty());
}

#[test]
fn year_month_presses_one_cell_per_grid() {
    let harness = Harness::new_ui_state(
        calendar_ui,
        State {
            open: true,
            value: Some(SelectionValue::YearMonth(YearMonth::new(2124, 2))),
            ..Default::default()
        },
    );

    assert_eq!(pressed_labels(&harness, &year_labels()), vec!["2124".to_owned()]);
    assert_eq!(
        pressed_labels(&harness, &month_labels()),
        vec!["February".to_owned()]
    );
}
