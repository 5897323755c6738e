use chrono::Datelike as _;
use egui::{Id, Ui};

use crate::grid::{CellGrid, MONTH_COLUMNS, YEAR_COLUMNS, month_cells, year_cells};
use crate::locale::MonthNames;
use crate::selection::{CalendarEvent, SelectionValue};

/// The year according to the local clock.
pub fn this_year() -> i32 {
    chrono::Local::now().year()
}

/// The cell grid(s) for a picker.
///
/// Shows nothing at all while closed.
/// Clicks are reported as [`CalendarEvent`]s; deciding what a click means is up to the caller.
pub struct Calendar<'a> {
    id: Id,
    value: SelectionValue,
    names: &'a MonthNames,
    open: bool,
    current_year: Option<i32>,
    scroll_to_selection: bool,
    max_height: f32,
}

impl<'a> Calendar<'a> {
    pub fn new(id: Id, value: SelectionValue, names: &'a MonthNames) -> Self {
        Self {
            id,
            value,
            names,
            open: true,
            current_year: None,
            scroll_to_selection: false,
            max_height: 240.0,
        }
    }

    /// (Default: true)
    #[inline]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// The year the year grid is centered on. (Default: [`this_year`])
    #[inline]
    pub fn current_year(mut self, current_year: i32) -> Self {
        self.current_year = Some(current_year);
        self
    }

    /// Scroll the selected year, or the current year if none is selected, into view.
    /// (Default: false)
    #[inline]
    pub fn scroll_to_selection(mut self, scroll: bool) -> Self {
        self.scroll_to_selection = scroll;
        self
    }

    /// Height of the scrollable year grid. (Default: 240)
    #[inline]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Option<CalendarEvent> {
        if !self.open {
            return None;
        }

        match self.value {
            SelectionValue::Year(year) => self.year_grid(year).show(ui).map(CalendarEvent::Year),
            SelectionValue::Month(month) => {
                self.month_grid(month).show(ui).map(CalendarEvent::Month)
            }
            SelectionValue::YearMonth(date) => {
                ui.horizontal_top(|ui| {
                    let year = self.year_grid(date.year).show(ui);
                    ui.separator();
                    let month = self.month_grid(date.month).show(ui);
                    year.map(CalendarEvent::Year)
                        .or(month.map(CalendarEvent::Month))
                })
                .inner
            }
        }
    }

    fn year_grid(&self, selected: Option<i32>) -> CellGrid<'static, i32> {
        let current_year = self.current_year.unwrap_or_else(this_year);
        let scroll_to = self
            .scroll_to_selection
            .then(|| selected.unwrap_or(current_year));
        CellGrid::new(
            self.id.with("years"),
            year_cells(current_year),
            |year| year.to_string(),
            move |year| selected == Some(year),
        )
        .columns(YEAR_COLUMNS)
        .scroll_to(scroll_to)
        .max_height(self.max_height)
    }

    fn month_grid(&self, selected: Option<u32>) -> CellGrid<'a, u32> {
        let names = self.names;
        CellGrid::new(
            self.id.with("months"),
            month_cells(),
            move |month| names.long(month).unwrap_or_else(|| month.to_string()),
            move |month| selected == Some(month),
        )
        .columns(MONTH_COLUMNS)
    }
}
