//! Year, month and year+month pickers for [`egui`](https://github.com/emilk/egui).
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_year_month_picker::{YearMonth, YearMonthPickerButton};
//!
//! let mut date = YearMonth::default();
//! if ui.add(YearMonthPickerButton::year_month(&mut date)).changed() {
//!     // The user picked something.
//! }
//! # });
//! ```
//!
//! The selection is always owned by your application: the widget reads it, and writes it
//! back when a calendar cell is clicked.
//! Clicking the selected cell again clears it.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod button;
mod calendar;
mod grid;
mod locale;
mod popup;
mod selection;

pub use crate::button::{POPUP_OFFSET, YearMonthPickerButton, popup_position};
pub use crate::calendar::{Calendar, this_year};
pub use crate::grid::{
    CELL_SIZE, CURRENT_YEAR_RANGE, CellGrid, MONTH_COLUMNS, YEAR_COLUMNS, YEAR_COUNT,
    YEARS_BEFORE, month_cells, year_cells,
};
pub use crate::locale::{MonthNames, UnknownLocale, parse_locale};
pub use crate::popup::show_popup;
pub use crate::selection::{
    Binding, CalendarEvent, PickerKind, Selection, SelectionValue, YearMonth, toggle,
};

pub use chrono::Locale;
