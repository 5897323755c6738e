use chrono::Locale;
use egui::{Button, Frame, Id, Key, Pos2, Rect, Response, RichText, Ui, Widget, pos2};

use crate::calendar::Calendar;
use crate::locale::MonthNames;
use crate::popup::show_popup;
use crate::selection::{Binding, Selection, YearMonth};

/// Vertical distance between the bottom of the button and the top of the popup.
pub const POPUP_OFFSET: f32 = 5.0;

/// Where the popup goes for a button at `anchor`.
#[inline]
pub fn popup_position(anchor: Rect) -> Pos2 {
    pos2(anchor.left(), anchor.bottom() + POPUP_OFFSET)
}

/// Per-button state. Lives in temporary memory: it is never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PickerState {
    pub open: bool,
    pub popup_pos: Pos2,

    /// Where the button was last frame.
    pub anchor: Option<Rect>,

    /// Scroll the selection into view on the next frame.
    pub scroll_pending: bool,
}

impl PickerState {
    fn load(ui: &Ui, id: Id) -> Self {
        ui.data_mut(|data| data.get_temp::<Self>(id))
            .unwrap_or_default()
    }

    fn store(self, ui: &Ui, id: Id) {
        ui.data_mut(|data| data.insert_temp(id, self));
    }

    /// The button was clicked.
    pub fn toggle(&mut self, anchor: Rect) {
        if !anchor.is_finite() || anchor.is_negative() {
            return;
        }
        self.anchor = Some(anchor);
        self.popup_pos = popup_position(anchor);
        self.open = !self.open;
        self.scroll_pending = self.open;
        log::trace!(
            "Picker {} at {:?}",
            if self.open { "opened" } else { "closed" },
            self.popup_pos
        );
    }

    /// Follow the button around, e.g. when the window is resized.
    ///
    /// Returns `true` if the popup moved.
    pub fn track_anchor(&mut self, anchor: Rect) -> bool {
        if self.anchor == Some(anchor) || !anchor.is_finite() || anchor.is_negative() {
            return false;
        }
        self.anchor = Some(anchor);
        let popup_pos = popup_position(anchor);
        let moved = popup_pos != self.popup_pos;
        self.popup_pos = popup_pos;
        moved
    }

    /// A pointer button went down at `pos`.
    ///
    /// Closes the popup unless `pos` is on the button or on the popup.
    pub fn pointer_pressed(&mut self, pos: Pos2, anchor: Rect, popup: Rect) {
        if self.open && !anchor.contains(pos) && !popup.contains(pos) {
            log::trace!("Closing picker: pointer pressed outside at {pos:?}");
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.scroll_pending = false;
    }
}

/// Shows the selected year and/or month, and opens a calendar popup when clicked.
///
/// Clicking a cell in the calendar selects it; clicking the selected cell again clears it.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// let mut year: Option<i32> = None;
/// ui.add(egui_year_month_picker::YearMonthPickerButton::year(&mut year));
/// # });
/// ```
pub struct YearMonthPickerButton<'a> {
    selection: Selection<'a>,
    id_salt: Option<&'a str>,
    popup_id_salt: Option<&'a str>,
    title: Option<String>,
    locale: Locale,
    show_icon: bool,
    current_year: Option<i32>,
    scroll_to_selection: bool,
    popup_max_height: f32,
    popup_frame: Option<Frame>,
    close_on_select: bool,
}

impl<'a> YearMonthPickerButton<'a> {
    pub fn new(selection: Selection<'a>) -> Self {
        Self {
            selection,
            id_salt: None,
            popup_id_salt: None,
            title: None,
            locale: Locale::en_US,
            show_icon: true,
            current_year: None,
            scroll_to_selection: true,
            popup_max_height: 240.0,
            popup_frame: None,
            close_on_select: false,
        }
    }

    /// Pick a year.
    pub fn year(year: &'a mut Option<i32>) -> Self {
        Self::new(Selection::Year(Binding::Mut(year)))
    }

    /// Pick a month (1-12).
    pub fn month(month: &'a mut Option<u32>) -> Self {
        Self::new(Selection::Month(Binding::Mut(month)))
    }

    /// Pick a year and a month.
    pub fn year_month(date: &'a mut YearMonth) -> Self {
        Self::new(Selection::YearMonth(Binding::Mut(date)))
    }

    /// Add id source.
    /// Must be set if multiple picker buttons are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Id source of the popup area. (Default: derived from the button id)
    #[inline]
    pub fn popup_id_salt(mut self, popup_id_salt: &'a str) -> Self {
        self.popup_id_salt = Some(popup_id_salt);
        self
    }

    /// Shown on the button while nothing is selected.
    /// (Default: "Select year", "Select month" or "Select month and year")
    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Language of the month names. (Default: `en_US`)
    ///
    /// Use [`crate::parse_locale`] to turn a tag like `"fr-FR"` into a [`Locale`].
    #[inline]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Show the calendar icon on the button. (Default: true)
    #[inline]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// The year the year calendar is built around:
    /// it starts 100 years earlier and spans 200 years. (Default: this year)
    ///
    /// Clamped to [`crate::CURRENT_YEAR_RANGE`].
    #[inline]
    pub fn current_year(mut self, current_year: i32) -> Self {
        self.current_year = Some(current_year);
        self
    }

    /// Scroll the selected year (or the current year) into view when opening. (Default: true)
    #[inline]
    pub fn scroll_to_selection(mut self, scroll_to_selection: bool) -> Self {
        self.scroll_to_selection = scroll_to_selection;
        self
    }

    /// Maximum height of the scrollable year list. (Default: 240)
    #[inline]
    pub fn popup_max_height(mut self, popup_max_height: f32) -> Self {
        self.popup_max_height = popup_max_height;
        self
    }

    /// Frame around the calendar. (Default: [`Frame::popup`])
    #[inline]
    pub fn popup_frame(mut self, popup_frame: Frame) -> Self {
        self.popup_frame = Some(popup_frame);
        self
    }

    /// Close the popup after a cell was clicked. (Default: false)
    #[inline]
    pub fn close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = close_on_select;
        self
    }
}

impl Widget for YearMonthPickerButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        profiling::function_scope!();

        let Self {
            mut selection,
            id_salt,
            popup_id_salt,
            title,
            locale,
            show_icon,
            current_year,
            scroll_to_selection,
            popup_max_height,
            popup_frame,
            close_on_select,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let mut state = PickerState::load(ui, id);

        let names = MonthNames::new(locale);
        let value = selection.value();
        let fallback = title.as_deref().unwrap_or(value.kind().default_title());
        let title = value.title(&names, fallback);

        let mut text = if show_icon {
            RichText::new(format!("{title} 📆"))
        } else {
            RichText::new(title)
        };
        let visuals = ui.visuals().widgets.open;
        if state.open {
            text = text.color(visuals.text_color());
        }
        let mut button = Button::new(text);
        if state.open {
            button = button.fill(visuals.weak_bg_fill).stroke(visuals.bg_stroke);
        }
        let mut button_response = ui.add(button);
        let anchor = button_response.rect;

        if button_response.clicked() {
            state.toggle(anchor);
        } else if state.track_anchor(anchor) {
            log::trace!("Picker button moved, popup now at {:?}", state.popup_pos);
        }

        if state.open {
            let popup_id = popup_id_salt.map_or_else(|| id.with("popup"), Id::new);

            let mut calendar = Calendar::new(popup_id, value, &names)
                .scroll_to_selection(scroll_to_selection && state.scroll_pending)
                .max_height(popup_max_height);
            if let Some(current_year) = current_year {
                calendar = calendar.current_year(current_year);
            }

            let popup_response =
                show_popup(ui.ctx(), popup_id, state.popup_pos, popup_frame, |ui| {
                    calendar.show(ui)
                });
            state.scroll_pending = false;

            if let Some(event) = popup_response.inner {
                if selection.apply(event) {
                    button_response.mark_changed();
                }
                if close_on_select {
                    state.close();
                }
            }

            let pressed_at = ui.input(|i| {
                if i.pointer.any_pressed() {
                    i.pointer.press_origin()
                } else {
                    None
                }
            });
            if let Some(pos) = pressed_at {
                state.pointer_pressed(pos, anchor, popup_response.response.rect);
            }

            if ui.input(|i| i.key_pressed(Key::Escape)) {
                state.close();
            }
        }

        state.store(ui, id);
        button_response
    }
}
