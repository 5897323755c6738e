//! The values a picker selects, and the rules for changing them.

use crate::locale::MonthNames;

/// Which calendar a picker shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PickerKind {
    /// Pick a bare year.
    Year,

    /// Pick a bare month (1-12).
    Month,

    /// Pick a year and a month, independently of each other.
    YearMonth,
}

impl PickerKind {
    /// Title shown when nothing is selected and no title was given.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Year => "Select year",
            Self::Month => "Select month",
            Self::YearMonth => "Select month and year",
        }
    }
}

/// A year and a month which can each be unset.
///
/// `month` is in `1..=12`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearMonth {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl YearMonth {
    pub const NONE: Self = Self {
        year: None,
        month: None,
    };

    #[inline]
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
        }
    }

    /// Clicking the selected year clears both fields,
    /// clicking any other year replaces the year and keeps the month.
    #[must_use]
    pub fn toggle_year(self, clicked: i32) -> Self {
        if self.year == Some(clicked) {
            Self::NONE
        } else {
            Self {
                year: Some(clicked),
                ..self
            }
        }
    }

    /// Clicking the selected month clears the month only.
    #[must_use]
    pub fn toggle_month(self, clicked: u32) -> Self {
        Self {
            month: toggle(self.month, clicked),
            ..self
        }
    }
}

/// Clicking the selected value clears it, clicking anything else selects it.
pub fn toggle<T: PartialEq>(current: Option<T>, clicked: T) -> Option<T> {
    if current.as_ref() == Some(&clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// A cell click reported by the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarEvent {
    Year(i32),
    Month(u32),
}

/// A copy of what is currently selected, used for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SelectionValue {
    Year(Option<i32>),
    Month(Option<u32>),
    YearMonth(YearMonth),
}

impl SelectionValue {
    pub fn kind(&self) -> PickerKind {
        match self {
            Self::Year(_) => PickerKind::Year,
            Self::Month(_) => PickerKind::Month,
            Self::YearMonth(_) => PickerKind::YearMonth,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match *self {
            Self::Year(year) => year,
            Self::Month(_) => None,
            Self::YearMonth(date) => date.year,
        }
    }

    pub fn month(&self) -> Option<u32> {
        match *self {
            Self::Year(_) => None,
            Self::Month(month) => month,
            Self::YearMonth(date) => date.month,
        }
    }

    /// The text of the picker button.
    ///
    /// * Year: `"2031"`
    /// * Month: `"March"` (in the language of `names`)
    /// * Year and month: `"March, 2031"`, only when both are set
    ///
    /// Otherwise `fallback`.
    pub fn title(&self, names: &MonthNames, fallback: &str) -> String {
        let title = match *self {
            Self::Year(year) => year.map(|year| year.to_string()),
            Self::Month(month) => month.and_then(|month| names.long(month)),
            Self::YearMonth(YearMonth {
                year: Some(year),
                month: Some(month),
            }) => names.long(month).map(|month| format!("{month}, {year}")),
            Self::YearMonth(_) => None,
        };
        title.unwrap_or_else(|| fallback.to_owned())
    }
}

/// Access to a value owned by the host application.
///
/// A [`Binding::ReadOnly`] value is displayed, but clicks on the calendar are ignored.
#[derive(Debug)]
pub enum Binding<'a, T> {
    ReadOnly(T),
    Mut(&'a mut T),
}

impl<T: Copy> Binding<'_, T> {
    #[inline]
    pub fn get(&self) -> T {
        match self {
            Self::ReadOnly(value) => *value,
            Self::Mut(value) => **value,
        }
    }

    /// Returns `true` if the value changed.
    pub fn update(&mut self, f: impl FnOnce(T) -> T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::ReadOnly(_) => {
                log::trace!("Ignoring selection on a read-only picker");
                false
            }
            Self::Mut(value) => {
                let new_value = f(**value);
                let changed = new_value != **value;
                **value = new_value;
                changed
            }
        }
    }
}

/// The host-owned selection a picker reads and writes.
///
/// The variant decides which calendar is shown.
#[derive(Debug)]
pub enum Selection<'a> {
    Year(Binding<'a, Option<i32>>),
    Month(Binding<'a, Option<u32>>),
    YearMonth(Binding<'a, YearMonth>),
}

impl Selection<'_> {
    #[inline]
    pub fn kind(&self) -> PickerKind {
        self.value().kind()
    }

    pub fn value(&self) -> SelectionValue {
        match self {
            Self::Year(year) => SelectionValue::Year(year.get()),
            Self::Month(month) => SelectionValue::Month(month.get()),
            Self::YearMonth(date) => SelectionValue::YearMonth(date.get()),
        }
    }

    /// Apply a cell click with toggle semantics.
    ///
    /// Returns `true` if the selection changed.
    pub fn apply(&mut self, event: CalendarEvent) -> bool {
        match (self, event) {
            (Self::Year(year), CalendarEvent::Year(clicked)) => {
                year.update(|year| toggle(year, clicked))
            }
            (Self::Month(month), CalendarEvent::Month(clicked)) => {
                month.update(|month| toggle(month, clicked))
            }
            (Self::YearMonth(date), CalendarEvent::Year(clicked)) => {
                date.update(|date| date.toggle_year(clicked))
            }
            (Self::YearMonth(date), CalendarEvent::Month(clicked)) => {
                date.update(|date| date.toggle_month(clicked))
            }
            (selection, event) => {
                log::debug!("{event:?} does not apply to a {:?} picker", selection.kind());
                false
            }
        }
    }
}
