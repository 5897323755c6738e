use egui::{Align, Button, Id, ScrollArea, Ui, Vec2, WidgetInfo, WidgetType};

/// How many years the year calendar shows.
pub const YEAR_COUNT: i32 = 200;

/// How many years before the current year the year calendar starts.
pub const YEARS_BEFORE: i32 = 100;

pub const YEAR_COLUMNS: usize = 4;
pub const MONTH_COLUMNS: usize = 3;

/// Minimum size of a single cell.
pub const CELL_SIZE: Vec2 = Vec2::new(64.0, 24.0);

/// Range of the current year for which all [`YEAR_COUNT`] years fit in an `i32`.
pub const CURRENT_YEAR_RANGE: std::ops::RangeInclusive<i32> =
    (i32::MIN + YEARS_BEFORE)..=(i32::MAX - (YEAR_COUNT - YEARS_BEFORE) + 1);

/// The years shown for a given current year, in ascending order.
///
/// `current_year` is clamped to [`CURRENT_YEAR_RANGE`].
pub fn year_cells(current_year: i32) -> Vec<i32> {
    let current_year =
        current_year.clamp(*CURRENT_YEAR_RANGE.start(), *CURRENT_YEAR_RANGE.end());
    let first = current_year - YEARS_BEFORE;
    (first..=first + (YEAR_COUNT - 1)).collect()
}

/// `1..=12`
pub fn month_cells() -> Vec<u32> {
    (1..=12).collect()
}

/// A fixed grid of selectable cells.
///
/// Each cell shows `label(value)`, is drawn pressed when `pressed(value)`,
/// and [`Self::show`] returns the value of the cell that was clicked.
pub struct CellGrid<'a, T> {
    id: Id,
    values: Vec<T>,
    columns: usize,
    label: Box<dyn Fn(T) -> String + 'a>,
    pressed: Box<dyn Fn(T) -> bool + 'a>,
    scroll_to: Option<T>,
    max_height: Option<f32>,
}

impl<'a, T: Copy + PartialEq> CellGrid<'a, T> {
    pub fn new(
        id: Id,
        values: Vec<T>,
        label: impl Fn(T) -> String + 'a,
        pressed: impl Fn(T) -> bool + 'a,
    ) -> Self {
        Self {
            id,
            values,
            columns: 1,
            label: Box::new(label),
            pressed: Box::new(pressed),
            scroll_to: None,
            max_height: None,
        }
    }

    /// Cells per row. (Default: 1)
    #[inline]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Scroll this cell into view.
    #[inline]
    pub fn scroll_to(mut self, value: Option<T>) -> Self {
        self.scroll_to = value;
        self
    }

    /// Put the grid in a vertical [`ScrollArea`] of at most this height.
    #[inline]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks(self.columns)
    }

    /// Returns the clicked value, if any.
    pub fn show(self, ui: &mut Ui) -> Option<T> {
        match self.max_height {
            Some(max_height) => ScrollArea::vertical()
                .id_salt(self.id.with("scroll"))
                .max_height(max_height)
                .auto_shrink([true, true])
                .show(ui, |ui| self.show_cells(ui))
                .inner,
            None => self.show_cells(ui),
        }
    }

    fn show_cells(&self, ui: &mut Ui) -> Option<T> {
        let mut clicked = None;
        egui::Grid::new(self.id.with("grid"))
            .num_columns(self.columns)
            .show(ui, |ui| {
                for row in self.rows() {
                    for &value in row {
                        let pressed = (self.pressed)(value);
                        let label = (self.label)(value);
                        let response = ui.add(
                            Button::selectable(pressed, label.as_str()).min_size(CELL_SIZE),
                        );
                        response.widget_info(|| {
                            WidgetInfo::selected(
                                WidgetType::Button,
                                ui.is_enabled(),
                                pressed,
                                &label,
                            )
                        });
                        if self.scroll_to == Some(value) {
                            response.scroll_to_me(Some(Align::Center));
                        }
                        if response.clicked() {
                            clicked = Some(value);
                        }
                    }
                    ui.end_row();
                }
            });
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_start_a_century_back() {
        let years = year_cells(2124);
        assert_eq!(years.len(), 200);
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&2223));
        assert!(years.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    #[test]
    fn extreme_current_years_do_not_overflow() {
        let years = year_cells(i32::MAX);
        assert_eq!(years.len(), 200);
        assert_eq!(years.last(), Some(&i32::MAX));

        let years = year_cells(i32::MIN);
        assert_eq!(years.len(), 200);
        assert_eq!(years.first(), Some(&i32::MIN));
    }

    #[test]
    fn year_rows() {
        let grid = CellGrid::new(
            Id::new("years"),
            year_cells(2000),
            |y| y.to_string(),
            |_| false,
        )
        .columns(YEAR_COLUMNS);
        assert_eq!(grid.rows().count(), 50);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert_eq!(grid.rows().next(), Some(&[1900, 1901, 1902, 1903][..]));
    }

    #[test]
    fn month_rows() {
        let grid = CellGrid::new(
            Id::new("months"),
            month_cells(),
            |m| m.to_string(),
            |_| false,
        )
        .columns(MONTH_COLUMNS);
        assert_eq!(grid.values(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    fn zero_columns_is_one() {
        let grid =
            CellGrid::new(Id::new("x"), vec![1, 2], |v: i32| v.to_string(), |_| false).columns(0);
        assert_eq!(grid.rows().count(), 2);
    }
}
