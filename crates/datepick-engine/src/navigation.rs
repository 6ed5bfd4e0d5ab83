//! Grid navigation and day highlighting.
//!
//! [`GridNavigation`] is the (year, month) shown in the grid. It starts from
//! the value under edit but is never written back to it; only a day pick
//! does that. [`Highlight`] holds the grid's selected and hovered days.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::calendar::{check_month, days_in_month};
use crate::error::Result;
use crate::value::DateValue;

/// The navigated year and 0-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridNavigation {
    year: i32,
    month0: u32,
}

impl GridNavigation {
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidMonth`](crate::PickerError::InvalidMonth)
    /// if `month0` is not in `0..=11`.
    pub fn new(year: i32, month0: u32) -> Result<Self> {
        check_month(month0)?;
        Ok(Self { year, month0 })
    }

    /// Start at the year and month of `value`.
    pub fn seed(value: &DateValue) -> Self {
        Self {
            year: value.year(),
            month0: value.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Replace year and month together.
    pub fn navigate_to_month(&mut self, year: i32, month0: u32) -> Result<()> {
        check_month(month0)?;
        trace!(year, month0, "navigate to month");
        self.year = year;
        self.month0 = month0;
        Ok(())
    }

    /// Replace the year, keeping the month.
    pub fn navigate_to_year(&mut self, year: i32) {
        trace!(year, "navigate to year");
        self.year = year;
    }

    /// Day numbers of the navigated month.
    pub fn days(&self) -> Result<Vec<u32>> {
        days_in_month(self.year, self.month0)
    }

    /// Whether the grid is showing the month that contains `date`.
    pub fn shows(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month0 == date.month0()
    }
}

/// Selected and hovered days in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    selected_day: Option<u32>,
    hovered_day: Option<u32>,
}

impl Highlight {
    /// The highlight for a freshly shown month: today's day when the grid
    /// shows today's month, nothing otherwise.
    pub fn for_month(grid: &GridNavigation, today: NaiveDate) -> Self {
        let mut highlight = Self::default();
        highlight.recompute(grid, today);
        highlight
    }

    /// Re-derive the selected day after a navigation change.
    ///
    /// This follows today, not the value under edit: an explicit pick made
    /// earlier in the session is forgotten once the grid moves.
    pub fn recompute(&mut self, grid: &GridNavigation, today: NaiveDate) {
        self.selected_day = grid.shows(today).then(|| today.day());
    }

    pub fn select(&mut self, day: u32) {
        self.selected_day = Some(day);
    }

    pub fn hover(&mut self, day: Option<u32>) {
        self.hovered_day = day;
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn hovered_day(&self) -> Option<u32> {
        self.hovered_day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_seed_from_value() {
        let value = DateValue::new(2025, 0, 9, 8, 0).unwrap();
        let grid = GridNavigation::seed(&value);
        assert_eq!((grid.year(), grid.month0()), (2025, 0));
    }

    #[test]
    fn test_navigate_to_month_replaces_both() {
        let mut grid = GridNavigation::new(2025, 0).unwrap();
        grid.navigate_to_month(2030, 7).unwrap();
        assert_eq!((grid.year(), grid.month0()), (2030, 7));
    }

    #[test]
    fn test_navigate_to_month_rejects_bad_month() {
        let mut grid = GridNavigation::new(2025, 0).unwrap();
        assert_eq!(
            grid.navigate_to_month(2025, 12),
            Err(PickerError::InvalidMonth(12))
        );
        assert_eq!((grid.year(), grid.month0()), (2025, 0));
    }

    #[test]
    fn test_navigate_to_year_keeps_month() {
        let mut grid = GridNavigation::new(2025, 1).unwrap();
        grid.navigate_to_year(2024);
        assert_eq!((grid.year(), grid.month0()), (2024, 1));
        assert_eq!(grid.days().unwrap().len(), 29);
    }

    #[test]
    fn test_highlight_follows_today_in_current_month() {
        let grid = GridNavigation::new(2026, 9).unwrap();
        assert_eq!(Highlight::for_month(&grid, today()).selected_day(), Some(17));
    }

    #[test]
    fn test_highlight_empty_elsewhere() {
        let grid = GridNavigation::new(2025, 9).unwrap();
        assert_eq!(Highlight::for_month(&grid, today()).selected_day(), None);
    }

    #[test]
    fn test_recompute_forgets_explicit_pick() {
        let mut grid = GridNavigation::new(2026, 9).unwrap();
        let mut highlight = Highlight::for_month(&grid, today());
        highlight.select(3);
        assert_eq!(highlight.selected_day(), Some(3));

        grid.navigate_to_month(2026, 10).unwrap();
        highlight.recompute(&grid, today());
        assert_eq!(highlight.selected_day(), None);

        grid.navigate_to_month(2026, 9).unwrap();
        highlight.recompute(&grid, today());
        assert_eq!(highlight.selected_day(), Some(17));
    }

    #[test]
    fn test_recompute_leaves_hover_alone() {
        let grid = GridNavigation::new(2025, 3).unwrap();
        let mut highlight = Highlight::default();
        highlight.hover(Some(12));
        highlight.recompute(&grid, today());
        assert_eq!(highlight.hovered_day(), Some(12));
        highlight.hover(None);
        assert_eq!(highlight.hovered_day(), None);
    }
}
