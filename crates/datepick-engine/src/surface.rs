//! Visibility of the calendar surface.
//!
//! An open surface carries a [`Session`]: the grid navigation, highlight and
//! editing phase that live only as long as the popup is shown. Closing drops
//! the session; nothing in it is ever written back to the value.

use chrono::NaiveDate;

use crate::navigation::{GridNavigation, Highlight};
use crate::value::DateValue;

/// Where an open session is in the pick flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Grid visible, no day picked yet.
    Browsing,
    /// A day was picked and the time sub-picker is being used.
    TimeEditing,
}

/// Per-open state of the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub grid: GridNavigation,
    pub highlight: Highlight,
    pub phase: Phase,
}

impl Session {
    fn start(value: &DateValue, today: NaiveDate) -> Self {
        let grid = GridNavigation::seed(value);
        Self {
            highlight: Highlight::for_month(&grid, today),
            grid,
            phase: Phase::Browsing,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Surface {
    #[default]
    Closed,
    Open(Session),
}

impl Surface {
    /// Open (or reopen) the surface on the month of `value`.
    pub fn open(&mut self, value: &DateValue, today: NaiveDate) {
        *self = Surface::Open(Session::start(value, today));
    }

    pub fn close(&mut self) {
        *self = Surface::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Surface::Open(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Surface::Open(session) => Some(session),
            Surface::Closed => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Surface::Open(session) => Some(session),
            Surface::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let surface = Surface::default();
        assert!(!surface.is_open());
        assert!(surface.session().is_none());
    }

    #[test]
    fn test_open_seeds_session() {
        let value = DateValue::new(2025, 5, 1, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let mut surface = Surface::default();
        surface.open(&value, today);

        let session = surface.session().unwrap();
        assert_eq!((session.grid.year(), session.grid.month0()), (2025, 5));
        assert_eq!(session.highlight.selected_day(), Some(20));
        assert_eq!(session.phase, Phase::Browsing);
    }

    #[test]
    fn test_close_discards_session() {
        let value = DateValue::new(2025, 5, 1, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let mut surface = Surface::default();
        surface.open(&value, today);
        surface.close();
        assert_eq!(surface, Surface::Closed);
    }
}
