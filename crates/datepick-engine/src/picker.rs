//! The top-level picker: owns the value, drives the surface and notifies the
//! owner.
//!
//! # States
//!
//! | From | Event | To |
//! |------|-------|----|
//! | `Closed` | [`activate`](DateTimePicker::activate) | `OpenBrowsing` |
//! | open | [`activate`](DateTimePicker::activate) | `Closed` |
//! | `OpenBrowsing` | [`pick_day`](DateTimePicker::pick_day), no time | `Closed` |
//! | `OpenBrowsing` | [`pick_day`](DateTimePicker::pick_day), time | `OpenTimeEditing` |
//! | `OpenTimeEditing` | [`pick_hour`](DateTimePicker::pick_hour) | `OpenTimeEditing` |
//! | `OpenTimeEditing` | [`pick_minute`](DateTimePicker::pick_minute) | `Closed` |
//! | open | navigation | unchanged |
//! | any | outside interaction | `Closed` |
//!
//! Every accepted pick calls the [`CommitSink`] exactly once with the new
//! value. A rejected call returns an error and leaves everything untouched.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::PickerConfig;
use crate::dropdown::{Dropdown, DropdownKind, Selection};
use crate::error::{PickerError, Result};
use crate::locale::{resolve_locale, BuiltinTranslations, ResolvedLocale, TranslationService};
use crate::navigation::{GridNavigation, Highlight};
use crate::surface::{Phase, Session, Surface};
use crate::value::DateValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PickerState {
    Closed,
    OpenBrowsing,
    OpenTimeEditing,
}

/// Receives every committed value.
pub trait CommitSink {
    fn on_date_committed(&mut self, value: DateValue);
}

impl<F> CommitSink for F
where
    F: FnMut(DateValue),
{
    fn on_date_committed(&mut self, value: DateValue) {
        self(value)
    }
}

/// A sink that records commits in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitLog {
    commits: Vec<DateValue>,
}

impl CommitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> &[DateValue] {
        &self.commits
    }

    pub fn last(&self) -> Option<&DateValue> {
        self.commits.last()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

impl CommitSink for CommitLog {
    fn on_date_committed(&mut self, value: DateValue) {
        self.commits.push(value);
    }
}

/// A date (and optionally time) picker instance.
pub struct DateTimePicker<S = CommitLog> {
    config: PickerConfig,
    locale: ResolvedLocale,
    value: DateValue,
    surface: Surface,
    clock: Box<dyn Clock>,
    sink: S,
}

impl<S: CommitSink> DateTimePicker<S> {
    /// A picker on the system clock with the bundled translations.
    ///
    /// Without an `initial` value the picker starts at the current moment.
    ///
    /// # Errors
    ///
    /// Propagates locale resolution errors (see [`resolve_locale`]).
    pub fn new(config: PickerConfig, initial: Option<DateValue>, sink: S) -> Result<Self> {
        Self::with_environment(
            config,
            initial,
            sink,
            Box::new(SystemClock),
            &BuiltinTranslations::new(),
        )
    }

    /// A picker with an explicit clock and translation service.
    ///
    /// The locale is resolved once here, for `config.lang`.
    pub fn with_environment(
        config: PickerConfig,
        initial: Option<DateValue>,
        sink: S,
        clock: Box<dyn Clock>,
        translations: &dyn TranslationService,
    ) -> Result<Self> {
        let now = clock.now();
        let locale = resolve_locale(translations, &config.lang, now.year())?;
        let value = initial.unwrap_or_else(|| DateValue::from_naive(now));
        debug!(lang = %locale.language, %value, time = config.show_time_select, "picker created");
        Ok(Self {
            config,
            locale,
            value,
            surface: Surface::Closed,
            clock,
            sink,
        })
    }

    pub fn state(&self) -> PickerState {
        match &self.surface {
            Surface::Closed => PickerState::Closed,
            Surface::Open(Session {
                phase: Phase::Browsing,
                ..
            }) => PickerState::OpenBrowsing,
            Surface::Open(Session {
                phase: Phase::TimeEditing,
                ..
            }) => PickerState::OpenTimeEditing,
        }
    }

    /// The committed value.
    pub fn value(&self) -> DateValue {
        self.value
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn locale(&self) -> &ResolvedLocale {
        &self.locale
    }

    /// Today's date according to the picker's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// Navigation of the open surface.
    pub fn grid(&self) -> Option<&GridNavigation> {
        self.surface.session().map(|s| &s.grid)
    }

    pub fn highlight(&self) -> Option<&Highlight> {
        self.surface.session().map(|s| &s.highlight)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Toggle the surface from the text field.
    ///
    /// Opening seeds the grid from the current value; closing discards the
    /// session without a commit.
    pub fn activate(&mut self) -> PickerState {
        if self.surface.is_open() {
            self.surface.close();
            debug!("surface closed by activation");
        } else {
            let today = self.today();
            self.surface.open(&self.value, today);
            debug!(year = self.value.year(), month0 = self.value.month0(), "surface opened");
        }
        self.state()
    }

    /// Report pointer activity; `outside_bounds` dismisses an open surface.
    pub fn notify_external_interaction(&mut self, outside_bounds: bool) -> PickerState {
        if outside_bounds && self.surface.is_open() {
            self.surface.close();
            debug!("surface dismissed by outside interaction");
        }
        self.state()
    }

    /// Show `month0` of `year` in the grid. The value is not touched.
    pub fn navigate_to_month(&mut self, year: i32, month0: u32) -> Result<()> {
        let today = self.today();
        let session = self.open_session("navigate to a month")?;
        session.grid.navigate_to_month(year, month0)?;
        session.highlight.recompute(&session.grid, today);
        Ok(())
    }

    /// Show `year` in the grid, keeping the navigated month.
    pub fn navigate_to_year(&mut self, year: i32) -> Result<()> {
        let today = self.today();
        let session = self.open_session("navigate to a year")?;
        session.grid.navigate_to_year(year);
        session.highlight.recompute(&session.grid, today);
        Ok(())
    }

    /// Pointer entered `Some(day)` or left the grid (`None`).
    pub fn hover_day(&mut self, day: Option<u32>) -> Result<()> {
        let session = self.open_session("hover a day")?;
        if let Some(d) = day {
            let days = session.grid.days()?;
            if !days.contains(&d) {
                return Err(PickerError::InvalidDate(format!(
                    "day {d} is not in {:04}-{:02}",
                    session.grid.year(),
                    session.grid.month0() + 1
                )));
            }
        }
        trace!(?day, "hover");
        session.highlight.hover(day);
        Ok(())
    }

    /// Pick `day` in the navigated month and commit it.
    ///
    /// Hour and minute carry over from the current value. Without time
    /// selection the surface closes; with it, time editing begins.
    pub fn pick_day(&mut self, day: u32) -> Result<DateValue> {
        let state = self.state();
        let session = self
            .surface
            .session_mut()
            .ok_or(PickerError::InvalidTransition {
                event: "pick a day",
                state,
            })?;
        let next = self
            .value
            .with_date(session.grid.year(), session.grid.month0(), day)?;
        session.highlight.select(day);
        session.phase = Phase::TimeEditing;
        if !self.config.show_time_select {
            self.surface.close();
        }
        self.commit(next, "day");
        Ok(next)
    }

    /// Set the hour and commit. The surface stays open.
    pub fn pick_hour(&mut self, hour: u32) -> Result<DateValue> {
        self.ensure_time_picker("pick an hour")?;
        let next = self.value.with_hour(hour)?;
        if let Some(session) = self.surface.session_mut() {
            session.phase = Phase::TimeEditing;
        }
        self.commit(next, "hour");
        Ok(next)
    }

    /// Set the minute, commit, and close the surface.
    pub fn pick_minute(&mut self, minute: u32) -> Result<DateValue> {
        self.ensure_time_picker("pick a minute")?;
        let next = self.value.with_minute(minute)?;
        self.surface.close();
        self.commit(next, "minute");
        Ok(next)
    }

    /// Whether the hour/minute sub-picker is shown.
    ///
    /// It appears once a day is picked, and also while the grid highlights
    /// today's date.
    pub fn time_picker_visible(&self) -> bool {
        self.config.show_time_select
            && self.surface.session().is_some_and(|s| {
                s.phase == Phase::TimeEditing || s.highlight.selected_day().is_some()
            })
    }

    /// The dropdown for `kind` as currently displayed.
    ///
    /// # Errors
    ///
    /// Year and month dropdowns need an open surface; hour and minute
    /// dropdowns need the time sub-picker to be visible.
    pub fn dropdown(&self, kind: DropdownKind) -> Result<Dropdown> {
        let dropdown = match kind {
            DropdownKind::Year | DropdownKind::Month => {
                let grid = self.grid().ok_or(PickerError::InvalidTransition {
                    event: "show the date dropdowns",
                    state: self.state(),
                })?;
                if kind == DropdownKind::Year {
                    Dropdown::years(&self.locale, grid.year())
                } else {
                    Dropdown::months(&self.locale, grid.month0())
                }
            }
            DropdownKind::Hour | DropdownKind::Minute => {
                self.ensure_time_picker("show the time dropdowns")?;
                if kind == DropdownKind::Hour {
                    Dropdown::hours(self.value.hour())
                } else {
                    Dropdown::minutes(self.value.minute())
                }
            }
        };
        Ok(if self.config.label {
            dropdown.with_caption(&self.locale)
        } else {
            dropdown
        })
    }

    /// Apply a resolved dropdown pick.
    ///
    /// Returns the committed value for hour and minute picks, `None` for
    /// year and month navigation.
    pub fn select(&mut self, selection: Selection) -> Result<Option<DateValue>> {
        match selection {
            Selection::Year(year) => self.navigate_to_year(year).map(|()| None),
            Selection::Month(month0) => {
                let year = self
                    .grid()
                    .map(GridNavigation::year)
                    .ok_or(PickerError::InvalidTransition {
                        event: "navigate to a month",
                        state: self.state(),
                    })?;
                self.navigate_to_month(year, month0).map(|()| None)
            }
            Selection::Hour(hour) => self.pick_hour(hour).map(Some),
            Selection::Minute(minute) => self.pick_minute(minute).map(Some),
        }
    }

    /// Resolve `label` against the `kind` dropdown and apply it.
    pub fn select_option(&mut self, kind: DropdownKind, label: &str) -> Result<Option<DateValue>> {
        let selection = self.dropdown(kind)?.resolve(label)?;
        self.select(selection)
    }

    fn open_session(&mut self, event: &'static str) -> Result<&mut Session> {
        let state = self.state();
        self.surface
            .session_mut()
            .ok_or(PickerError::InvalidTransition { event, state })
    }

    fn ensure_time_picker(&self, event: &'static str) -> Result<()> {
        if !self.config.show_time_select {
            return Err(PickerError::TimeSelectionDisabled);
        }
        if !self.time_picker_visible() {
            return Err(PickerError::InvalidTransition {
                event,
                state: self.state(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, next: DateValue, field: &'static str) {
        self.value = next;
        debug!(field, value = %next, state = ?self.state(), "commit");
        self.sink.on_date_committed(next);
    }
}

impl<S> std::fmt::Debug for DateTimePicker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateTimePicker")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
